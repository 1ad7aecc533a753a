use std::cmp::Ordering;

/// Stellar luminosity in solar luminosities (L☉ = 1.0)
///
/// # Examples
///
/// ```rust
/// use units::Luminosity;
///
/// let sun = Luminosity::from_solar(1.0);
/// assert_eq!(sun.sqrt(), 1.0);
///
/// // A star with no recorded luminosity is dark
/// assert_eq!(Luminosity::from_solar(-0.5), Luminosity::zero());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Luminosity(f64); // Base unit: L☉

impl Luminosity {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Luminosity` from a value in solar luminosities.
    ///
    /// Values that are not strictly positive are stored as zero.
    pub fn from_solar(value: f64) -> Self {
        Self(crate::non_negative(value))
    }

    /// Returns the luminosity in solar luminosities.
    pub fn to_solar(&self) -> f64 {
        self.0
    }

    /// Square root of the luminosity, the factor that scales
    /// flux-based distances (flux falls off as 1/d²)
    pub fn sqrt(&self) -> f64 {
        self.0.sqrt()
    }
}

impl PartialEq for Luminosity {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl PartialOrd for Luminosity {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
