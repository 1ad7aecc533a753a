use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Distance from a star in astronomical units (Earth's orbit = 1.0)
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let earth_orbit = Length::from_au(1.0);
/// assert_eq!(earth_orbit.to_au(), 1.0);
///
/// // Negative distances are clamped on construction
/// assert_eq!(Length::from_au(-3.0), Length::zero());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Length(f64); // Base unit: AU

impl Length {
    /// Creates a zero length value
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in astronomical units.
    ///
    /// Values that are not strictly positive are stored as zero.
    pub fn from_au(value: f64) -> Self {
        Self(crate::non_negative(value))
    }

    /// Returns the length in astronomical units.
    pub fn to_au(&self) -> f64 {
        self.0
    }

    /// Raise to integer power (returns dimensionless f64 for dimensional consistency)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl PartialEq for Length {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Length {}

impl Hash for Length {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
