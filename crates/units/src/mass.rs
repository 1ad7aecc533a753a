use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Planet mass in Earth masses (Earth = 1.0)
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let jupiter = Mass::from_earth_masses(317.8);
/// assert_eq!(jupiter.to_earth_masses(), 317.8);
/// assert_eq!(Mass::from_earth_masses(-1.0).to_earth_masses(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Mass(f64); // Base unit: Earth masses

impl Mass {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Mass` from a value in Earth masses, clamping negatives to zero.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(crate::non_negative(value))
    }

    /// Returns the mass in Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0
    }
}

impl PartialEq for Mass {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Mass {}

impl Hash for Mass {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Mass {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
