use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Planet radius in Earth radii (Earth = 1.0)
///
/// Kept separate from [`crate::Length`] so that radii stay in their
/// Earth-relative form with no conversion through AU.
#[derive(Debug, Clone, Copy, Default)]
pub struct Radius(f64); // Base unit: Earth radii

impl Radius {
    pub fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Radius` from a value in Earth radii, clamping negatives to zero.
    pub fn from_earth_radii(value: f64) -> Self {
        Self(crate::non_negative(value))
    }

    /// Returns the radius in Earth radii.
    pub fn to_earth_radii(&self) -> f64 {
        self.0
    }

    /// Raise to integer power (returns dimensionless f64)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl PartialEq for Radius {
    fn eq(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }
}

impl Eq for Radius {}

impl Hash for Radius {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

impl PartialOrd for Radius {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}
