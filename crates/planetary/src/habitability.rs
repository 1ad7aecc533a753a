//! Habitability criteria and the luminosity-scaled habitable zone
//!
//! A planet is flagged as potentially habitable when its mass lies in a fixed
//! band and its distance lies in a band that scales with the square root of the
//! host star's luminosity. The default bands assume that around a Sun-like
//! star a planet must orbit between 0.75 AU and 2.0 AU and weigh between
//! 0.6 and 7.0 Earth masses, enough to hold an atmosphere but not so much that
//! the atmosphere becomes crushingly dense.

use serde::{Deserialize, Serialize};
use tracing::debug;
use units::{Length, Luminosity, Mass};

use crate::error::{CriteriaError, CriteriaResult};

/// Inner edge of the habitable band around a 1 L☉ star (AU)
pub const MIN_DIST_FACTOR: f64 = 0.75;

/// Outer edge of the habitable band around a 1 L☉ star (AU)
pub const MAX_DIST_FACTOR: f64 = 2.0;

/// Minimum mass able to retain an atmosphere (M⊕)
pub const MIN_MASS: f64 = 0.6;

/// Maximum mass before the atmosphere is too dense to be habitable (M⊕)
pub const MAX_MASS: f64 = 7.0;

/// Tunable bounds used by habitability checks
///
/// Missing fields fall back to the module constants, so an empty TOML
/// document yields [`HabitabilityCriteria::default`].
///
/// # Example
/// ```
/// use planetary::HabitabilityCriteria;
///
/// let criteria = HabitabilityCriteria::from_toml_str("max_mass = 10.0").unwrap();
/// assert_eq!(criteria.max_mass, 10.0);
/// assert_eq!(criteria.min_mass, planetary::MIN_MASS);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HabitabilityCriteria {
    /// Inner distance factor, multiplied by √L
    pub min_distance_factor: f64,
    /// Outer distance factor, multiplied by √L
    pub max_distance_factor: f64,
    /// Lightest habitable mass (M⊕)
    pub min_mass: f64,
    /// Heaviest habitable mass (M⊕)
    pub max_mass: f64,
}

impl Default for HabitabilityCriteria {
    fn default() -> Self {
        Self {
            min_distance_factor: MIN_DIST_FACTOR,
            max_distance_factor: MAX_DIST_FACTOR,
            min_mass: MIN_MASS,
            max_mass: MAX_MASS,
        }
    }
}

impl HabitabilityCriteria {
    /// Parse criteria from TOML text and validate them
    pub fn from_toml_str(text: &str) -> CriteriaResult<Self> {
        let criteria: Self = toml::from_str(text)?;
        criteria.validate()?;
        debug!(?criteria, "loaded habitability criteria");
        Ok(criteria)
    }

    /// Check that every bound is finite and non-negative and that no band is inverted
    pub fn validate(&self) -> CriteriaResult<()> {
        let bounds = [
            ("min_distance_factor", self.min_distance_factor),
            ("max_distance_factor", self.max_distance_factor),
            ("min_mass", self.min_mass),
            ("max_mass", self.max_mass),
        ];
        for (field, value) in bounds {
            if !value.is_finite() || value < 0.0 {
                return Err(CriteriaError::InvalidBound { field, value });
            }
        }

        if self.min_distance_factor > self.max_distance_factor {
            return Err(CriteriaError::InvertedBand {
                band: "distance",
                min: self.min_distance_factor,
                max: self.max_distance_factor,
            });
        }
        if self.min_mass > self.max_mass {
            return Err(CriteriaError::InvertedBand {
                band: "mass",
                min: self.min_mass,
                max: self.max_mass,
            });
        }

        Ok(())
    }

    /// Habitable zone around a star of the given luminosity
    pub fn zone(&self, luminosity: Luminosity) -> HabitableZone {
        HabitableZone::from_luminosity(luminosity, self)
    }

    /// Whether a mass falls inside the (inclusive) mass band
    pub fn admits_mass(&self, mass: Mass) -> bool {
        (self.min_mass..=self.max_mass).contains(&mass.to_earth_masses())
    }

    /// Both bands at once: distance scaled by `luminosity`, and mass
    pub fn admits(&self, distance: Length, mass: Mass, luminosity: Luminosity) -> bool {
        self.zone(luminosity).contains(distance) && self.admits_mass(mass)
    }
}

/// Habitable zone boundaries in AU, inclusive on both edges
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HabitableZone {
    pub inner_edge: f64,
    pub outer_edge: f64,
}

impl HabitableZone {
    /// `factor * √L` for both edges
    pub fn from_luminosity(luminosity: Luminosity, criteria: &HabitabilityCriteria) -> Self {
        let lum_factor = luminosity.sqrt();
        Self {
            inner_edge: criteria.min_distance_factor * lum_factor,
            outer_edge: criteria.max_distance_factor * lum_factor,
        }
    }

    pub fn contains(&self, distance: Length) -> bool {
        (self.inner_edge..=self.outer_edge).contains(&distance.to_au())
    }
}
