//! Planet model and derived planetary quantities
//!
//! This crate provides the `Planet` type in its two permanent forms (basic and
//! enhanced), the habitability criteria used to flag potentially habitable
//! worlds, and the fixed-precision formatting used in textual reports.

pub mod error;
pub mod format;
pub mod habitability;
pub mod planet;

// Re-export key types at crate root
pub use error::{CriteriaError, CriteriaResult};
pub use format::{DISPLAY_PLACES, DisplayQuantity, round_for_display};
pub use habitability::{
    HabitabilityCriteria, HabitableZone, MAX_DIST_FACTOR, MAX_MASS, MIN_DIST_FACTOR, MIN_MASS,
};
pub use planet::{HostStar, Planet, PlanetVariant};
