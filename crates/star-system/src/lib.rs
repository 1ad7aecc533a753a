//! Star systems and the planets that orbit them
//!
//! A `SolarSystem` is a named star with a fixed luminosity that owns an
//! append-only, insertion-ordered list of planets and keeps track of the
//! furthest and closest planets as they are added.

pub mod system;
pub mod tracking;

// Re-export main types at crate root
pub use system::SolarSystem;
pub use tracking::DistanceExtremes;

// Re-export planetary types for convenience
pub use planetary::habitability::{HabitabilityCriteria, HabitableZone};
pub use planetary::planet::{HostStar, Planet, PlanetVariant};

#[cfg(test)]
mod tracking_test;
