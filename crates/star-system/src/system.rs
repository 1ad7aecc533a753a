//! Solar system structure

use std::fmt;

use planetary::habitability::{HabitabilityCriteria, HabitableZone};
use planetary::planet::{HostStar, Planet};
use tracing::debug;
use units::{Luminosity, was_clamped};
use uuid::Uuid;

use crate::tracking::DistanceExtremes;

/// A named star and the planets that orbit it
///
/// Planets are kept in insertion order, names need not be unique and
/// nothing is ever removed. The luminosity is fixed at construction.
///
/// Planets added with [`SolarSystem::add_planet`] are basic planets and take
/// part in furthest/closest tracking. Planets added with
/// [`SolarSystem::add_enhanced_planet`] are linked back to this system for
/// habitability but are *not* tracked, so `furthest()` and `closest()` only
/// ever report basic planets.
///
/// Mutation takes `&mut self`; sharing a system between threads that add
/// planets needs an external lock such as a `Mutex<SolarSystem>`.
///
/// # Examples
///
/// ```
/// use star_system::SolarSystem;
///
/// let mut sol = SolarSystem::with_luminosity("Sol", 1.0);
/// sol.add_planet("Mercury", 0.39);
/// sol.add_enhanced_planet("Earth", 1.0, 1.0, 1.0);
///
/// assert_eq!(sol.planet_count(), 2);
/// assert!(sol.planet_by_name("Earth").unwrap().could_be_habitable());
/// assert_eq!(sol.furthest().unwrap().name(), "Mercury");
/// ```
#[derive(Debug)]
pub struct SolarSystem {
    id: Uuid,
    name: String,
    luminosity: Luminosity,
    planets: Vec<Planet>,
    extremes: DistanceExtremes,
}

impl SolarSystem {
    /// Create a system whose star has no recorded luminosity (L = 0)
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(Uuid::new_v4(), name, 0.0)
    }

    /// Create a system with a luminosity in solar units
    ///
    /// A negative luminosity is stored as zero. It cannot be changed later.
    pub fn with_luminosity(name: impl Into<String>, luminosity: f64) -> Self {
        Self::with_id(Uuid::new_v4(), name, luminosity)
    }

    /// Create a system with a specific id
    ///
    /// Useful when planets built elsewhere must link to a known system.
    pub fn with_id(id: Uuid, name: impl Into<String>, luminosity: f64) -> Self {
        let name = name.into();
        if was_clamped(luminosity) {
            debug!(system = %name, luminosity, "clamped luminosity to zero");
        }

        Self {
            id,
            name,
            luminosity: Luminosity::from_solar(luminosity),
            planets: Vec::new(),
            extremes: DistanceExtremes::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn luminosity(&self) -> Luminosity {
        self.luminosity
    }

    /// Handle that enhanced planets use to refer back to this system
    pub fn host_star(&self) -> HostStar {
        HostStar::new(self.id, self.luminosity)
    }

    /// Add a basic planet (name and distance only)
    ///
    /// The planet carries no link back to this system. It is considered for
    /// furthest/closest tracking, compared by the `distance` passed here rather
    /// than the clamped value it stores.
    pub fn add_planet(&mut self, name: impl Into<String>, distance: f64) -> &Planet {
        let planet = Planet::basic(name, distance);
        let index = self.planets.len();
        self.extremes.record(index, distance);
        self.push(planet)
    }

    /// Add an enhanced planet linked to this system
    ///
    /// Mass and radius are in Earth units, distance in AU. The planet is not
    /// considered for furthest/closest tracking.
    pub fn add_enhanced_planet(
        &mut self,
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        distance: f64,
    ) -> &Planet {
        let planet = Planet::enhanced(name, mass, radius, distance, Some(self.host_star()));
        self.push(planet)
    }

    fn push(&mut self, planet: Planet) -> &Planet {
        debug!(
            system = %self.name,
            planet = %planet.name(),
            enhanced = planet.is_enhanced(),
            "added planet"
        );
        let index = self.planets.len();
        self.planets.push(planet);
        &self.planets[index]
    }

    /// Planet at `index` in insertion order
    pub fn planet(&self, index: usize) -> Option<&Planet> {
        self.planets.get(index)
    }

    /// First planet (in insertion order) with exactly this name
    pub fn planet_by_name(&self, name: &str) -> Option<&Planet> {
        self.planets.iter().find(|p| p.name() == name)
    }

    /// Furthest planet among those added with [`SolarSystem::add_planet`]
    pub fn furthest(&self) -> Option<&Planet> {
        self.extremes.furthest().and_then(|index| self.planets.get(index))
    }

    /// Closest planet among those added with [`SolarSystem::add_planet`]
    pub fn closest(&self) -> Option<&Planet> {
        self.extremes.closest().and_then(|index| self.planets.get(index))
    }

    /// Number of planets of both variants
    pub fn planet_count(&self) -> usize {
        self.planets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// All planets in insertion order
    pub fn planets(&self) -> &[Planet] {
        &self.planets
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Planet> {
        self.planets.iter()
    }

    /// Habitable zone boundaries for this star under the default criteria
    pub fn habitable_zone(&self) -> HabitableZone {
        HabitabilityCriteria::default().zone(self.luminosity)
    }

    /// Planets that could be habitable under the default criteria
    pub fn habitable_planets(&self) -> Vec<&Planet> {
        self.habitable_planets_with(&HabitabilityCriteria::default())
    }

    /// Planets that could be habitable under custom criteria
    pub fn habitable_planets_with(&self, criteria: &HabitabilityCriteria) -> Vec<&Planet> {
        self.planets
            .iter()
            .filter(|p| p.could_be_habitable_with(criteria))
            .collect()
    }
}

impl<'a> IntoIterator for &'a SolarSystem {
    type Item = &'a Planet;
    type IntoIter = std::slice::Iter<'a, Planet>;

    fn into_iter(self) -> Self::IntoIter {
        self.planets.iter()
    }
}

impl fmt::Display for SolarSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Star {} has planets:", self.name)?;
        for planet in &self.planets {
            writeln!(f, "{planet}")?;
        }
        Ok(())
    }
}
