//! Planet representation with two permanent variants
//!
//! A *basic* planet knows only its name and orbital distance, which is enough
//! to compute its orbital period. An *enhanced* planet also carries a mass and
//! a radius (giving surface gravity) and, when it belongs to a system, a link
//! to its host star (giving habitability). The variant is fixed at
//! construction and a planet never changes after it is built.

use std::fmt;
use std::hash::{Hash, Hasher};

use tracing::debug;
use units::{Length, Luminosity, Mass, Radius, was_clamped};
use uuid::Uuid;

use crate::format::DisplayQuantity;
use crate::habitability::HabitabilityCriteria;

/// Host star properties a planet needs for habitability
///
/// This is a non-owning handle: it records which system the planet orbits
/// (by id) and a copy of that system's luminosity, which never changes after
/// the system is created. Holding a handle never keeps a system alive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HostStar {
    /// Id of the parent system
    pub system_id: Uuid,
    /// Stellar luminosity in solar luminosities (L☉)
    pub luminosity: Luminosity,
}

impl HostStar {
    /// Create a new host star context
    pub fn new(system_id: Uuid, luminosity: Luminosity) -> Self {
        Self {
            system_id,
            luminosity,
        }
    }
}

/// The two construction-time forms of a planet
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlanetVariant {
    /// Name and distance only; mass and radius read as zero
    Basic,
    /// Fully attributed planet, optionally linked to its host star
    Enhanced {
        mass: Mass,
        radius: Radius,
        host: Option<HostStar>,
    },
}

/// A planet orbiting a star
///
/// Equality and hashing consider the variant, the name and the exact bit
/// patterns of distance, mass and radius. The host link is not compared.
///
/// # Example
/// ```
/// use planetary::Planet;
///
/// let mars = Planet::basic("Mars", 1.52);
/// assert_eq!(
///     mars.to_string(),
///     "Mars  is 1.52AU from its star, and orbits in 1.874 years"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Planet {
    name: String,
    distance: Length,
    variant: PlanetVariant,
}

impl Planet {
    /// Create a basic planet from a name and a distance in AU
    ///
    /// A negative distance is stored as zero. Mass and radius are zero and
    /// there is no host link; a basic planet can never become enhanced.
    pub fn basic(name: impl Into<String>, distance: f64) -> Self {
        let name = name.into();
        if was_clamped(distance) {
            debug!(planet = %name, distance, "clamped planet distance to zero");
        }

        Self {
            name,
            distance: Length::from_au(distance),
            variant: PlanetVariant::Basic,
        }
    }

    /// Create an enhanced planet
    ///
    /// Mass and radius are in Earth units, distance in AU. Each of the three
    /// is clamped to zero independently when negative. `host` may be `None`
    /// for a planet that is not attached to any system.
    pub fn enhanced(
        name: impl Into<String>,
        mass: f64,
        radius: f64,
        distance: f64,
        host: Option<HostStar>,
    ) -> Self {
        let name = name.into();
        for (field, value) in [("mass", mass), ("radius", radius), ("distance", distance)] {
            if was_clamped(value) {
                debug!(planet = %name, field, value, "clamped planet attribute to zero");
            }
        }

        Self {
            name,
            distance: Length::from_au(distance),
            variant: PlanetVariant::Enhanced {
                mass: Mass::from_earth_masses(mass),
                radius: Radius::from_earth_radii(radius),
                host,
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Distance from the host star (full precision)
    pub fn distance(&self) -> Length {
        self.distance
    }

    /// Planet mass; zero for basic planets
    pub fn mass(&self) -> Mass {
        match self.variant {
            PlanetVariant::Basic => Mass::zero(),
            PlanetVariant::Enhanced { mass, .. } => mass,
        }
    }

    /// Planet radius; zero for basic planets
    pub fn radius(&self) -> Radius {
        match self.variant {
            PlanetVariant::Basic => Radius::zero(),
            PlanetVariant::Enhanced { radius, .. } => radius,
        }
    }

    pub fn variant(&self) -> &PlanetVariant {
        &self.variant
    }

    pub fn is_enhanced(&self) -> bool {
        matches!(self.variant, PlanetVariant::Enhanced { .. })
    }

    /// Link to the host star, present only for enhanced planets built with one
    pub fn host(&self) -> Option<&HostStar> {
        match &self.variant {
            PlanetVariant::Basic => None,
            PlanetVariant::Enhanced { host, .. } => host.as_ref(),
        }
    }

    /// Id of the system this planet is linked to, if any
    pub fn parent_system_id(&self) -> Option<Uuid> {
        self.host().map(|host| host.system_id)
    }

    /// Returns orbital period in years: √(a³) with `a` in AU
    pub fn orbital_period(&self) -> f64 {
        let a_au = self.distance.to_au();
        (a_au * a_au * a_au).sqrt()
    }

    /// Returns surface gravity in Earth gravities: M / R²
    ///
    /// A zero radius divides by zero, so basic planets (and enhanced planets
    /// built with a zero radius) yield `+inf`, or NaN when the mass is also
    /// zero. Callers must not read meaning into that value.
    pub fn surface_gravity(&self) -> f64 {
        let radius = self.radius().to_earth_radii();
        self.mass().to_earth_masses() / (radius * radius)
    }

    /// Check habitability against the default criteria
    ///
    /// Always `false` without a host link.
    pub fn could_be_habitable(&self) -> bool {
        self.could_be_habitable_with(&HabitabilityCriteria::default())
    }

    /// Check habitability against custom criteria
    pub fn could_be_habitable_with(&self, criteria: &HabitabilityCriteria) -> bool {
        match self.host() {
            Some(host) => criteria.admits(self.distance, self.mass(), host.luminosity),
            None => false,
        }
    }

    fn variant_tag(&self) -> u8 {
        match self.variant {
            PlanetVariant::Basic => 0,
            PlanetVariant::Enhanced { .. } => 1,
        }
    }
}

impl PartialEq for Planet {
    fn eq(&self, other: &Self) -> bool {
        self.variant_tag() == other.variant_tag()
            && self.name == other.name
            && self.distance == other.distance
            && self.mass() == other.mass()
            && self.radius() == other.radius()
    }
}

impl Eq for Planet {}

impl Hash for Planet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.variant_tag().hash(state);
        self.name.hash(state);
        self.distance.hash(state);
        self.mass().hash(state);
        self.radius().hash(state);
    }
}

impl fmt::Display for Planet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let distance = DisplayQuantity::rounded(self.distance.to_au());
        let period = DisplayQuantity::rounded(self.orbital_period());

        // Layout depends on the host link, not on whether mass/radius exist
        if self.host().is_none() {
            return write!(
                f,
                "{}  is {}AU from its star, and orbits in {} years",
                self.name, distance, period
            );
        }

        let habitable = if self.could_be_habitable() { "yes" } else { "no" };
        write!(
            f,
            "{} has a mass of {} Earths with a surface gravity of {}g, is {}AU from its star, \
             and orbits in {} years: could be habitable? {}",
            self.name,
            DisplayQuantity::rounded(self.mass().to_earth_masses()),
            DisplayQuantity::rounded(self.surface_gravity()),
            distance,
            period,
            habitable
        )
    }
}

// =============================================================================
// Factory functions for Solar System analogs
// =============================================================================

/// Create a Mercury analog
pub fn mercury_analog(host: Option<HostStar>) -> Planet {
    Planet::enhanced("Mercury", 0.055, 0.383, 0.387, host)
}

/// Create an Earth analog
pub fn earth_analog(host: Option<HostStar>) -> Planet {
    Planet::enhanced("Earth", 1.0, 1.0, 1.0, host)
}

/// Create a Mars analog
pub fn mars_analog(host: Option<HostStar>) -> Planet {
    Planet::enhanced("Mars", 0.107, 0.532, 1.524, host)
}

/// Create a Jupiter analog
pub fn jupiter_analog(host: Option<HostStar>) -> Planet {
    Planet::enhanced("Jupiter", 317.8, 11.2, 5.2, host)
}
