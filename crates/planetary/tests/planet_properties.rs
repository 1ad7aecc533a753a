//! Property tests for the derived planet quantities and planet identity.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use planetary::{HostStar, Planet};
use proptest::prelude::*;
use units::Luminosity;
use uuid::Uuid;

fn hash_of(planet: &Planet) -> u64 {
    let mut hasher = DefaultHasher::new();
    planet.hash(&mut hasher);
    hasher.finish()
}

fn host(luminosity: f64) -> Option<HostStar> {
    Some(HostStar::new(Uuid::nil(), Luminosity::from_solar(luminosity)))
}

proptest! {
    /// The orbital period follows Kepler's third law for any non-negative distance.
    #[test]
    fn orbital_period_is_kepler(distance in 0.0f64..1_000.0) {
        let planet = Planet::basic("P", distance);
        prop_assert_eq!(planet.orbital_period(), (distance * distance * distance).sqrt());
    }

    /// Negative distances are stored as zero and give a zero period.
    #[test]
    fn negative_distance_clamps_to_zero(distance in -1_000.0f64..0.0) {
        let planet = Planet::basic("P", distance);
        prop_assert_eq!(planet.distance().to_au(), 0.0);
        prop_assert_eq!(planet.orbital_period(), 0.0);
    }

    /// Surface gravity is M / R² for strictly positive mass and radius.
    #[test]
    fn surface_gravity_is_mass_over_radius_squared(
        mass in 0.001f64..1_000.0,
        radius in 0.001f64..100.0,
    ) {
        let planet = Planet::enhanced("P", mass, radius, 1.0, None);
        prop_assert_eq!(planet.surface_gravity(), mass / (radius * radius));
    }

    /// Stored quantities are never negative, whatever the input.
    #[test]
    fn stored_quantities_are_non_negative(
        mass in -10.0f64..10.0,
        radius in -10.0f64..10.0,
        distance in -10.0f64..10.0,
    ) {
        let planet = Planet::enhanced("P", mass, radius, distance, None);
        prop_assert!(planet.mass().to_earth_masses() >= 0.0);
        prop_assert!(planet.radius().to_earth_radii() >= 0.0);
        prop_assert!(planet.distance().to_au() >= 0.0);
    }

    /// Habitability holds exactly when both bands hold and a host is present.
    #[test]
    fn habitability_matches_bands(
        mass in 0.0f64..10.0,
        distance in 0.0f64..5.0,
        luminosity in 0.0f64..4.0,
    ) {
        let lum_factor = luminosity.sqrt();
        let expected = (0.75 * lum_factor..=2.0 * lum_factor).contains(&distance)
            && (0.6..=7.0).contains(&mass);

        let linked = Planet::enhanced("P", mass, 1.0, distance, host(luminosity));
        prop_assert_eq!(linked.could_be_habitable(), expected);

        let detached = Planet::enhanced("P", mass, 1.0, distance, None);
        prop_assert!(!detached.could_be_habitable());
    }

    /// Identical inputs give equal planets with equal hashes.
    #[test]
    fn equal_planets_share_a_hash(
        name in "[A-Za-z]{1,12}",
        mass in 0.0f64..10.0,
        radius in 0.0f64..10.0,
        distance in 0.0f64..10.0,
    ) {
        let a = Planet::enhanced(name.clone(), mass, radius, distance, host(1.0));
        let b = Planet::enhanced(name, mass, radius, distance, None);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    /// Changing any one field breaks equality.
    #[test]
    fn changing_a_field_breaks_equality(
        mass in 0.1f64..10.0,
        radius in 0.1f64..10.0,
        distance in 0.1f64..10.0,
        delta in 0.01f64..1.0,
    ) {
        let base = Planet::enhanced("P", mass, radius, distance, None);
        prop_assert_ne!(&base, &Planet::enhanced("Q", mass, radius, distance, None));
        prop_assert_ne!(&base, &Planet::enhanced("P", mass + delta, radius, distance, None));
        prop_assert_ne!(&base, &Planet::enhanced("P", mass, radius + delta, distance, None));
        prop_assert_ne!(&base, &Planet::enhanced("P", mass, radius, distance + delta, None));
    }

    /// A basic planet never equals an enhanced one, even with matching fields.
    #[test]
    fn variants_never_compare_equal(distance in 0.0f64..10.0) {
        let basic = Planet::basic("P", distance);
        let enhanced = Planet::enhanced("P", 0.0, 0.0, distance, None);
        prop_assert_ne!(basic, enhanced);
    }
}
