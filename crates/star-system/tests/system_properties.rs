//! Property tests for furthest/closest tracking.

use proptest::prelude::*;
use star_system::SolarSystem;

#[derive(Debug, Clone)]
enum Insert {
    Basic(f64),
    Enhanced(f64),
}

fn insert_strategy() -> impl Strategy<Value = Insert> {
    prop_oneof![
        (-5.0f64..50.0).prop_map(Insert::Basic),
        (-5.0f64..50.0).prop_map(Insert::Enhanced),
    ]
}

proptest! {
    /// Furthest/closest equal the first max/min among basic planets only.
    #[test]
    fn extremes_follow_basic_planets_only(
        inserts in proptest::collection::vec(insert_strategy(), 0..40),
    ) {
        let mut system = SolarSystem::with_luminosity("Prop", 1.0);
        let mut expected_furthest: Option<(usize, f64)> = None;
        let mut expected_closest: Option<(usize, f64)> = None;

        for (index, insert) in inserts.iter().enumerate() {
            match *insert {
                Insert::Basic(distance) => {
                    // Raw input is compared against the tracked planet's stored distance
                    let stored = system.add_planet(format!("b{index}"), distance).distance().to_au();
                    if expected_furthest.is_none_or(|(_, d)| distance > d) {
                        expected_furthest = Some((index, stored));
                    }
                    if expected_closest.is_none_or(|(_, d)| distance < d) {
                        expected_closest = Some((index, stored));
                    }
                }
                Insert::Enhanced(distance) => {
                    system.add_enhanced_planet(format!("e{index}"), 1.0, 1.0, distance);
                }
            }
        }

        prop_assert_eq!(system.planet_count(), inserts.len());
        prop_assert_eq!(
            system.furthest().map(|p| p.name().to_string()),
            expected_furthest.map(|(index, _)| format!("b{index}"))
        );
        prop_assert_eq!(
            system.closest().map(|p| p.name().to_string()),
            expected_closest.map(|(index, _)| format!("b{index}"))
        );
    }

    /// Index lookup agrees with insertion order and rejects index >= count.
    #[test]
    fn index_lookup_matches_insertion_order(
        distances in proptest::collection::vec(0.0f64..10.0, 0..20),
    ) {
        let mut system = SolarSystem::new("Prop");
        for (index, distance) in distances.iter().enumerate() {
            system.add_planet(format!("p{index}"), *distance);
        }

        for index in 0..distances.len() {
            let expected = format!("p{index}");
            prop_assert_eq!(system.planet(index).map(|p| p.name()), Some(expected.as_str()));
        }
        prop_assert!(system.planet(distances.len()).is_none());
    }
}
