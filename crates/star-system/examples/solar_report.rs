//! Build the inner Solar System and print its report
//!
//! Usage: RUST_LOG=debug cargo run -p star-system --example solar_report

use star_system::SolarSystem;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut sol = SolarSystem::with_luminosity("Sol", 1.0);
    sol.add_planet("Mercury", 0.387);
    sol.add_planet("Venus", 0.723);
    sol.add_enhanced_planet("Earth", 1.0, 1.0, 1.0);
    sol.add_enhanced_planet("Mars", 0.107, 0.532, 1.524);
    sol.add_planet("Jupiter", 5.2);

    print!("{sol}");

    let zone = sol.habitable_zone();
    println!(
        "Habitable zone: {:.2}-{:.2} AU",
        zone.inner_edge, zone.outer_edge
    );
    if let (Some(closest), Some(furthest)) = (sol.closest(), sol.furthest()) {
        println!("Closest: {}, furthest: {}", closest.name(), furthest.name());
    }
    for planet in sol.habitable_planets() {
        println!("{} could be habitable", planet.name());
    }
}
