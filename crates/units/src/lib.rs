//! Normalized physical quantities
//!
//! Every quantity is expressed relative to a familiar reference body
//! (Earth's orbit, Earth's mass and radius, the Sun's luminosity) and is
//! never negative: constructors clamp anything that is not strictly
//! positive to zero.

pub mod length;
pub mod luminosity;
pub mod mass;
pub mod radius;


pub use length::Length;
pub use luminosity::Luminosity;
pub use mass::Mass;
pub use radius::Radius;

/// Clamp a raw value to the non-negative range used by every quantity
///
/// Returns `value` when it is strictly positive (including `+inf`) and
/// `0.0` otherwise. Negative values, `-0.0` and NaN all become `0.0`.
pub fn non_negative(value: f64) -> f64 {
    if value > 0.0 { value } else { 0.0 }
}

/// Whether `non_negative` would change the stored representation of `value`
pub fn was_clamped(value: f64) -> bool {
    non_negative(value).to_bits() != value.to_bits()
}
