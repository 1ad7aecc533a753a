//! Fixed-precision rendering of quantities in planet and system reports
//!
//! Rounding happens here and only here: the values stored in a `Planet` and
//! returned by its getters always keep full precision.

use std::fmt;

/// Number of decimal places shown for every numeric field in a report
pub const DISPLAY_PLACES: i32 = 3;

/// Values at or above this magnitude are shown in `d.dddE<n>` notation
const SCIENTIFIC_THRESHOLD: f64 = 1e7;

/// Round half-up to [`DISPLAY_PLACES`] decimal places
///
/// Computes `floor(value * 1000 + 0.5) / 1000`. Non-finite values (for
/// example the surface gravity of a zero-radius planet) pass through unchanged
/// and render as `Infinity` / `NaN`.
///
/// This is not byte-compatible with a rounding that goes through a saturating
/// 64-bit integer: there `+inf` becomes `9.223372036854776E15` and NaN becomes
/// `0.0`, and finite values above about 9.2e15 are capped. Here they are not.
pub fn round_for_display(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(DISPLAY_PLACES);
    (value * factor + 0.5).floor() / factor
}

/// A rounded quantity ready to be written into a report
///
/// Integral values keep a trailing `.0` (`1.0`, not `1`), very large values use
/// scientific notation with an upper-case `E` and infinities are spelled out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayQuantity(pub f64);

impl DisplayQuantity {
    /// Round `value` for display
    pub fn rounded(value: f64) -> Self {
        Self(round_for_display(value))
    }
}

impl fmt::Display for DisplayQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        if value.is_nan() {
            return write!(f, "NaN");
        }
        if value.is_infinite() {
            let sign = if value < 0.0 { "-" } else { "" };
            return write!(f, "{sign}Infinity");
        }
        if value.abs() >= SCIENTIFIC_THRESHOLD {
            let sci = format!("{value:E}");
            return match sci.split_once('E') {
                Some((mantissa, exponent)) if !mantissa.contains('.') => {
                    write!(f, "{mantissa}.0E{exponent}")
                }
                _ => write!(f, "{sci}"),
            };
        }
        if value.fract() == 0.0 {
            write!(f, "{value:.1}")
        } else {
            write!(f, "{value}")
        }
    }
}
