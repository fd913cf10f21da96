//! Rounding helpers.
//!
//! Color channels and HSL coordinates are rounded with the conventions of web
//! tooling, which differ from Rust's [`f64::round`] on ties: ties always round
//! toward positive infinity.

/// The factor determining rounding precision for equality testing.
///
/// When limiting a floating point number's precision, the number is multiplied
/// by this factor, rounded, and then compared. It translates into significant
/// digits after the decimal.
pub(crate) const ROUNDING_FACTOR: f64 = 1e12;

/// Round to the nearest integer, with ties rounding toward positive infinity.
///
/// Unlike [`f64::round`], which rounds ties away from zero, this function
/// rounds `-2.5` to `-2.0`. The subtraction `value - floor` is exact for all
/// magnitudes this crate encounters.
#[inline]
pub(crate) fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Round to one digit after the decimal.
///
/// The result is the tenth nearest to the *exact* binary value of the
/// argument, with exact ties rounding up. A binary floating point number is
/// an exact tie between two tenths only if it is an odd multiple of 0.25,
/// which is checked directly. All other values go through the standard
/// library's correctly rounded decimal formatting.
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        return (value * 10.0).ceil() / 10.0;
    }

    format!("{:.1}", value).parse().unwrap_or(value)
}

// ====================================================================================================================
