//! WCAG relative luminance and contrast ratios.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::HexColor;
use crate::core::{
    linearize, to_contrast_ratio, to_desired_luminance, to_max_contrast_ratio,
    to_relative_luminance,
};

/// Convert an 8-bit sRGB channel to linear light.
///
/// ```
/// # use wcagmatch::linearize_channel;
/// assert_eq!(linearize_channel(0), 0.0);
/// assert_eq!(linearize_channel(255), 1.0);
/// assert_eq!(linearize_channel(10), 10.0 / 255.0 / 12.92);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn linearize_channel(channel: u8) -> f64 {
    linearize(channel)
}

/// Compute the color's WCAG relative luminance in `0..=1`.
///
/// ```
/// # use wcagmatch::{relative_luminance, HexColor};
/// assert_eq!(relative_luminance(&HexColor::new(0, 0, 0)), 0.0);
/// assert_eq!(relative_luminance(&HexColor::new(0, 0xff, 0)), 0.7152);
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn relative_luminance(color: &HexColor) -> f64 {
    to_relative_luminance(color.as_ref())
}

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// The ratio is symmetric and ranges from 1, for equal luminances, to 21,
/// for black and white.
///
/// ```
/// # use wcagmatch::{contrast_ratio, assert_close_enough};
/// assert_eq!(contrast_ratio(0.5, 0.5), 1.0);
/// assert_close_enough!(contrast_ratio(1.0, 0.0), 21.0);
/// assert_eq!(contrast_ratio(0.2, 0.7), contrast_ratio(0.7, 0.2));
/// ```
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn contrast_ratio(luminance1: f64, luminance2: f64) -> f64 {
    to_contrast_ratio(luminance1, luminance2)
}

/// Compute the luminance that has the given contrast ratio with the given
/// luminance.
///
/// The lighter solution wins unless it exceeds 1, in which case this function
/// returns the darker solution. The darker solution may be negative, which
/// means that no color meets the ratio.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn desired_luminance(luminance: f64, ratio: f64) -> f64 {
    to_desired_luminance(luminance, ratio)
}

/// Compute the greatest contrast ratio any color can have with a color of the
/// given luminance.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn max_contrast(luminance: f64) -> f64 {
    to_max_contrast_ratio(luminance)
}

// ====================================================================================================================
