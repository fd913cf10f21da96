//! # wcagmatch
//!
//! Wcagmatch finds colors that are legible against other colors.
#![cfg_attr(
    not(feature = "pyffi"),
    doc = " This version of the API documentation **covers native Rust interfaces
only**. With the `pyffi` feature enabled, it also covers Python integration. "
)]
#![cfg_attr(
    feature = "pyffi",
    doc = " This version of the API documentation **covers both Rust and Python
interfaces**. With the `pyffi` feature disabled, it only covers native Rust
interfaces. "
)]
//!
//!
//! ## 1. Overview
//!
//! The [Web Content Accessibility Guidelines](https://www.w3.org/TR/WCAG21/)
//! measure the legibility of one color against another as the ratio of their
//! relative luminances, offset by a small constant for ambient light. Ratios
//! range from 1:1 for identical colors to 21:1 for black and white. Wcagmatch's
//! main abstractions are:
//!
//!   * [`HexColor`] implements **24-bit colors** in hashed hexadecimal
//!     notation, e.g., `#c0ffee`, with conversion to and from [`Hsl`].
//!   * [`relative_luminance`], [`contrast_ratio`], [`desired_luminance`], and
//!     [`max_contrast`] implement WCAG's **luminance and contrast formulae**.
//!   * [`WcagStandard`] and [`Threshold`] capture **minimum contrast ratios**,
//!     either as one of WCAG's five named standards or as a custom ratio.
//!   * [`make_contrast`] and [`get_contrasting_hex`] **search for colors**
//!     meeting a threshold by adjusting a color's lightness while keeping its
//!     hue and saturation.
//!
//!
//! ## 2. Making Contrast
//!
//! Given some foreground color and a fixed background color, [`make_contrast`]
//! darkens or lightens the foreground until it meets the threshold:
//!
//! ```
//! # use wcagmatch::{make_contrast, HexColor, WcagStandard, ColorFormatError};
//! let foreground: HexColor = "#eb4034".parse()?;
//! let background: HexColor = "#ffffff".parse()?;
//!
//! let legible = make_contrast(&foreground, &background, WcagStandard::AaText.into());
//! assert!(legible.is_some_and(|c| c.contrast_with(&background) >= 4.5));
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! A result of `None` means that no color meets the threshold against the
//! fixed color, not even black or white. For example, mid-gray has at most
//! 5.3:1 contrast, which falls short of AAA text:
//!
//! ```
//! # use wcagmatch::{get_contrasting_hex, HexColor, Threshold, WcagStandard, ColorFormatError};
//! let gray: HexColor = "#808080".parse()?;
//! assert!(get_contrasting_hex(&gray, Threshold::default()).is_some());
//! assert_eq!(get_contrasting_hex(&gray, WcagStandard::AaaText.into()), None);
//! # Ok::<(), ColorFormatError>(())
//! ```
//!
//! The search reports its outcome with [`tracing`](https://docs.rs/tracing)
//! events at the debug level and each refinement at the trace level. Without
//! a subscriber, these events are free.
//!
//!
//! ## 3. Optional Features
//!
//! Wcagmatch supports two feature flags:
//!
//!   - **`pyffi`** controls wcagmatch's Python integration through
//!     [PyO3](https://pyo3.rs/). This feature is disabled by default.
//!   - **`serde`** controls serialization of [`HexColor`] as its hashed
//!     hexadecimal string and of [`WcagStandard`] as its name. This feature is
//!     disabled by default.
//!
//! Throughout the API documentation, items that are only available in Rust are
//! decorated with <i class=rust-only>Rust only!</i>.
#![cfg_attr(
    feature = "pyffi",
    doc = "Items that are only available in Python are decorated with <i
    class=python-only>Python only!</i>."
)]

mod color;
mod contrast;
mod core;
pub mod error;
mod search;
mod standard;

pub use color::{channels_to_hex, hex_channels, hex_to_hsl, hsl_to_hex, HexColor, Hsl};
pub use contrast::{
    contrast_ratio, desired_luminance, linearize_channel, max_contrast, relative_luminance,
};
#[doc(hidden)]
pub use core::to_eq_bits;
pub use core::CHANNEL_WEIGHTS;
pub use error::{ColorFormatError, ThresholdError};
pub use search::{get_contrasting_hex, make_contrast, make_contrast_with, SearchOptions};
pub use standard::{Threshold, WcagStandard};

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

/// Initialize the Python extension module.
#[doc(hidden)]
#[cfg(feature = "pyffi")]
#[pymodule]
pub fn wcagmatch(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("CHANNEL_WEIGHTS", CHANNEL_WEIGHTS)?;

    m.add_class::<HexColor>()?;
    m.add_class::<Hsl>()?;
    m.add_class::<WcagStandard>()?;

    m.add_function(wrap_pyfunction!(channels_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(contrast_ratio, m)?)?;
    m.add_function(wrap_pyfunction!(desired_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(hex_channels, m)?)?;
    m.add_function(wrap_pyfunction!(hex_to_hsl, m)?)?;
    m.add_function(wrap_pyfunction!(hsl_to_hex, m)?)?;
    m.add_function(wrap_pyfunction!(linearize_channel, m)?)?;
    m.add_function(wrap_pyfunction!(max_contrast, m)?)?;
    m.add_function(wrap_pyfunction!(relative_luminance, m)?)?;
    m.add_function(wrap_pyfunction!(search::py_get_contrasting_hex, m)?)?;
    m.add_function(wrap_pyfunction!(search::py_make_contrast, m)?)?;

    Ok(())
}
