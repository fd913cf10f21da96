//! Utility module with wcagmatch's errors.
//!
//! Failing to meet a contrast threshold is *not* an error. It is an expected
//! outcome that [`make_contrast`](crate::make_contrast) reports as `None`. The
//! errors in this module only cover malformed input at the API boundary.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An erroneous color format.
///
/// The only recognized format is the hashed hexadecimal notation with six
/// digits, e.g., `#c0ffee`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with `#`.
    UnknownFormat,

    /// A color format with an unexpected number of characters or characters
    /// that are not ASCII. For example, `#00` is missing four hexadecimal
    /// digits, whereas `#💩00` may have the right number of bytes but
    /// contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format with a malformed hexadecimal coordinate. For example,
    /// `#00ffgg` has a malformed third coordinate.
    MalformedHex,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match *self {
            UnknownFormat => f.write_str("color format should start with `#`"),
            UnexpectedCharacters => {
                f.write_str("color format should have exactly 6 hexadecimal digits after `#`")
            }
            MalformedHex => {
                f.write_str("color format coordinates should be hexadecimal integers but are not")
            }
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous contrast threshold.
#[derive(Clone, Debug, PartialEq)]
pub enum ThresholdError {
    /// A name that does not match any WCAG standard.
    UnknownStandard(String),

    /// A custom contrast ratio that is not a finite, positive number.
    InvalidRatio(f64),
}

impl std::fmt::Display for ThresholdError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::UnknownStandard(ref name) => write!(
                f,
                "\"{}\" should be one of AA, AA_text, AA_text_large, AAA_text, AAA_text_large",
                name
            ),
            Self::InvalidRatio(ratio) => {
                write!(f, "contrast ratio {} should be finite and positive", ratio)
            }
        }
    }
}

impl std::error::Error for ThresholdError {}

#[cfg(feature = "pyffi")]
impl From<ThresholdError> for PyErr {
    fn from(value: ThresholdError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
