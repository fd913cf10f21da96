//! 24-bit hexadecimal colors and their HSL coordinates.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{
    clamp_channel, format_hashed, hsl_to_rgb, parse_hashed, rgb_to_hsl, to_contrast_ratio,
    to_max_contrast_ratio, to_relative_luminance,
};
use crate::error::ColorFormatError;

/// A 24-bit sRGB color.
///
/// The textual form is the hashed hexadecimal notation with six digits,
/// e.g., `#c0ffee`. Parsing accepts either case; displaying produces
/// lowercase digits, unless formatted with `{:X}`.
///
/// ```
/// # use wcagmatch::{HexColor, ColorFormatError};
/// let teal: HexColor = "#008080".parse()?;
/// assert_eq!(teal.coordinates(), [0, 0x80, 0x80]);
/// assert_eq!(format!("{}", teal), "#008080");
/// assert_eq!(format!("{:X}", HexColor::new(0xab, 0xcd, 0xef)), "#ABCDEF");
/// # Ok::<(), ColorFormatError>(())
/// ```
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, ord, module = "wcagmatch")
)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexColor([u8; 3]);

#[cfg_attr(feature = "pyffi", pymethods)]
impl HexColor {
    /// Create a new color from its coordinates.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Create a new color from its coordinates.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// Parse a color from its string representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<HexColor, ColorFormatError> {
        s.parse()
    }

    /// Create a new color from integer channels, clamping them to `0..=255`.
    /// <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    #[pyo3(name = "from_channels")]
    pub fn py_from_channels(r: i32, g: i32, b: i32) -> Self {
        Self::from_channels(r, g, b)
    }

    /// Access this color's coordinates.
    pub const fn coordinates(&self) -> [u8; 3] {
        self.0
    }

    /// Convert this color to HSL.
    pub fn to_hsl(&self) -> Hsl {
        let [hue, saturation, lightness] = rgb_to_hsl(&self.0);
        Hsl {
            hue,
            saturation,
            lightness,
        }
    }

    /// Compute this color's WCAG relative luminance.
    pub fn luminance(&self) -> f64 {
        to_relative_luminance(&self.0)
    }

    /// Compute the WCAG contrast ratio between this and the other color.
    pub fn contrast_with(&self, other: &HexColor) -> f64 {
        to_contrast_ratio(self.luminance(), other.luminance())
    }

    /// Compute the greatest contrast ratio any color can have against this
    /// color, i.e., the contrast against either black or white.
    pub fn max_contrast(&self) -> f64 {
        to_max_contrast_ratio(self.luminance())
    }

    /// Get this color's length, which is 3. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __len__(&self) -> usize {
        3
    }

    /// Get the coordinate at the given index. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __getitem__(&self, index: isize) -> PyResult<u8> {
        match index {
            -3..=-1 => Ok(self.0[(3 + index) as usize]),
            0..=2 => Ok(self.0[index as usize]),
            _ => Err(pyo3::exceptions::PyIndexError::new_err(
                "Invalid coordinate index",
            )),
        }
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("HexColor({}, {}, {})", self.0[0], self.0[1], self.0[2])
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl HexColor {
    /// Create a new color from integer channels.
    ///
    /// Channels below 0 become 0 and channels above 255 become 255.
    pub fn from_channels(r: i32, g: i32, b: i32) -> Self {
        Self([clamp_channel(r), clamp_channel(g), clamp_channel(b)])
    }
}

impl AsRef<[u8; 3]> for HexColor {
    fn as_ref(&self) -> &[u8; 3] {
        &self.0
    }
}

impl From<[u8; 3]> for HexColor {
    fn from(value: [u8; 3]) -> Self {
        Self(value)
    }
}

impl From<HexColor> for [u8; 3] {
    fn from(value: HexColor) -> Self {
        value.0
    }
}

impl std::str::FromStr for HexColor {
    type Err = ColorFormatError;

    /// Parse a color in hashed hexadecimal notation with six digits.
    ///
    /// Leading and trailing white space is ignored, and so is the case of
    /// hexadecimal digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hashed(s).map(Self)
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(&self.0, false, f)
    }
}

impl std::fmt::UpperHex for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        format_hashed(&self.0, true, f)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HexColor {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HexColor {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ====================================================================================================================

/// A color's hue, saturation, and lightness.
///
/// Hue is in degrees `0..360`, saturation and lightness are percentages
/// `0..=100`. Triples produced by [`HexColor::to_hsl`] have integral hue and
/// one digit after the decimal for saturation and lightness. Hue outside
/// `0..360` is not normalized; converting such a triple back to RGB drops all
/// chroma.
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, module = "wcagmatch"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hsl {
    /// Create a new HSL triple.
    #[cfg(feature = "pyffi")]
    #[new]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Create a new HSL triple.
    #[cfg(not(feature = "pyffi"))]
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }

    /// Get the hue. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[getter]
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Get the saturation. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[getter]
    pub fn saturation(&self) -> f64 {
        self.saturation
    }

    /// Get the lightness. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[getter]
    pub fn lightness(&self) -> f64 {
        self.lightness
    }

    /// Replace the lightness, keeping hue and saturation.
    #[must_use = "method returns a new triple and does not mutate original value"]
    pub const fn with_lightness(&self, lightness: f64) -> Self {
        Self {
            hue: self.hue,
            saturation: self.saturation,
            lightness,
        }
    }

    /// Convert this triple to a 24-bit color, rounding each channel to the
    /// nearest integer.
    pub fn to_hex(&self) -> HexColor {
        HexColor(hsl_to_rgb(&[self.hue, self.saturation, self.lightness]))
    }

    /// Convert this triple to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Hsl({}, {}, {})", self.hue, self.saturation, self.lightness)
    }
}

// ====================================================================================================================

/// Combine the integer channels into a color, clamping each to `0..=255`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn channels_to_hex(r: i32, g: i32, b: i32) -> HexColor {
    HexColor::from_channels(r, g, b)
}

/// Split the color into its channels.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_channels(color: &HexColor) -> [u8; 3] {
    color.coordinates()
}

/// Convert the color to HSL.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hex_to_hsl(color: &HexColor) -> Hsl {
    color.to_hsl()
}

/// Convert the HSL triple to a color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hsl_to_hex(hsl: &Hsl) -> HexColor {
    hsl.to_hex()
}

// ====================================================================================================================
