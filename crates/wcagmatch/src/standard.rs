//! WCAG conformance levels and contrast thresholds.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::error::ThresholdError;

/// A WCAG conformance level and the minimum contrast ratio it requires.
///
/// | Standard         | Name             | Ratio |
/// |------------------|------------------|------:|
/// | `Aa`             | `AA`             |   3.0 |
/// | `AaText`         | `AA_text`        |   4.5 |
/// | `AaTextLarge`    | `AA_text_large`  |   3.0 |
/// | `AaaText`        | `AAA_text`       |   7.0 |
/// | `AaaTextLarge`   | `AAA_text_large` |   4.5 |
///
/// `Aa` covers graphical objects and user interface components, which share
/// their threshold with large text.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, ord, module = "wcagmatch")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum WcagStandard {
    #[cfg_attr(feature = "serde", serde(rename = "AA"))]
    Aa,
    #[cfg_attr(feature = "serde", serde(rename = "AA_text"))]
    AaText,
    #[cfg_attr(feature = "serde", serde(rename = "AA_text_large"))]
    AaTextLarge,
    #[cfg_attr(feature = "serde", serde(rename = "AAA_text"))]
    AaaText,
    #[cfg_attr(feature = "serde", serde(rename = "AAA_text_large"))]
    AaaTextLarge,
}

impl WcagStandard {
    /// All standards in canonical order.
    pub const ALL: [WcagStandard; 5] = [
        Self::Aa,
        Self::AaText,
        Self::AaTextLarge,
        Self::AaaText,
        Self::AaaTextLarge,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl WcagStandard {
    /// Parse a standard from its name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<WcagStandard, ThresholdError> {
        s.parse()
    }

    /// Get all standards in canonical order. <i class=python-only>Python
    /// only!</i>
    #[cfg(feature = "pyffi")]
    #[pyo3(name = "all")]
    #[staticmethod]
    pub fn py_all() -> Vec<WcagStandard> {
        Self::ALL.to_vec()
    }

    /// Get the minimum contrast ratio required by this standard.
    pub const fn ratio(&self) -> f64 {
        match *self {
            Self::Aa | Self::AaTextLarge => 3.0,
            Self::AaText | Self::AaaTextLarge => 4.5,
            Self::AaaText => 7.0,
        }
    }

    /// Get this standard's name, e.g., `AA_text`.
    pub const fn name(&self) -> &'static str {
        match *self {
            Self::Aa => "AA",
            Self::AaText => "AA_text",
            Self::AaTextLarge => "AA_text_large",
            Self::AaaText => "AAA_text",
            Self::AaaTextLarge => "AAA_text_large",
        }
    }

    /// Determine whether the given contrast ratio meets this standard.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        self.ratio() <= ratio
    }

    /// Render a debug representation for this standard. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("WcagStandard.{:?}", self)
    }

    /// Render this standard's name. <i class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        self.name().to_owned()
    }
}

impl std::str::FromStr for WcagStandard {
    type Err = ThresholdError;

    /// Parse a standard from its name.
    ///
    /// Names are case-sensitive and must be spelled exactly as returned by
    /// [`WcagStandard::name`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|standard| standard.name() == s)
            .ok_or_else(|| ThresholdError::UnknownStandard(s.to_owned()))
    }
}

impl std::fmt::Display for WcagStandard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

/// A minimum contrast ratio, either from a WCAG standard or custom. <i
/// class=rust-only>Rust only!</i>
///
/// A custom ratio must be finite and positive. [`Threshold::try_from`] and
/// [`Threshold::from_str`](std::str::FromStr) check that; constructing the
/// variant directly leaves it to the caller. The default threshold is
/// [`WcagStandard::AaText`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Threshold {
    Standard(WcagStandard),
    Ratio(f64),
}

impl Threshold {
    /// Get the minimum contrast ratio.
    pub const fn ratio(&self) -> f64 {
        match *self {
            Self::Standard(standard) => standard.ratio(),
            Self::Ratio(ratio) => ratio,
        }
    }

    /// Determine whether the given contrast ratio meets this threshold.
    pub fn is_met_by(&self, ratio: f64) -> bool {
        self.ratio() <= ratio
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self::Standard(WcagStandard::AaText)
    }
}

impl From<WcagStandard> for Threshold {
    fn from(value: WcagStandard) -> Self {
        Self::Standard(value)
    }
}

impl TryFrom<f64> for Threshold {
    type Error = ThresholdError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if value.is_finite() && 0.0 < value {
            Ok(Self::Ratio(value))
        } else {
            Err(ThresholdError::InvalidRatio(value))
        }
    }
}

impl std::str::FromStr for Threshold {
    type Err = ThresholdError;

    /// Parse a threshold from a standard's name or a decimal ratio.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(standard) = s.parse::<WcagStandard>() {
            return Ok(Self::Standard(standard));
        }

        s.parse::<f64>().map_or_else(
            |_| Err(ThresholdError::UnknownStandard(s.to_owned())),
            Self::try_from,
        )
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::Standard(ref standard) => std::fmt::Display::fmt(standard, f),
            Self::Ratio(ratio) => write!(f, "{}", ratio),
        }
    }
}

/// Convert a standard, its name, or a number into a threshold.
#[cfg(feature = "pyffi")]
pub(crate) fn into_threshold(obj: &Bound<'_, PyAny>) -> PyResult<Threshold> {
    if let Ok(standard) = obj.extract::<WcagStandard>() {
        return Ok(Threshold::Standard(standard));
    }

    if let Ok(name) = obj.extract::<String>() {
        return Ok(name.parse::<Threshold>()?);
    }

    let ratio = obj.extract::<f64>()?;
    Ok(Threshold::try_from(ratio)?)
}

// ====================================================================================================================
