//! Searching for colors that meet a contrast threshold.
//!
//! The search keeps a color's hue and saturation while bisecting its
//! lightness. It first checks whether *any* color can meet the threshold
//! against the fixed color. It then inverts the contrast ratio to determine
//! the target luminance and whether it lies above or below the fixed color's
//! luminance. That direction determines the initial interval, which is the
//! lightness that can be removed when darkening or added when lightening. The
//! loop halves the interval, moving lightness towards the target luminance,
//! until the candidate meets the threshold while its rounded neighbor no
//! longer exceeds it. Finally, lightness is rounded away from the fixed color.
#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::color::{HexColor, Hsl};
use crate::core::{to_contrast_ratio, to_desired_luminance, to_max_contrast_ratio};
use crate::standard::Threshold;

#[cfg(feature = "pyffi")]
use crate::standard::into_threshold;

/// Options that bound the lightness search. <i class=rust-only>Rust only!</i>
///
/// The defaults stop once the lightness interval is no wider than 0.01
/// percentage points or after 64 halvings, whichever comes first. Since
/// halving 100 reaches 0.01 after 14 steps, the iteration cap only matters
/// for a smaller epsilon.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SearchOptions {
    epsilon: f64,
    max_iterations: usize,
}

impl SearchOptions {
    /// Get the smallest lightness interval worth halving.
    pub const fn epsilon(&self) -> f64 {
        self.epsilon
    }

    /// Get the maximum number of halvings.
    pub const fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// Update the smallest lightness interval worth halving.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub const fn with_epsilon(self, epsilon: f64) -> Self {
        Self { epsilon, ..self }
    }

    /// Update the maximum number of halvings.
    #[must_use = "method returns updated options and does not mutate original value"]
    pub const fn with_max_iterations(self, max_iterations: usize) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            epsilon: 0.01,
            max_iterations: 64,
        }
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// The direction in which lightness moves relative to the fixed color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Darker,
    Lighter,
}

impl Direction {
    /// Determine the direction from the target and fixed luminances.
    fn of(target: f64, fixed: f64) -> Self {
        if target < fixed {
            Self::Darker
        } else {
            Self::Lighter
        }
    }

    /// Get the initial lightness interval.
    fn span(&self, lightness: f64) -> f64 {
        match *self {
            Self::Darker => lightness,
            Self::Lighter => 100.0 - lightness,
        }
    }

    /// Round lightness towards the fixed color, which yields the neighbor
    /// with less contrast.
    fn probe(&self, lightness: f64) -> f64 {
        match *self {
            Self::Darker => lightness.ceil(),
            Self::Lighter => lightness.floor(),
        }
    }

    /// Round lightness away from the fixed color for the final result.
    fn settle(&self, lightness: f64) -> f64 {
        match *self {
            Self::Darker => lightness.floor(),
            Self::Lighter => lightness.ceil(),
        }
    }

    /// Get the lightness farthest from the fixed color, i.e., black or white.
    fn limit(&self) -> f64 {
        match *self {
            Self::Darker => 0.0,
            Self::Lighter => 100.0,
        }
    }

    /// Get the integral lightness step away from the fixed color.
    fn unit(&self) -> f64 {
        match *self {
            Self::Darker => -1.0,
            Self::Lighter => 1.0,
        }
    }
}

/// The state of one lightness search.
struct SearchState {
    hsl: Hsl,
    span: f64,
    fixed: f64,
    target: f64,
    ratio: f64,
    direction: Direction,
}

impl SearchState {
    /// Compute the relative luminance for the given lightness.
    fn luminance_at(&self, lightness: f64) -> f64 {
        self.hsl.with_lightness(lightness).to_hex().luminance()
    }

    /// Compute the contrast against the fixed color for the given lightness.
    fn contrast_at(&self, lightness: f64) -> f64 {
        to_contrast_ratio(self.luminance_at(lightness), self.fixed)
    }

    /// Determine whether the current lightness needs further refinement.
    ///
    /// That is the case when the current lightness falls short of the ratio
    /// or when its rounded neighbor still exceeds it.
    fn needs_refinement(&self) -> bool {
        let lightness = self.hsl.lightness;
        self.contrast_at(lightness) < self.ratio
            || self.contrast_at(self.direction.probe(lightness)) > self.ratio
    }

    /// Move lightness towards the target luminance and halve the interval.
    fn step(&mut self) {
        let lightness = self.hsl.lightness;
        let luminance = self.luminance_at(lightness);

        let lightness = if luminance < self.target {
            lightness + self.span / 2.0
        } else if luminance > self.target {
            lightness - self.span / 2.0
        } else {
            lightness
        };

        self.hsl = self.hsl.with_lightness(lightness);
        self.span /= 2.0;
    }

    /// Produce the resulting color.
    ///
    /// A search cut short by its options may settle on a lightness that falls
    /// short of the ratio or overshoots it by more than 1. This method then
    /// walks integral lightness steps away from the fixed color until the
    /// ratio is met, and back towards it while the overshoot persists and the
    /// next step still meets the ratio. Since black or white always meets a
    /// feasible ratio in the search direction, the result meets the ratio.
    #[allow(clippy::while_float)]
    fn finish(&self) -> HexColor {
        let unit = self.direction.unit();
        let limit = self.direction.limit();
        let mut lightness = self.direction.settle(self.hsl.lightness).clamp(0.0, 100.0);

        while self.contrast_at(lightness) < self.ratio && lightness != limit {
            lightness += unit;
        }

        while self.ratio + 1.0 <= self.contrast_at(lightness) {
            let closer = lightness - unit;
            if !(0.0..=100.0).contains(&closer) || self.contrast_at(closer) < self.ratio {
                break;
            }
            lightness = closer;
        }

        if lightness != self.direction.settle(self.hsl.lightness) {
            tracing::debug!(
                searched = self.hsl.lightness,
                lightness,
                "corrected lightness of truncated search"
            );
        }

        self.hsl.with_lightness(lightness).to_hex()
    }
}

// ====================================================================================================================

/// Adjust the color's lightness until it meets the threshold against the fixed
/// color.
///
/// This function returns `None` if no color whatsoever, not even black or
/// white, meets the threshold against the fixed color. Otherwise, it returns a
/// color with the same hue and saturation as the given color, whose contrast
/// against the fixed color is at least the threshold's ratio and typically
/// less than one more. A ratio no greater than 1 is met by every color,
/// including the given one, which is returned as is. A ratio that is not a
/// number is met by no color.
///
/// ```
/// # use wcagmatch::{make_contrast, HexColor, WcagStandard, ColorFormatError};
/// let red: HexColor = "#eb4034".parse()?;
/// let white: HexColor = "#ffffff".parse()?;
///
/// let darker = make_contrast(&red, &white, WcagStandard::AaText.into());
/// assert_eq!(darker, Some("#e42416".parse()?));
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn make_contrast(
    color: &HexColor,
    fixed_color: &HexColor,
    threshold: Threshold,
) -> Option<HexColor> {
    make_contrast_with(color, fixed_color, threshold, &SearchOptions::default())
}

/// Adjust the color's lightness until it meets the threshold against the fixed
/// color, using the given search options. <i class=rust-only>Rust only!</i>
///
/// See [`make_contrast`] for details.
#[allow(clippy::while_float)]
pub fn make_contrast_with(
    color: &HexColor,
    fixed_color: &HexColor,
    threshold: Threshold,
    options: &SearchOptions,
) -> Option<HexColor> {
    let ratio = threshold.ratio();
    let fixed = fixed_color.luminance();

    if ratio.is_nan() || to_max_contrast_ratio(fixed) < ratio {
        tracing::debug!(%fixed_color, ratio, "no color meets contrast ratio");
        return None;
    } else if ratio <= 1.0 {
        return Some(*color);
    }

    let target = to_desired_luminance(fixed, ratio);
    let direction = Direction::of(target, fixed);
    let hsl = color.to_hsl();

    let mut state = SearchState {
        hsl,
        span: direction.span(hsl.lightness),
        fixed,
        target,
        ratio,
        direction,
    };

    let mut iterations = 0;
    while options.epsilon < state.span
        && iterations < options.max_iterations
        && state.needs_refinement()
    {
        state.step();
        iterations += 1;
        tracing::trace!(
            iteration = iterations,
            lightness = state.hsl.lightness,
            span = state.span,
            "refined lightness"
        );
    }

    let result = state.finish();
    tracing::debug!(
        %color,
        %fixed_color,
        ratio,
        ?direction,
        iterations,
        %result,
        contrast = result.contrast_with(fixed_color),
        "adjusted lightness"
    );
    Some(result)
}

/// Adjust the color's lightness until it meets the threshold against itself.
///
/// This function is equivalent to [`make_contrast`] with the same color as
/// both arguments.
///
/// ```
/// # use wcagmatch::{get_contrasting_hex, HexColor, Threshold, ColorFormatError};
/// let gray: HexColor = "#808080".parse()?;
/// let text = get_contrasting_hex(&gray, Threshold::default());
/// assert_eq!(text, Some("#171717".parse()?));
/// # Ok::<(), ColorFormatError>(())
/// ```
pub fn get_contrasting_hex(color: &HexColor, threshold: Threshold) -> Option<HexColor> {
    make_contrast(color, color, threshold)
}

/// Adjust the color's lightness until it meets the threshold against the fixed
/// color. <i class=python-only>Python only!</i>
///
/// The threshold may be a [`WcagStandard`](crate::WcagStandard), its name, or
/// a positive number. It defaults to `AA_text`.
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "make_contrast", signature = (color, fixed_color, threshold = None))]
pub fn py_make_contrast(
    color: &HexColor,
    fixed_color: &HexColor,
    threshold: Option<&Bound<'_, PyAny>>,
) -> PyResult<Option<HexColor>> {
    let threshold = threshold.map(into_threshold).transpose()?.unwrap_or_default();
    Ok(make_contrast(color, fixed_color, threshold))
}

/// Adjust the color's lightness until it meets the threshold against itself.
/// <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "get_contrasting_hex", signature = (color, threshold = None))]
pub fn py_get_contrasting_hex(
    color: &HexColor,
    threshold: Option<&Bound<'_, PyAny>>,
) -> PyResult<Option<HexColor>> {
    let threshold = threshold.map(into_threshold).transpose()?.unwrap_or_default();
    Ok(get_contrasting_hex(color, threshold))
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{get_contrasting_hex, make_contrast, make_contrast_with, SearchOptions};
    use crate::color::HexColor;
    use crate::error::ColorFormatError;
    use crate::standard::{Threshold, WcagStandard};

    fn meets(result: HexColor, fixed: HexColor, ratio: f64) -> bool {
        let contrast = result.contrast_with(&fixed);
        ratio <= contrast && contrast < ratio + 1.0
    }

    #[test]
    fn test_gray_text() -> Result<(), ColorFormatError> {
        let gray: HexColor = "#808080".parse()?;

        let result = get_contrasting_hex(&gray, WcagStandard::AaText.into());
        assert_eq!(result, Some("#171717".parse()?));
        assert!(meets("#171717".parse()?, gray, 4.5));

        assert_eq!(get_contrasting_hex(&gray, WcagStandard::AaaText.into()), None);
        Ok(())
    }

    #[test]
    fn test_white() -> Result<(), ColorFormatError> {
        let white: HexColor = "#FFFFFF".parse()?;

        let result = get_contrasting_hex(&white, WcagStandard::AaaText.into());
        assert_eq!(result, Some("#595959".parse()?));
        assert!(meets("#595959".parse()?, white, 7.0));
        Ok(())
    }

    #[test]
    fn test_make_contrast() -> Result<(), ColorFormatError> {
        let red: HexColor = "#eb4034".parse()?;
        let white: HexColor = "#ffffff".parse()?;
        let black: HexColor = "#000000".parse()?;
        let expected: HexColor = "#e42416".parse()?;

        let result = make_contrast(&red, &white, Threshold::Ratio(4.5));
        assert_eq!(result, Some(expected));
        assert_eq!(result.map(|c| c.to_hsl().hue), Some(red.to_hsl().hue));

        assert_eq!(make_contrast(&red, &black, Threshold::Ratio(4.5)), Some(expected));
        Ok(())
    }

    #[test]
    fn test_trivial_ratio() -> Result<(), ColorFormatError> {
        let color: HexColor = "#123456".parse()?;
        assert_eq!(make_contrast(&color, &color, Threshold::Ratio(1.0)), Some(color));
        assert_eq!(make_contrast(&color, &color, Threshold::Ratio(0.5)), Some(color));
        Ok(())
    }

    #[test]
    fn test_infeasible() -> Result<(), ColorFormatError> {
        let gray: HexColor = "#808080".parse()?;
        for color in ["#000000", "#ffffff", "#ff0000"] {
            let color: HexColor = color.parse()?;
            assert_eq!(make_contrast(&color, &gray, Threshold::Ratio(7.0)), None);
        }

        let black: HexColor = "#000000".parse()?;
        assert_eq!(get_contrasting_hex(&black, Threshold::Ratio(21.5)), None);
        Ok(())
    }

    #[test]
    fn test_options() -> Result<(), ColorFormatError> {
        let options = SearchOptions::default();
        assert_eq!(options.epsilon(), 0.01);
        assert_eq!(options.max_iterations(), 64);

        let gray: HexColor = "#808080".parse()?;
        let threshold = Threshold::default();

        let expected: HexColor = "#171717".parse()?;
        for options in [
            options.with_max_iterations(0),
            options.with_max_iterations(2),
            options.with_epsilon(30.0),
            options.with_epsilon(f64::NAN),
            options.with_epsilon(0.0001),
        ] {
            let result = make_contrast_with(&gray, &gray, threshold, &options);
            assert_eq!(result, Some(expected), "{:?}", options);
        }

        let red: HexColor = "#eb4034".parse()?;
        let white: HexColor = "#ffffff".parse()?;
        for options in [
            options.with_max_iterations(0),
            options.with_max_iterations(2),
            options.with_epsilon(30.0),
            options.with_epsilon(f64::NAN),
        ] {
            let result = make_contrast_with(&red, &white, threshold, &options);
            assert!(
                result.is_some_and(|c| meets(c, white, 4.5)),
                "{:?} yields {:?}",
                options,
                result
            );
        }

        // Coarse searches of white and black still meet the ratio.
        let black: HexColor = "#000000".parse()?;
        let unrefined = options.with_max_iterations(0);
        for color in [white, black] {
            let result = make_contrast_with(&color, &color, threshold, &unrefined);
            assert!(result.is_some_and(|c| meets(c, color, 4.5)), "{:?}", result);
        }
        Ok(())
    }

    #[test]
    fn test_not_a_ratio() -> Result<(), ColorFormatError> {
        let gray: HexColor = "#808080".parse()?;
        assert_eq!(make_contrast(&gray, &gray, Threshold::Ratio(f64::NAN)), None);
        assert_eq!(get_contrasting_hex(&gray, Threshold::Ratio(f64::INFINITY)), None);
        Ok(())
    }

    #[test]
    fn test_standards_on_samples() {
        for standard in WcagStandard::ALL {
            let ratio = standard.ratio();

            for value in (0..256).step_by(32) {
                let fixed = HexColor::from_channels(value, 255 - value, value / 2);
                let color = HexColor::from_channels(255 - value, value / 2, value);

                match make_contrast(&color, &fixed, standard.into()) {
                    Some(result) => assert!(
                        meets(result, fixed, ratio),
                        "{} against {} has contrast {} for {}",
                        result,
                        fixed,
                        result.contrast_with(&fixed),
                        standard
                    ),
                    None => assert!(fixed.max_contrast() < ratio),
                }
            }
        }
    }
}
