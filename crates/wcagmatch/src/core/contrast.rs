/// The luminance of ambient light reflected off a black surface, which WCAG
/// adds to both luminances before dividing them.
pub(crate) const REFLECTIVITY: f64 = 0.05;

/// Compute the WCAG contrast ratio between two relative luminances.
///
/// The ratio divides the lighter by the darker luminance, after adding
/// [`REFLECTIVITY`] to both. It is symmetric, at least 1, and exactly 1 for
/// equal luminances.
#[inline]
pub(crate) fn to_contrast_ratio(luminance1: f64, luminance2: f64) -> f64 {
    if luminance1 > luminance2 {
        (luminance1 + REFLECTIVITY) / (luminance2 + REFLECTIVITY)
    } else {
        (luminance2 + REFLECTIVITY) / (luminance1 + REFLECTIVITY)
    }
}

/// Compute the greatest contrast ratio any color can have against a color
/// with the given luminance, i.e., the contrast against black or white.
#[inline]
pub(crate) fn to_max_contrast_ratio(luminance: f64) -> f64 {
    to_contrast_ratio(luminance, 0.0).max(to_contrast_ratio(luminance, 1.0))
}

/// Invert the contrast ratio for the given luminance.
///
/// This function returns the luminance that has exactly the given contrast
/// ratio with the given luminance. It prefers the lighter solution but falls
/// back on the darker one if the lighter luminance would exceed 1. If neither
/// direction can reach the ratio, the result lies below 0.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn to_desired_luminance(luminance: f64, ratio: f64) -> f64 {
    let lighter = (luminance + REFLECTIVITY) * ratio - REFLECTIVITY;
    if lighter > 1.0 {
        (luminance + REFLECTIVITY) / ratio - REFLECTIVITY
    } else {
        lighter
    }
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{to_contrast_ratio, to_desired_luminance, to_max_contrast_ratio};
    use crate::assert_close_enough;
    use crate::core::to_relative_luminance;

    fn floor2(value: f64) -> f64 {
        (100.0 * value).floor() / 100.0
    }

    #[test]
    fn test_contrast_ratio() {
        // Values as reported by WebAIM's contrast checker.
        let pairs: [([u8; 3], [u8; 3], f64); 7] = [
            ([0xeb, 0x40, 0x34], [0x2f, 0xeb, 0x6a], 2.48),
            ([0x2f, 0xeb, 0x6a], [0x43, 0x66, 0x4e], 4.06),
            ([0x43, 0x66, 0x4e], [0xe7, 0xed, 0xa4], 5.24),
            ([0xe7, 0xed, 0xa4], [0x4d, 0x4d, 0x4d], 6.86),
            ([0x4d, 0x4d, 0x4d], [0x6b, 0x0b, 0x63], 1.34),
            ([0x6b, 0x0b, 0x63], [0x7a, 0x25, 0xa8], 1.43),
            ([0x7a, 0x25, 0xa8], [0xeb, 0x40, 0x34], 2.00),
        ];

        for (c1, c2, expected) in pairs {
            let l1 = to_relative_luminance(&c1);
            let l2 = to_relative_luminance(&c2);
            assert_eq!(floor2(to_contrast_ratio(l1, l2)), expected);
            assert_eq!(to_contrast_ratio(l1, l2), to_contrast_ratio(l2, l1));
        }

        assert_eq!(to_contrast_ratio(0.3, 0.3), 1.0);
        assert_close_enough!(to_contrast_ratio(0.0, 1.0), 21.0);
    }

    #[test]
    fn test_max_contrast_ratio() {
        assert_close_enough!(to_max_contrast_ratio(0.0), 21.0);
        assert_close_enough!(to_max_contrast_ratio(1.0), 21.0);

        // Mid-gray barely clears AA text in either direction.
        let gray = to_relative_luminance(&[0x76, 0x76, 0x76]);
        assert!(to_max_contrast_ratio(gray) > 4.6);
        assert!(to_max_contrast_ratio(gray) < 4.7);
        assert!(to_contrast_ratio(gray, 1.0) > 4.5);
    }

    #[test]
    fn test_desired_luminance() {
        // Lighter when possible
        assert_close_enough!(to_desired_luminance(0.0, 4.5), 0.175);
        // Darker otherwise
        assert_close_enough!(to_desired_luminance(1.0, 7.0), 0.1);
        // Neither works for mid-gray and 21:1
        assert!(to_desired_luminance(0.2, 21.0) < 0.0);

        for ratio in [3.0, 4.5, 7.0] {
            for i in (1..1000).step_by(10) {
                let luminance = 1.0 / i as f64;
                let desired = to_desired_luminance(luminance, ratio);
                let actual = to_contrast_ratio(luminance, desired);
                assert!(
                    ratio - 1e-12 <= actual && actual < ratio + 1.0,
                    "{} should be in [{}, {})",
                    actual,
                    ratio,
                    ratio + 1.0
                );
            }
        }
    }
}
