/// The Rec. 709 weights of the red, green, and blue channels in WCAG relative
/// luminance.
pub const CHANNEL_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// Convert an 8-bit sRGB channel to linear light using sRGB's gamma.
///
/// The result has unit range and is strictly increasing in the channel value.
#[inline]
pub(crate) fn linearize(channel: u8) -> f64 {
    let value = channel as f64 / 255.0;
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Compute the WCAG relative luminance of the 24-bit sRGB coordinates.
///
/// The weighted channels are summed from red to blue without fused
/// multiply-add, so that saturated primaries and their mixtures reproduce
/// the sums of [`CHANNEL_WEIGHTS`] exactly.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn to_relative_luminance(coordinates: &[u8; 3]) -> f64 {
    let [wr, wg, wb] = CHANNEL_WEIGHTS;
    let [r, g, b] = *coordinates;

    wr * linearize(r) + wg * linearize(g) + wb * linearize(b)
}

#[cfg(test)]
mod test {
    use super::{linearize, to_relative_luminance, CHANNEL_WEIGHTS};

    #[test]
    fn test_linearize() {
        assert_eq!(linearize(0), 0.0);
        assert_eq!(linearize(255), 1.0);

        let mut previous = -1.0;
        for channel in 0..=255_u8 {
            let value = linearize(channel);
            assert!((0.0..=1.0).contains(&value), "{} out of range", value);
            assert!(previous < value, "{} not increasing", channel);
            previous = value;
        }
    }

    #[test]
    fn test_relative_luminance() {
        let [r, g, b] = CHANNEL_WEIGHTS;

        assert_eq!(to_relative_luminance(&[0, 0, 0]), 0.0);
        assert_eq!(to_relative_luminance(&[255, 0, 0]), r);
        assert_eq!(to_relative_luminance(&[0, 255, 0]), g);
        assert_eq!(to_relative_luminance(&[0, 0, 255]), b);
        assert_eq!(to_relative_luminance(&[255, 255, 0]), r + g);
        assert_eq!(to_relative_luminance(&[255, 0, 255]), r + b);
        assert_eq!(to_relative_luminance(&[0, 255, 255]), g + b);
        assert_eq!(to_relative_luminance(&[255, 255, 255]), r + g + b);
    }
}
