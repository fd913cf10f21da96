use super::math::{round_half_up, round_to_tenth};

/// Convert the given 24-bit RGB coordinates to floating point coordinates.
#[inline]
pub(crate) fn from_24bit(r: u8, g: u8, b: u8) -> [f64; 3] {
    [r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0]
}

/// Clamp an integer channel value to `0x00..=0xff`.
#[inline]
pub(crate) fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

/// Convert a floating point channel in unit range to a byte.
///
/// Ties round up. Out-of-range values are clamped.
#[inline]
fn to_channel(value: f64) -> u8 {
    round_half_up(value * 255.0).clamp(0.0, 255.0) as u8
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert 24-bit RGB coordinates to HSL.
///
/// The hue is rounded to integral degrees `0..360`, saturation and lightness
/// to one digit after the decimal in `0..=100`. Achromatic colors have zero
/// hue and saturation.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn rgb_to_hsl(coordinates: &[u8; 3]) -> [f64; 3] {
    let [r, g, b] = from_24bit(coordinates[0], coordinates[1], coordinates[2]);

    let min = r.min(g).min(b);
    let max = r.max(g).max(b);
    let delta = max - min;

    let hue = if delta == 0.0 {
        0.0
    } else if max == r {
        ((g - b) / delta) % 6.0
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    let mut hue = round_half_up(hue * 60.0);
    if hue < 0.0 {
        hue += 360.0;
    }

    let lightness = (max + min) / 2.0;
    let saturation = if delta == 0.0 {
        0.0
    } else {
        delta / (1.0 - (2.0 * lightness - 1.0).abs())
    };

    [
        hue,
        round_to_tenth(saturation * 100.0),
        round_to_tenth(lightness * 100.0),
    ]
}

/// Convert HSL coordinates to 24-bit RGB.
///
/// The hue must be normalized to `0..360`. Any other hue drops the chroma
/// contribution to all three channels, leaving only the lightness offset.
#[allow(clippy::suboptimal_flops)]
pub(crate) fn hsl_to_rgb(coordinates: &[f64; 3]) -> [u8; 3] {
    let [h, s, l] = *coordinates;
    let s = s / 100.0;
    let l = l / 100.0;

    let chroma = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let x = chroma * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
    let m = l - chroma / 2.0;

    let (r, g, b) = match h {
        h if (0.0..60.0).contains(&h) => (chroma, x, 0.0),
        h if (60.0..120.0).contains(&h) => (x, chroma, 0.0),
        h if (120.0..180.0).contains(&h) => (0.0, chroma, x),
        h if (180.0..240.0).contains(&h) => (0.0, x, chroma),
        h if (240.0..300.0).contains(&h) => (x, 0.0, chroma),
        h if (300.0..360.0).contains(&h) => (chroma, 0.0, x),
        _ => (0.0, 0.0, 0.0),
    };

    [to_channel(r + m), to_channel(g + m), to_channel(b + m)]
}

// ====================================================================================================================

#[cfg(test)]
mod test {
    use super::{clamp_channel, hsl_to_rgb, rgb_to_hsl};

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-12), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(1_000), 255);
    }

    #[test]
    fn test_rgb_to_hsl() {
        assert_eq!(rgb_to_hsl(&[0xeb, 0x40, 0x34]), [4.0, 82.1, 56.3]);
        assert_eq!(rgb_to_hsl(&[0x2f, 0xeb, 0x67]), [138.0, 82.5, 55.3]);
        assert_eq!(rgb_to_hsl(&[0x43, 0x66, 0x4e]), [139.0, 20.7, 33.1]);
        assert_eq!(rgb_to_hsl(&[0x7a, 0x25, 0xa8]), [279.0, 63.9, 40.2]);
        assert_eq!(rgb_to_hsl(&[0x6b, 0x0b, 0x63]), [305.0, 81.4, 23.1]);
        assert_eq!(rgb_to_hsl(&[0x12, 0x34, 0x56]), [210.0, 65.4, 20.4]);

        assert_eq!(rgb_to_hsl(&[0xff, 0, 0]), [0.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(&[0, 0xff, 0]), [120.0, 100.0, 50.0]);
        assert_eq!(rgb_to_hsl(&[0, 0, 0xff]), [240.0, 100.0, 50.0]);

        // Achromatic
        assert_eq!(rgb_to_hsl(&[0, 0, 0]), [0.0, 0.0, 0.0]);
        assert_eq!(rgb_to_hsl(&[0x80, 0x80, 0x80]), [0.0, 0.0, 50.2]);
        assert_eq!(rgb_to_hsl(&[0xff, 0xff, 0xff]), [0.0, 0.0, 100.0]);
    }

    #[test]
    fn test_hsl_to_rgb() {
        assert_eq!(hsl_to_rgb(&[0.0, 100.0, 50.0]), [0xff, 0, 0]);
        assert_eq!(hsl_to_rgb(&[120.0, 100.0, 50.0]), [0, 0xff, 0]);
        assert_eq!(hsl_to_rgb(&[240.0, 100.0, 50.0]), [0, 0, 0xff]);
        assert_eq!(hsl_to_rgb(&[60.0, 100.0, 50.0]), [0xff, 0xff, 0]);
        assert_eq!(hsl_to_rgb(&[300.0, 100.0, 50.0]), [0xff, 0, 0xff]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 0.0]), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 100.0]), [0xff, 0xff, 0xff]);
        assert_eq!(hsl_to_rgb(&[0.0, 0.0, 50.2]), [0x80, 0x80, 0x80]);
        assert_eq!(hsl_to_rgb(&[210.0, 65.4, 20.4]), [0x12, 0x34, 0x56]);
        assert_eq!(hsl_to_rgb(&[4.0, 82.1, 56.3]), [0xeb, 0x40, 0x34]);

        // Out-of-range hue drops the chroma contribution.
        assert_eq!(hsl_to_rgb(&[360.0, 100.0, 50.0]), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(&[-10.0, 100.0, 50.0]), [0, 0, 0]);
        assert_eq!(hsl_to_rgb(&[360.0, 50.0, 50.0]), [0x40, 0x40, 0x40]);
    }

    #[test]
    fn test_gray_round_trip() {
        for value in 0..=255_u8 {
            let gray = [value, value, value];
            assert_eq!(hsl_to_rgb(&rgb_to_hsl(&gray)), gray);
        }
    }
}
