//! The sRGB transfer function (IEC 61966-2-1:1999) applied to 8-bit levels.

/// Encoded value at or below which the curve is linear.
pub const LINEAR_BREAKPOINT: f64 = 0.04045;
/// Divisor of the linear segment.
pub const LINEAR_SLOPE: f64 = 12.92;
/// Offset of the power segment.
pub const POWER_OFFSET: f64 = 0.055;
/// Divisor of the power segment, `1 + POWER_OFFSET`.
pub const POWER_SCALE: f64 = 1.055;
/// Exponent of the power segment.
pub const POWER_EXPONENT: f64 = 2.4;

/// Highest 8-bit level, used to normalize and quantize.
const MAX_LEVEL: f64 = 255.0;

/// Convert an sRGB encoded value in `[0, 1]` to linear.
#[must_use]
pub fn srgb_to_linear(value: f64) -> f64 {
    if value <= LINEAR_BREAKPOINT {
        value / LINEAR_SLOPE
    } else {
        ((value + POWER_OFFSET) / POWER_SCALE).powf(POWER_EXPONENT)
    }
}

/// Apply the sRGB transfer function to an 8-bit `level`.
///
/// The level is normalized to `[0, 1]`, linearized, then scaled back to 8 bits
/// with round-half-to-even.
#[must_use]
pub fn gamma_srgb(level: u8) -> u8 {
    let norm = f64::from(level) / MAX_LEVEL;
    let corrected = srgb_to_linear(norm);
    // corrected is in [0, 1], so the cast never saturates.
    (corrected * MAX_LEVEL).round_ties_even() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_fixed_points() {
        assert_eq!(gamma_srgb(0), 0);
        assert_eq!(gamma_srgb(u8::MAX), u8::MAX);
    }

    #[test]
    fn monotonic_over_all_levels() {
        let mut previous = 0;
        for level in 0..=u8::MAX {
            let value = gamma_srgb(level);
            assert!(value >= previous, "level {level}: {value} < {previous}");
            previous = value;
        }
    }

    #[test]
    fn linear_segment_up_to_level_10() {
        for level in 0..=10 {
            let norm = f64::from(level) / 255.0;
            assert!(norm <= LINEAR_BREAKPOINT);
            let expected = (norm / 12.92 * 255.0).round_ties_even() as u8;
            assert_eq!(gamma_srgb(level), expected);
        }
        assert_eq!(gamma_srgb(6), 0);
        assert_eq!(gamma_srgb(7), 1);
        assert_eq!(gamma_srgb(10), 1);
    }

    #[test]
    fn power_segment_from_level_11() {
        for level in 11..=u8::MAX {
            let norm = f64::from(level) / 255.0;
            assert!(norm > LINEAR_BREAKPOINT);
            let expected = (((norm + 0.055) / 1.055).powf(2.4) * 255.0).round_ties_even() as u8;
            assert_eq!(gamma_srgb(level), expected);
        }
    }

    #[test]
    fn known_values() {
        let cases = [
            (11, 1),
            (17, 1),
            (18, 2),
            (50, 8),
            (64, 13),
            (128, 55),
            (192, 134),
            (254, 253),
        ];
        for (level, expected) in cases {
            assert_eq!(gamma_srgb(level), expected, "level {level}");
        }
    }

    #[test]
    fn segments_meet_at_breakpoint() {
        let below = srgb_to_linear(LINEAR_BREAKPOINT);
        let above = srgb_to_linear(LINEAR_BREAKPOINT + f64::EPSILON);
        assert!((above - below).abs() < 1e-6);
    }
}
