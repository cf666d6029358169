/// RGB to spherical harmonic DC conversion
use crate::constants::{COLOUR_HIGH, COLOUR_LOW};
use constants::spherical_harmonics::SH_C0;

/// Encode one normalised channel as its DC coefficient.
/// Evaluated in f64 and narrowed once so renderers decoding with the same constant
/// recover the input.
pub fn channel_to_sh(channel: f64) -> f32 {
    ((channel - 0.5) / SH_C0) as f32
}

pub fn rgb_to_sh(rgb: [f64; 3]) -> [f32; 3] {
    [
        channel_to_sh(rgb[0]),
        channel_to_sh(rgb[1]),
        channel_to_sh(rgb[2]),
    ]
}

/// Base colour of a frame: channel `frame % 3` (R, G, B) high, the others low.
pub fn frame_base_colour(frame: usize) -> [f64; 3] {
    let high = frame % 3;
    let mut rgb = [COLOUR_LOW; 3];
    rgb[high] = COLOUR_HIGH;
    rgb
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh_to_channel(dc: f32) -> f64 {
        dc as f64 * SH_C0 + 0.5
    }

    #[test]
    fn palette_values_survive_round_trip() {
        for c in [COLOUR_LOW, COLOUR_HIGH] {
            let decoded = sh_to_channel(channel_to_sh(c));
            assert!(
                (decoded - c).abs() < f32::EPSILON as f64,
                "{c} decoded as {decoded}"
            );
        }
    }

    #[test]
    fn mid_grey_encodes_to_zero() {
        assert_eq!(channel_to_sh(0.5), 0.0);
    }

    #[test]
    fn known_coefficients() {
        let [r, g, b] = rgb_to_sh([1.0, 0.1, 0.0]);
        assert!((r - 1.7724539).abs() < 1e-6);
        assert!((g + 1.4179631).abs() < 1e-6);
        assert!((b + 1.7724539).abs() < 1e-6);
    }

    #[test]
    fn base_colour_cycles_through_channels() {
        assert_eq!(frame_base_colour(0), [1.0, 0.1, 0.1]);
        assert_eq!(frame_base_colour(1), [0.1, 1.0, 0.1]);
        assert_eq!(frame_base_colour(2), [0.1, 0.1, 1.0]);
        assert_eq!(frame_base_colour(3), frame_base_colour(0));
        assert_eq!(frame_base_colour(7), frame_base_colour(1));
    }
}
