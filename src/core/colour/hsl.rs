//! HSL to RGB conversion.
//!
//! All inputs are fractions in `[0, 1]`; hue wraps once in either direction.

use crate::core::data::colour::Colour;

/// Evaluates one RGB component for hue offset `t`.
#[must_use]
pub fn hue_to_rgb(p: f64, q: f64, t: f64) -> f64 {
    let mut t = t;

    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

#[must_use]
pub fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Colour {
    let (r, g, b) = if saturation == 0.0 {
        (lightness, lightness, lightness)
    } else {
        let q = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let p = 2.0 * lightness - q;

        (
            hue_to_rgb(p, q, hue + 1.0 / 3.0),
            hue_to_rgb(p, q, hue),
            hue_to_rgb(p, q, hue - 1.0 / 3.0),
        )
    };

    Colour {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

fn to_channel(component: f64) -> u8 {
    // NaN saturates to 0 in the cast
    (component * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hue_to_rgb_segments() {
        let (p, q) = (0.2, 0.8);

        assert!((hue_to_rgb(p, q, 0.0) - 0.2).abs() < 1e-12);
        assert!((hue_to_rgb(p, q, 1.0 / 12.0) - 0.5).abs() < 1e-12);
        assert_eq!(hue_to_rgb(p, q, 0.25), q);
        assert!((hue_to_rgb(p, q, 7.0 / 12.0) - 0.5).abs() < 1e-12);
        assert_eq!(hue_to_rgb(p, q, 0.9), p);
    }

    #[test]
    fn test_hue_to_rgb_wraps_out_of_range_offsets() {
        let (p, q) = (0.2, 0.8);

        assert_eq!(hue_to_rgb(p, q, -0.75), hue_to_rgb(p, q, 0.25));
        assert_eq!(hue_to_rgb(p, q, 1.25), hue_to_rgb(p, q, 0.25));
    }

    #[test]
    fn test_zero_saturation_is_achromatic() {
        for hue in [0.0, 0.2, 0.5, 0.99] {
            assert_eq!(hsl_to_rgb(hue, 0.0, 0.5), Colour::grey(128));
            assert_eq!(hsl_to_rgb(hue, 0.0, 0.0), Colour::grey(0));
            assert_eq!(hsl_to_rgb(hue, 0.0, 1.0), Colour::grey(255));
            assert_eq!(hsl_to_rgb(hue, 0.0, 0.3), Colour::grey(77));
        }
    }

    #[test]
    fn test_primary_hues_are_distinct() {
        let red = hsl_to_rgb(0.0, 0.6, 0.5);
        let green = hsl_to_rgb(1.0 / 3.0, 0.6, 0.5);
        let blue = hsl_to_rgb(2.0 / 3.0, 0.6, 0.5);

        assert_ne!(red, green);
        assert_ne!(green, blue);
        assert_ne!(red, blue);
    }

    #[test]
    fn test_known_conversions() {
        // q = 0.8, p = 0.2
        assert_eq!(hsl_to_rgb(0.0, 0.6, 0.5), Colour { r: 204, g: 51, b: 51 });
        assert_eq!(hsl_to_rgb(0.5, 0.6, 0.5), Colour { r: 51, g: 204, b: 204 });
        assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), Colour { r: 255, g: 0, b: 0 });
    }

    #[test]
    fn test_light_branch_uses_l_plus_s() {
        // l >= 0.5: q = 0.75 + 0.5 - 0.375 = 0.875, p = 0.625
        assert_eq!(hsl_to_rgb(0.0, 0.5, 0.75), Colour { r: 223, g: 159, b: 159 });
    }

    #[test]
    fn test_non_finite_hue_does_not_panic() {
        let colour = hsl_to_rgb(f64::NAN, 0.6, 0.5);

        assert_eq!(colour, Colour { r: 51, g: 51, b: 51 });
    }
}
