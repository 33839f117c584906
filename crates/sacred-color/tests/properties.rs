// SPDX-License-Identifier: MIT

//! Property tests for the colour engine.

use proptest::prelude::*;
use sacred_color::space::normalize_hue;
use sacred_color::{ColorRgb, GOLDEN_ANGLE, harmonious_palette, hsl_to_rgb, rgb_to_hsl, rgb_to_lab};

fn any_rgb() -> impl Strategy<Value = ColorRgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| ColorRgb::new(r, g, b))
}

fn channel_close(a: u8, b: u8) -> bool {
    a.abs_diff(b) <= 1
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn hsl_roundtrip_within_one(rgb in any_rgb()) {
        let hsl = rgb_to_hsl(rgb);
        let back = hsl_to_rgb(hsl.h, hsl.s, hsl.l).unwrap();
        prop_assert!(
            channel_close(rgb.r, back.r) && channel_close(rgb.g, back.g) && channel_close(rgb.b, back.b),
            "{rgb} -> {hsl:?} -> {back}"
        );
    }

    #[test]
    fn hsl_components_in_range(rgb in any_rgb()) {
        let hsl = rgb_to_hsl(rgb);
        prop_assert!((0.0..360.0).contains(&hsl.h));
        prop_assert!((0.0..=1.0).contains(&hsl.s));
        prop_assert!((0.0..=1.0).contains(&hsl.l));
    }

    #[test]
    fn lab_lightness_in_range(rgb in any_rgb()) {
        let lab = rgb_to_lab(rgb);
        prop_assert!(lab.l > -1e-9 && lab.l < 100.0 + 1e-6, "L = {}", lab.l);
    }

    #[test]
    fn delta_e_symmetric(a in any_rgb(), b in any_rgb()) {
        let (la, lb) = (rgb_to_lab(a), rgb_to_lab(b));
        prop_assert!(la.delta_e(lb) >= 0.0);
        prop_assert!((la.delta_e(lb) - lb.delta_e(la)).abs() < 1e-9);
    }

    #[test]
    fn lighten_never_darkens(rgb in any_rgb(), percent in 0.0f64..200.0) {
        let light = rgb.lighten(percent).unwrap();
        let dark = rgb.darken(percent).unwrap();
        prop_assert!(light.r >= rgb.r && light.g >= rgb.g && light.b >= rgb.b);
        prop_assert!(dark.r <= rgb.r && dark.g <= rgb.g && dark.b <= rgb.b);
    }

    #[test]
    fn palette_steps_by_golden_angle(
        base in -720.0f64..720.0,
        s in 0.0f64..=1.0,
        l in 0.0f64..=1.0,
    ) {
        let palette = harmonious_palette(base, s, l).unwrap();
        prop_assert_eq!(palette.len(), 5);
        prop_assert!((palette.entries[0].hue() - normalize_hue(base)).abs() < 1e-9);
        for w in palette.entries.windows(2) {
            let step = normalize_hue(w[1].hue() - w[0].hue());
            prop_assert!((step - GOLDEN_ANGLE).abs() < 1e-9, "step {}", step);
        }
    }
}
