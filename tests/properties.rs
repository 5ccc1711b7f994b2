//! Property based tests for the conversions.
//!
//! Round trips, range guarantees and agreement between the direct and
//! composite conversions.

use approx::assert_abs_diff_eq;
use chromalink::{
    cmyk_to_lab, cmyk_to_rgb, lab_to_cmyk, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_lab,
    rgb_to_xyz, xyz_to_lab, xyz_to_rgb, Cmyk, Lab, Rgb,
};
use proptest::prelude::*;

fn rgb_strategy() -> impl Strategy<Value = Rgb> {
    (any::<u8>(), any::<u8>(), any::<u8>()).prop_map(|(r, g, b)| Rgb::new(r, g, b))
}

// Lightness is biased towards the dark end, where the companding function
// switches to its linear segment.
fn lightness() -> impl Strategy<Value = f64> {
    prop_oneof![
        0.0..=100.0f64,
        0.0..=8.0f64,
        Just(0.0),
        Just(8.0),
        Just(100.0),
    ]
}

fn axis() -> impl Strategy<Value = f64> {
    prop_oneof![-128.0..=127.0f64, Just(-128.0), Just(0.0), Just(127.0)]
}

prop_compose! {
    fn lab_strategy()(lightness in lightness(), a in axis(), b in axis()) -> Lab {
        Lab::new(lightness, a, b)
    }
}

prop_compose! {
    fn cmyk_strategy()(
        c in 0.0..=1.0f64,
        m in 0.0..=1.0f64,
        y in 0.0..=1.0f64,
        k in prop_oneof![0.0..=1.0f64, Just(1.0)],
    ) -> Cmyk {
        Cmyk::new(c, m, y, k)
    }
}

fn assert_within_one(actual: Rgb, expected: Rgb) {
    for (a, e) in actual.to_array().into_iter().zip(expected.to_array()) {
        assert!(a.abs_diff(e) <= 1, "{actual:?} is not within 1 of {expected:?}");
    }
}

fn assert_lab_in_range(lab: Lab) {
    assert!((0.0..=100.0).contains(&lab.lightness), "{lab:?}");
    assert!((-128.0..=127.0).contains(&lab.a), "{lab:?}");
    assert!((-128.0..=127.0).contains(&lab.b), "{lab:?}");
}

fn assert_cmyk_in_range(cmyk: Cmyk) {
    for value in cmyk.to_array() {
        assert!((0.0..=1.0).contains(&value), "{cmyk:?}");
        // Four decimal places at most.
        assert_abs_diff_eq!(value, (value * 1e4).round() / 1e4, epsilon = 1e-12);
    }
}

proptest! {
    #[test]
    fn rgb_survives_xyz(rgb in rgb_strategy()) {
        assert_within_one(xyz_to_rgb(rgb_to_xyz(rgb)), rgb);
    }

    #[test]
    fn lab_survives_xyz(lab in lab_strategy()) {
        let back = xyz_to_lab(lab_to_xyz(lab));
        assert_abs_diff_eq!(back.lightness, lab.lightness, epsilon = 0.01);
        assert_abs_diff_eq!(back.a, lab.a, epsilon = 0.01);
        assert_abs_diff_eq!(back.b, lab.b, epsilon = 0.01);
    }

    #[test]
    fn rgb_survives_cmyk(rgb in rgb_strategy()) {
        assert_eq!(cmyk_to_rgb(rgb_to_cmyk(rgb)), rgb);
    }

    #[test]
    fn rgb_results_are_in_range(rgb in rgb_strategy()) {
        assert_lab_in_range(rgb_to_lab(rgb));
        assert_cmyk_in_range(rgb_to_cmyk(rgb));
    }

    #[test]
    fn lab_results_are_in_range(lab in lab_strategy()) {
        assert_lab_in_range(xyz_to_lab(lab_to_xyz(lab)));
        assert_cmyk_in_range(lab_to_cmyk(lab));
    }

    #[test]
    fn composites_route_through_rgb(lab in lab_strategy(), cmyk in cmyk_strategy()) {
        assert_eq!(lab_to_cmyk(lab), rgb_to_cmyk(lab_to_rgb(lab)));
        assert_eq!(cmyk_to_lab(cmyk), rgb_to_lab(cmyk_to_rgb(cmyk)));
    }

    #[test]
    fn full_key_is_black(c in 0.0..=1.0f64, m in 0.0..=1.0f64, y in 0.0..=1.0f64) {
        assert_eq!(cmyk_to_rgb(Cmyk::new(c, m, y, 1.0)), Rgb::new(0, 0, 0));
    }
}

#[test]
fn rgb_grid_survives_xyz() {
    for r in (0..=255u8).step_by(5) {
        for g in (0..=255u8).step_by(5) {
            for b in (0..=255u8).step_by(5) {
                let rgb = Rgb::new(r, g, b);
                assert_within_one(xyz_to_rgb(rgb_to_xyz(rgb)), rgb);
            }
        }
    }
}

#[test]
fn dark_lab_survives_xyz() {
    // Wrong branch thresholds in the inverse function show up here first.
    for lightness in [0.5, 1.0, 2.5, 5.0, 7.9, 8.0, 8.1] {
        for (a, b) in [(0.0, 0.0), (10.0, -10.0), (-20.0, 30.0)] {
            let lab = Lab::new(lightness, a, b);
            let back = xyz_to_lab(lab_to_xyz(lab));
            assert_abs_diff_eq!(back.lightness, lightness, epsilon = 0.01);
            assert_abs_diff_eq!(back.a, a, epsilon = 0.01);
            assert_abs_diff_eq!(back.b, b, epsilon = 0.01);
        }
    }
}
