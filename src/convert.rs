//! Conversions between the editable color spaces.
//!
//! RGB is the hub: Lab reaches RGB through CIE-XYZ, CMYK reaches RGB
//! directly, and Lab and CMYK only reach each other through RGB. Routing the
//! composite conversions through the same 8-bit RGB value keeps all three
//! spaces consistent after any single edit.
//!
//! Every function here is pure and every result is within the range of its
//! model.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    color::{Color, Space},
    models::{Cmyk, Lab, LinearRgb, Rgb, ToXyz, XyzD65},
};

/// Convert an sRGB color to CIE-XYZ.
pub fn rgb_to_xyz(rgb: Rgb) -> XyzD65 {
    rgb.to_linear_light().to_xyz()
}

/// Convert a CIE-XYZ color to sRGB, rounding and clamping the channels.
pub fn xyz_to_rgb(xyz: XyzD65) -> Rgb {
    LinearRgb::from(xyz).to_gamma_encoded()
}

/// Convert a CIE-XYZ color to CIE-Lab.
pub fn xyz_to_lab(xyz: XyzD65) -> Lab {
    Lab::from(xyz)
}

/// Convert a CIE-Lab color to CIE-XYZ.
pub fn lab_to_xyz(lab: Lab) -> XyzD65 {
    lab.to_xyz()
}

/// Convert an sRGB color to CIE-Lab.
pub fn rgb_to_lab(rgb: Rgb) -> Lab {
    xyz_to_lab(rgb_to_xyz(rgb))
}

/// Convert a CIE-Lab color to sRGB.
pub fn lab_to_rgb(lab: Lab) -> Rgb {
    xyz_to_rgb(lab_to_xyz(lab))
}

/// Convert an sRGB color to CMYK.
pub fn rgb_to_cmyk(rgb: Rgb) -> Cmyk {
    Cmyk::from(rgb)
}

/// Convert a CMYK color to sRGB.
pub fn cmyk_to_rgb(cmyk: Cmyk) -> Rgb {
    cmyk.to_rgb()
}

/// Convert a CIE-Lab color to CMYK by way of sRGB.
pub fn lab_to_cmyk(lab: Lab) -> Cmyk {
    rgb_to_cmyk(lab_to_rgb(lab))
}

/// Convert a CMYK color to CIE-Lab by way of sRGB.
pub fn cmyk_to_lab(cmyk: Cmyk) -> Lab {
    rgb_to_lab(cmyk_to_rgb(cmyk))
}

impl Rgb {
    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        rgb_to_lab(*self)
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        rgb_to_cmyk(*self)
    }
}

impl Lab {
    /// Convert this color to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        lab_to_rgb(*self)
    }

    /// Convert this color to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        lab_to_cmyk(*self)
    }
}

impl Cmyk {
    /// Convert this color to CIE-Lab.
    pub fn to_lab(&self) -> Lab {
        cmyk_to_lab(*self)
    }
}

impl Color {
    /// Convert this color from its current space to the specified space.
    pub fn to_space(&self, space: Space) -> Self {
        use Space as S;

        if self.space() == space {
            return *self;
        }

        trace!("converting {} to {}", self.space(), space);

        match (*self, space) {
            (Color::Rgb(rgb), S::Lab) => rgb.to_lab().into(),
            (Color::Rgb(rgb), S::Cmyk) => rgb.to_cmyk().into(),
            (Color::Lab(lab), S::Rgb) => lab.to_rgb().into(),
            (Color::Lab(lab), S::Cmyk) => lab.to_cmyk().into(),
            (Color::Cmyk(cmyk), S::Rgb) => cmyk.to_rgb().into(),
            (Color::Cmyk(cmyk), S::Lab) => cmyk.to_lab().into(),
            (color, _) => color,
        }
    }

    /// Convert this color to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        match *self {
            Color::Rgb(rgb) => rgb,
            Color::Lab(lab) => lab.to_rgb(),
            Color::Cmyk(cmyk) => cmyk.to_rgb(),
        }
    }
}

/// One color expressed in every editable space.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColorSet {
    /// The color in sRGB.
    pub rgb: Rgb,
    /// The color in CIE-Lab.
    pub lab: Lab,
    /// The color in CMYK.
    pub cmyk: Cmyk,
}

impl ColorSet {
    /// Derive Lab and CMYK from an sRGB color.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            rgb,
            lab: rgb.to_lab(),
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Derive sRGB and CMYK from a CIE-Lab color.
    pub fn from_lab(lab: Lab) -> Self {
        let rgb = lab.to_rgb();
        Self {
            rgb,
            lab,
            cmyk: rgb.to_cmyk(),
        }
    }

    /// Derive sRGB and CIE-Lab from a CMYK color.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let rgb = cmyk.to_rgb();
        Self {
            rgb,
            lab: rgb.to_lab(),
            cmyk,
        }
    }

    /// Derive the other two spaces from a color in any space.
    pub fn from_color(color: Color) -> Self {
        match color {
            Color::Rgb(rgb) => Self::from_rgb(rgb),
            Color::Lab(lab) => Self::from_lab(lab),
            Color::Cmyk(cmyk) => Self::from_cmyk(cmyk),
        }
    }

    /// Return the member of this set in the given space.
    pub fn get(&self, space: Space) -> Color {
        match space {
            Space::Rgb => self.rgb.into(),
            Space::Lab => self.lab.into(),
            Space::Cmyk => self.cmyk.into(),
        }
    }
}

impl From<Color> for ColorSet {
    fn from(value: Color) -> Self {
        Self::from_color(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn red_to_lab() {
        let lab = rgb_to_lab(Rgb::new(255, 0, 0));
        assert_component_eq!(lab.lightness, 53.24, 0.01);
        assert_component_eq!(lab.a, 80.09, 0.01);
        assert_component_eq!(lab.b, 67.20, 0.01);
    }

    #[test]
    fn known_colors_to_lab() {
        #[rustfmt::skip]
        const TESTS: &[(u8, u8, u8, f64, f64, f64)] = &[
            (255, 255, 255, 100.0,    0.0,     0.0),
            (0,   0,   0,     0.0,    0.0,     0.0),
            (0,   255, 0,    87.735, -86.183,  83.179),
            (0,   0,   255,  32.297,  79.188, -107.860),
            (128, 128, 128,  53.585,   0.0,     0.0),
        ];

        for &(r, g, b, l, a, bb) in TESTS {
            let lab = rgb_to_lab(Rgb::new(r, g, b));
            assert_component_eq!(lab.lightness, l, 0.05);
            assert_component_eq!(lab.a, a, 0.05);
            assert_component_eq!(lab.b, bb, 0.05);
        }
    }

    #[test]
    fn lab_back_to_rgb() {
        assert_eq!(lab_to_rgb(Lab::new(53.2408, 80.0925, 67.2032)), Rgb::new(255, 0, 0));
        assert_eq!(lab_to_rgb(Lab::new(100.0, 0.0, 0.0)), Rgb::new(255, 255, 255));
        assert_eq!(lab_to_rgb(Lab::new(0.0, 0.0, 0.0)), Rgb::new(0, 0, 0));
    }

    #[test]
    fn out_of_gamut_lab_is_clamped() {
        // Far outside of sRGB, channels overshoot before clamping.
        let rgb = lab_to_rgb(Lab::new(50.0, -128.0, 127.0));
        assert_eq!(rgb.red, 0);
        let rgb = lab_to_rgb(Lab::new(100.0, 127.0, 127.0));
        assert_eq!(rgb.red, 255);
    }

    #[test]
    fn composites_route_through_rgb() {
        let lab = Lab::new(40.0, 20.0, -30.0);
        assert_eq!(lab_to_cmyk(lab), rgb_to_cmyk(lab_to_rgb(lab)));

        let cmyk = Cmyk::new(0.1, 0.4, 0.2, 0.3);
        assert_eq!(cmyk_to_lab(cmyk), rgb_to_lab(cmyk_to_rgb(cmyk)));
    }

    #[test]
    fn to_space_dispatch() {
        let red = Color::from(Rgb::new(255, 0, 0));
        assert_eq!(red.to_space(Space::Rgb), red);
        assert_eq!(
            red.to_space(Space::Cmyk),
            Color::Cmyk(Cmyk::new(0.0, 1.0, 1.0, 0.0))
        );

        let Color::Lab(lab) = red.to_space(Space::Lab) else {
            panic!("expected lab");
        };
        assert_component_eq!(lab.lightness, 53.24, 0.01);

        let back = Color::from(lab).to_space(Space::Rgb);
        assert_eq!(back, red);
        assert_eq!(Color::from(lab).to_space(Space::Cmyk).to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn color_set_keeps_source_member() {
        let cmyk = Cmyk::new(0.12, 0.34, 0.56, 0.07);
        let set = ColorSet::from(Color::from(cmyk));
        assert_eq!(set.cmyk, cmyk);
        assert_eq!(set.rgb, cmyk.to_rgb());
        assert_eq!(set.lab, set.rgb.to_lab());
        assert_eq!(set.get(Space::Cmyk), Color::Cmyk(cmyk));

        let lab = Lab::new(60.0, 10.0, 10.0);
        let set = ColorSet::from_lab(lab);
        assert_eq!(set.lab, lab);
        assert_eq!(set.cmyk, set.rgb.to_cmyk());
    }
}
