//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// A reference white, on the scale where Y of white is 1.0.
pub trait WhitePoint {
    /// The tristimulus values of the reference white.
    const WHITE_POINT: Components;
}

/// The CIE standard illuminant D65.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct D65;

impl WhitePoint for D65 {
    const WHITE_POINT: Components = Components(0.95047, 1.0, 1.08883);
}

/// Specify that a color model supports conversion to CIE-XYZ.
pub trait ToXyz<W: WhitePoint> {
    /// Convert this color to CIE-XYZ.
    fn to_xyz(&self) -> Xyz<W>;
}

chromalink_macros::gen_model! {
    /// A color in the CIE-XYZ color space relative to a white point. Y of the
    /// reference white is 1.0.
    pub struct Xyz<W: WhitePoint> {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}

impl<W: WhitePoint> Xyz<W> {
    /// Return the components of this color.
    pub fn to_components(&self) -> Components {
        Components(self.x, self.y, self.z)
    }

    /// Divide each component by the matching component of the white point.
    pub fn relative_to_white(&self) -> Components {
        Components(
            self.x / W::WHITE_POINT.0,
            self.y / W::WHITE_POINT.1,
            self.z / W::WHITE_POINT.2,
        )
    }
}

impl<W: WhitePoint> From<Components> for Xyz<W> {
    fn from(value: Components) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

/// Model for a color in the CIE-XYZ color space with a D65 white point.
pub type XyzD65 = Xyz<D65>;
