//! Model a color in the CIE-Lab color space.

use crate::{
    color::{Component, Components},
    models::xyz::{ToXyz, WhitePoint, Xyz, XyzD65, D65},
};

/// Below this relative luminance the companding function is linear.
const EPSILON: Component = 0.008856;

/// The value of the companding function at [`EPSILON`]. The inverse function
/// switches branches here.
const EPSILON_INV: Component = 0.206893;

/// Slope of the linear segment near black.
const KAPPA: Component = 7.787;

const OFFSET: Component = 16.0 / 116.0;

/// The CIE-Lab companding function.
fn f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        KAPPA * t + OFFSET
    }
}

/// The inverse of [`f`].
fn f_inv(t: Component) -> Component {
    if t > EPSILON_INV {
        t * t * t
    } else {
        (t - OFFSET) / KAPPA
    }
}

chromalink_macros::gen_model! {
    /// A color in the CIE-Lab color space relative to the D65 white point.
    pub struct Lab {
        /// The lightness of the color.
        #[range(0.0, 100.0)]
        lightness: Component,
        /// The position on the green-red axis.
        #[range(-128.0, 127.0)]
        a: Component,
        /// The position on the blue-yellow axis.
        #[range(-128.0, 127.0)]
        b: Component,
    }
}

impl ToXyz<D65> for Lab {
    fn to_xyz(&self) -> Xyz<D65> {
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = fy + self.a / 500.0;
        let fz = fy - self.b / 200.0;

        let Components(x, y, z) = Components(fx, fy, fz).map(f_inv);

        Xyz::new(
            x * D65::WHITE_POINT.0,
            y * D65::WHITE_POINT.1,
            z * D65::WHITE_POINT.2,
        )
    }
}

impl From<XyzD65> for Lab {
    fn from(value: XyzD65) -> Self {
        let Components(fx, fy, fz) = value.relative_to_white().map(f);

        let lightness = 116.0 * fy - 16.0;
        let a = 500.0 * (fx - fy);
        let b = 200.0 * (fy - fz);

        Lab::new(lightness, a, b)
    }
}

impl std::fmt::Display for Lab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.p$} {:.p$} {:.p$}", self.lightness, self.a, self.b),
            None => write!(f, "{} {} {}", self.lightness, self.a, self.b),
        }
    }
}
