//! Model a color in the subtractive CMYK model.

use tracing::trace;

use crate::{
    color::{Component, Components},
    math::round_to,
    models::rgb::Rgb,
};

/// Number of decimal places CMYK channels are rounded to when derived from
/// RGB.
pub const CMYK_PRECISION: i32 = 4;

chromalink_macros::gen_model! {
    /// A color in the naive (profile free) CMYK model.
    pub struct Cmyk {
        /// The cyan ink coverage.
        #[range(0.0, 1.0)]
        cyan: Component,
        /// The magenta ink coverage.
        #[range(0.0, 1.0)]
        magenta: Component,
        /// The yellow ink coverage.
        #[range(0.0, 1.0)]
        yellow: Component,
        /// The key (black) ink coverage.
        #[range(0.0, 1.0)]
        key: Component,
    }
}

impl Cmyk {
    /// Convert this color to sRGB.
    pub fn to_rgb(&self) -> Rgb {
        let ink = 1.0 - self.key;
        Rgb::from_channels(
            255.0 * (1.0 - self.cyan) * ink,
            255.0 * (1.0 - self.magenta) * ink,
            255.0 * (1.0 - self.yellow) * ink,
        )
    }
}

impl From<Rgb> for Cmyk {
    fn from(value: Rgb) -> Self {
        let Components(red, green, blue) = value.to_unit();

        let key = 1.0 - red.max(green).max(blue);

        // Pure black would divide by zero below.
        if key == 1.0 {
            trace!("pure black, cmyk key only");
            return Cmyk::new(0.0, 0.0, 0.0, 1.0);
        }

        let ink = 1.0 - key;
        Cmyk::new(
            round_to((1.0 - red - key) / ink, CMYK_PRECISION),
            round_to((1.0 - green - key) / ink, CMYK_PRECISION),
            round_to((1.0 - blue - key) / ink, CMYK_PRECISION),
            round_to(key, CMYK_PRECISION),
        )
    }
}

impl std::fmt::Display for Cmyk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c, m, y, k] = self.to_array();
        match f.precision() {
            Some(p) => write!(f, "{c:.p$} {m:.p$} {y:.p$} {k:.p$}"),
            None => write!(f, "{c} {m} {y} {k}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn black_uses_only_key() {
        assert_eq!(Cmyk::from(Rgb::new(0, 0, 0)), Cmyk::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn white_uses_no_ink() {
        assert_eq!(
            Cmyk::from(Rgb::new(255, 255, 255)),
            Cmyk::new(0.0, 0.0, 0.0, 0.0)
        );
        assert_eq!(Cmyk::new(0.0, 0.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 255, 255));
    }

    #[test]
    fn primaries() {
        assert_eq!(Cmyk::from(Rgb::new(255, 0, 0)), Cmyk::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(Cmyk::from(Rgb::new(0, 255, 0)), Cmyk::new(1.0, 0.0, 1.0, 0.0));
        assert_eq!(Cmyk::from(Rgb::new(0, 0, 255)), Cmyk::new(1.0, 1.0, 0.0, 0.0));
    }

    #[test]
    fn channels_are_rounded_to_four_places() {
        // 1 - 128 / 255 = 0.498039...
        let cmyk = Cmyk::from(Rgb::new(128, 128, 128));
        assert_eq!(cmyk, Cmyk::new(0.0, 0.0, 0.0, 0.498));

        let cmyk = Cmyk::from(Rgb::new(200, 100, 50));
        assert_eq!(cmyk, Cmyk::new(0.0, 0.5, 0.75, 0.2157));
    }

    #[test]
    fn to_rgb_rounds_and_clamps() {
        assert_eq!(Cmyk::new(0.0, 0.5, 0.75, 0.2157).to_rgb(), Rgb::new(200, 100, 50));
        assert_eq!(Cmyk::new(1.0, 1.0, 1.0, 1.0).to_rgb(), Rgb::new(0, 0, 0));
        // Out of range input is clamped on construction.
        assert_eq!(Cmyk::new(-1.0, 2.0, 0.0, 0.0).to_rgb(), Rgb::new(255, 0, 255));
    }

    #[test]
    fn display_honours_precision() {
        let cmyk = Cmyk::new(0.0, 0.5, 0.75, 0.2157);
        assert_eq!(format!("{cmyk:.2}"), "0.00 0.50 0.75 0.22");
        assert_eq!(format!("{cmyk}"), "0 0.5 0.75 0.2157");
    }
}
