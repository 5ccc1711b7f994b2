//! Model a color in the sRGB color space.

use crate::{
    color::{Component, Components},
    error::Error,
    math::{transform, transform_3x3, Transform},
    models::xyz::{ToXyz, Xyz, XyzD65, D65},
};

/// Convert a gamma encoded sRGB channel in [0, 1] to linear light.
pub fn linearize(value: Component) -> Component {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light channel to gamma encoded sRGB.
pub fn delinearize(value: Component) -> Component {
    if value <= 0.0031308 {
        12.92 * value
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}

chromalink_macros::gen_model! {
    /// A gamma encoded color in the sRGB color space with 8-bit channels.
    pub struct Rgb {
        /// The red channel of the color.
        red: u8,
        /// The green channel of the color.
        green: u8,
        /// The blue channel of the color.
        blue: u8,
    }
}

impl Rgb {
    /// Create a color from channels in the [0, 1] range. Each channel is
    /// scaled to [0, 255], rounded and clamped.
    pub fn from_unit(from: Components) -> Self {
        let Components(red, green, blue) = from.map(|v| v * 255.0);
        Self::from_channels(red, green, blue)
    }

    /// Create a color from channels in the [0, 255] range that may carry a
    /// fraction. Each channel is rounded and clamped.
    pub fn from_channels(red: Component, green: Component, blue: Component) -> Self {
        let Components(red, green, blue) =
            Components(red, green, blue).map(|v| v.round().clamp(0.0, 255.0));
        Self::new(red as u8, green as u8, blue as u8)
    }

    /// Return the channels scaled to the [0, 1] range.
    pub fn to_unit(&self) -> Components {
        Components(
            self.red as Component / 255.0,
            self.green as Component / 255.0,
            self.blue as Component / 255.0,
        )
    }

    /// Convert this color from gamma encoded to linear light.
    pub fn to_linear_light(&self) -> LinearRgb {
        let Components(red, green, blue) = self.to_unit().map(linearize);
        LinearRgb::new(red, green, blue)
    }

    /// Format the color as a hex string, e.g. `#FF8000`.
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }

    /// Parse a hex string such as `#FF8000`, `ff8000` or `#f80`.
    pub fn from_hex(hex: &str) -> Result<Self, Error> {
        let digits = hex.trim().trim_start_matches('#');
        let invalid = || Error::InvalidHex {
            input: hex.to_string(),
        };

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).map_err(|_| invalid());

        match digits.len() {
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Ok(Self::new(expand(0)?, expand(1)?, expand(2)?))
            }
            6 => Ok(Self::new(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            _ => Err(invalid()),
        }
    }

    /// Format the color as a CSS color, e.g. `rgb(255, 128, 0)`.
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.red, self.green, self.blue)
    }
}

chromalink_macros::gen_model! {
    /// A color in the sRGB color space with no gamma encoding.
    pub struct LinearRgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

impl LinearRgb {
    /// Convert this color from linear light to gamma encoded. The result is
    /// rounded to whole channels and clamped to [0, 255].
    pub fn to_gamma_encoded(&self) -> Rgb {
        Rgb::from_unit(Components(self.red, self.green, self.blue).map(delinearize))
    }
}

impl ToXyz<D65> for LinearRgb {
    fn to_xyz(&self) -> Xyz<D65> {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const TO_XYZ: Transform = transform_3x3(
            0.4124564, 0.3575761, 0.1804375,
            0.2126729, 0.7151522, 0.0721750,
            0.0193339, 0.1191920, 0.9503041,
        );

        transform(&TO_XYZ, Components(self.red, self.green, self.blue)).into()
    }
}

impl From<XyzD65> for LinearRgb {
    fn from(value: XyzD65) -> Self {
        #[rustfmt::skip]
        #[allow(clippy::excessive_precision)]
        const FROM_XYZ: Transform = transform_3x3(
             3.2404542, -1.5371385, -0.4985314,
            -0.9692660,  1.8760108,  0.0415560,
             0.0556434, -0.2040259,  1.0572252,
        );

        let Components(red, green, blue) = transform(&FROM_XYZ, value.to_components());
        Self::new(red, green, blue)
    }
}
