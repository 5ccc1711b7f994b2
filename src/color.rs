//! A [`Color`] holds a color specified in any of the supported color spaces.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::models::{Cmyk, Lab, Rgb};

/// A 64-bit floating point value that all fractional channels are stored as.
pub type Component = f64;

/// Three components of a color, used while a color travels through linear
/// light and CIE-XYZ.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces a user can edit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Space {
    /// Gamma encoded sRGB with 8-bit channels.
    Rgb = 0,
    /// CIE L*a*b* relative to the D65 white point.
    Lab = 1,
    /// The subtractive cyan, magenta, yellow and key model.
    Cmyk = 2,
}

impl Space {
    /// All spaces, in display order.
    pub const ALL: [Space; 3] = [Space::Rgb, Space::Lab, Space::Cmyk];
}

impl std::fmt::Display for Space {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(match self {
            Space::Rgb => "rgb",
            Space::Lab => "lab",
            Space::Cmyk => "cmyk",
        })
    }
}

bitflags! {
    /// A set of color spaces, used to report which fields were rewritten.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct Spaces : u8 {
        /// The RGB fields.
        const RGB = 1 << 0;
        /// The Lab fields.
        const LAB = 1 << 1;
        /// The CMYK fields.
        const CMYK = 1 << 2;
    }
}

impl From<Space> for Spaces {
    fn from(value: Space) -> Self {
        match value {
            Space::Rgb => Spaces::RGB,
            Space::Lab => Spaces::LAB,
            Space::Cmyk => Spaces::CMYK,
        }
    }
}

/// A color in any of the editable spaces.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "space", rename_all = "lowercase")]
pub enum Color {
    /// An sRGB color.
    Rgb(Rgb),
    /// A CIE L*a*b* color.
    Lab(Lab),
    /// A CMYK color.
    Cmyk(Cmyk),
}

impl Color {
    /// The space the color is specified in.
    pub fn space(&self) -> Space {
        match self {
            Color::Rgb(_) => Space::Rgb,
            Color::Lab(_) => Space::Lab,
            Color::Cmyk(_) => Space::Cmyk,
        }
    }
}

impl From<Rgb> for Color {
    fn from(value: Rgb) -> Self {
        Color::Rgb(value)
    }
}

impl From<Lab> for Color {
    fn from(value: Lab) -> Self {
        Color::Lab(value)
    }
}

impl From<Cmyk> for Color {
    fn from(value: Cmyk) -> Self {
        Color::Cmyk(value)
    }
}
