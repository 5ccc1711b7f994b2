//! chromalink converts colors between sRGB, CIE L\*a\*b\* and CMYK, and keeps
//! a set of linked color fields in sync while one of them is edited.
//!
//! The conversions are pure functions over small value types:
//!
//! ```rust
//! use chromalink::{rgb_to_cmyk, rgb_to_lab, Cmyk, Rgb};
//!
//! let lab = rgb_to_lab(Rgb::new(255, 0, 0));
//! assert_eq!(lab.lightness.round(), 53.0);
//! assert_eq!(rgb_to_cmyk(Rgb::new(0, 0, 0)), Cmyk::new(0.0, 0.0, 0.0, 1.0));
//! ```
//!
//! A [`FieldSet`] owns the text of the fields a user edits and rewrites the
//! derived spaces after every accepted edit:
//!
//! ```rust
//! use chromalink::{Channel, FieldSet, Space};
//!
//! let mut fields = FieldSet::default();
//! fields.edit(Channel::Red, "255")?;
//! assert_eq!(fields.fields_of(Space::Cmyk), ["0", "1", "1", "0"]);
//!
//! // Rejected text clears the field and converts nothing.
//! assert!(fields.edit(Channel::Green, "300").is_err());
//! assert_eq!(fields.field(Channel::Green), "");
//! # Ok::<(), chromalink::ValidationError>(())
//! ```

#![deny(missing_docs)]

mod color;
mod config;
mod convert;
mod error;
mod fields;
mod math;
pub mod models;
mod validate;


pub use color::{Color, Component, Components, Space, Spaces};
pub use config::FieldsConfig;
pub use convert::{
    cmyk_to_lab, cmyk_to_rgb, lab_to_cmyk, lab_to_rgb, lab_to_xyz, rgb_to_cmyk, rgb_to_lab,
    rgb_to_xyz, xyz_to_lab, xyz_to_rgb, ColorSet,
};
pub use error::{Error, Result};
pub use fields::FieldSet;
pub use math::round_to;
pub use models::{delinearize, linearize, Cmyk, Lab, LinearRgb, Rgb, XyzD65, CMYK_PRECISION};
pub use validate::{validate, Channel, Input, ValidationError};
