//! Models are structs that represent a color in a specified color space. They
//! are a type safe way to convert between the spaces: each conversion is only
//! implemented on the models it is relevant to.
//!
//! ```rust
//! use chromalink::models::{Lab, Rgb, ToXyz};
//! let lab = Lab::from(
//!     Rgb::new(255, 0, 0)
//!         .to_linear_light()      // convert to linear light sRGB.
//!         .to_xyz(),              // convert to xyz-d65.
//! );
//! assert_eq!(lab.lightness.round(), 53.0);
//! ```

mod cmyk;
mod lab;
mod rgb;
mod xyz;

pub use cmyk::*;
pub use lab::*;
pub use rgb::*;
pub use xyz::*;
