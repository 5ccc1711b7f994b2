//! Validation of text typed into a color field, before any conversion runs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    color::{Component, Space},
    error::Error,
};

/// One editable field: a single channel of one of the color spaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// sRGB red, 0 to 255.
    Red,
    /// sRGB green, 0 to 255.
    Green,
    /// sRGB blue, 0 to 255.
    Blue,
    /// Lab lightness, 0 to 100.
    Lightness,
    /// Lab green-red axis, -128 to 127.
    A,
    /// Lab blue-yellow axis, -128 to 127.
    B,
    /// CMYK cyan, 0 to 1.
    Cyan,
    /// CMYK magenta, 0 to 1.
    Magenta,
    /// CMYK yellow, 0 to 1.
    Yellow,
    /// CMYK key, 0 to 1.
    Key,
}

impl Channel {
    /// Every channel, grouped by space in display order.
    pub const ALL: [Channel; 10] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Lightness,
        Channel::A,
        Channel::B,
        Channel::Cyan,
        Channel::Magenta,
        Channel::Yellow,
        Channel::Key,
    ];

    /// The space this channel belongs to.
    pub fn space(&self) -> Space {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => Space::Rgb,
            Channel::Lightness | Channel::A | Channel::B => Space::Lab,
            Channel::Cyan | Channel::Magenta | Channel::Yellow | Channel::Key => Space::Cmyk,
        }
    }

    /// The channels of a space, in order.
    pub fn of_space(space: Space) -> &'static [Channel] {
        match space {
            Space::Rgb => &Self::ALL[0..3],
            Space::Lab => &Self::ALL[3..6],
            Space::Cmyk => &Self::ALL[6..10],
        }
    }

    /// Position of this channel within its space.
    pub fn index(&self) -> usize {
        Self::of_space(self.space())
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// The inclusive range of accepted values.
    pub fn range(&self) -> (Component, Component) {
        match self {
            Channel::Red | Channel::Green | Channel::Blue => (0.0, 255.0),
            Channel::Lightness => (0.0, 100.0),
            Channel::A | Channel::B => (-128.0, 127.0),
            Channel::Cyan | Channel::Magenta | Channel::Yellow | Channel::Key => (0.0, 1.0),
        }
    }

    /// Whether a lone minus sign is a valid intermediate state while typing.
    ///
    /// Only the a and b axes go negative, so lightness rejects a lone `-`
    /// like every other channel does.
    pub fn accepts_sign(&self) -> bool {
        matches!(self, Channel::A | Channel::B)
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
            Channel::Lightness => "lightness",
            Channel::A => "a",
            Channel::B => "b",
            Channel::Cyan => "cyan",
            Channel::Magenta => "magenta",
            Channel::Yellow => "yellow",
            Channel::Key => "key",
        })
    }
}

/// Parse a channel from its full name or its initial, ignoring case.
///
/// The initials `r` and `g` name the RGB channels, but `b` names the Lab b
/// axis. Blue is only reachable as `blue`.
impl std::str::FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_ascii_lowercase().as_str() {
            "r" | "red" => Channel::Red,
            "g" | "green" => Channel::Green,
            "blue" => Channel::Blue,
            "l" | "lightness" => Channel::Lightness,
            "a" => Channel::A,
            "b" => Channel::B,
            "c" | "cyan" => Channel::Cyan,
            "m" | "magenta" => Channel::Magenta,
            "y" | "yellow" => Channel::Yellow,
            "k" | "key" => Channel::Key,
            _ => {
                return Err(Error::UnknownChannel {
                    name: s.to_string(),
                })
            }
        })
    }
}

/// Accepted text from a field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Input {
    /// A number within the channel's range.
    Value(Component),
    /// An incomplete entry, such as a lone minus sign. Nothing is converted.
    Pending,
}

/// Rejected text from a field.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// The text is not a number.
    #[error("{channel}: {input:?} is not a number")]
    Parse {
        /// The field the text was typed into.
        channel: Channel,
        /// The rejected text.
        input: String,
    },

    /// The number is outside of the channel's range.
    #[error("{channel}: {value} is outside of {min}..={max}")]
    Range {
        /// The field the text was typed into.
        channel: Channel,
        /// The rejected value.
        value: Component,
        /// The smallest accepted value.
        min: Component,
        /// The largest accepted value.
        max: Component,
    },
}

impl ValidationError {
    /// The field that rejected the input.
    pub fn channel(&self) -> Channel {
        match self {
            ValidationError::Parse { channel, .. } | ValidationError::Range { channel, .. } => {
                *channel
            }
        }
    }
}

/// Validate the text typed into the field of `channel`.
pub fn validate(channel: Channel, raw: &str) -> Result<Input, ValidationError> {
    let text = raw.trim();

    if text == "-" && channel.accepts_sign() {
        return Ok(Input::Pending);
    }

    let value = match text.parse::<Component>() {
        Ok(value) if value.is_finite() => value,
        _ => {
            return Err(ValidationError::Parse {
                channel,
                input: raw.to_string(),
            })
        }
    };

    let (min, max) = channel.range();
    if value < min || value > max {
        return Err(ValidationError::Range {
            channel,
            value,
            min,
            max,
        });
    }

    Ok(Input::Value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_out_of_range_is_rejected() {
        assert_eq!(
            validate(Channel::Red, "300"),
            Err(ValidationError::Range {
                channel: Channel::Red,
                value: 300.0,
                min: 0.0,
                max: 255.0,
            })
        );
        assert!(validate(Channel::Green, "-1").is_err());
        assert_eq!(validate(Channel::Blue, "255"), Ok(Input::Value(255.0)));
        assert_eq!(validate(Channel::Blue, " 12.5 "), Ok(Input::Value(12.5)));
    }

    #[test]
    fn lone_minus_is_pending_on_a_and_b() {
        assert_eq!(validate(Channel::A, "-"), Ok(Input::Pending));
        assert_eq!(validate(Channel::B, "-"), Ok(Input::Pending));
        assert!(matches!(
            validate(Channel::Lightness, "-"),
            Err(ValidationError::Parse { .. })
        ));
        assert!(matches!(
            validate(Channel::Red, "-"),
            Err(ValidationError::Parse { .. })
        ));
    }

    #[test]
    fn lab_ranges() {
        assert_eq!(validate(Channel::Lightness, "100"), Ok(Input::Value(100.0)));
        assert!(validate(Channel::Lightness, "100.5").is_err());
        assert_eq!(validate(Channel::A, "-128"), Ok(Input::Value(-128.0)));
        assert!(validate(Channel::A, "-128.01").is_err());
        assert!(validate(Channel::B, "128").is_err());
    }

    #[test]
    fn cmyk_range() {
        assert_eq!(validate(Channel::Key, "0.25"), Ok(Input::Value(0.25)));
        assert!(validate(Channel::Cyan, "1.1").is_err());
    }

    #[test]
    fn non_numbers_are_parse_errors() {
        for text in ["", "  ", "abc", "1,5", "NaN", "inf", "-inf", "12px"] {
            let err = validate(Channel::Magenta, text).unwrap_err();
            assert_eq!(
                err,
                ValidationError::Parse {
                    channel: Channel::Magenta,
                    input: text.to_string()
                }
            );
            assert_eq!(err.channel(), Channel::Magenta);
        }
    }

    #[test]
    fn channel_lookup() {
        assert_eq!(Channel::of_space(Space::Lab), &[Channel::Lightness, Channel::A, Channel::B]);
        assert_eq!(Channel::Key.index(), 3);
        assert_eq!(Channel::Green.index(), 1);
        assert_eq!(Channel::Yellow.space(), Space::Cmyk);
        assert_eq!("L".parse::<Channel>().unwrap(), Channel::Lightness);
        assert_eq!("blue".parse::<Channel>().unwrap(), Channel::Blue);
    }

    #[test]
    fn b_names_the_lab_axis() {
        assert_eq!("b".parse::<Channel>().unwrap(), Channel::B);
        assert_eq!("B".parse::<Channel>().unwrap(), Channel::B);
        assert_eq!("r".parse::<Channel>().unwrap(), Channel::Red);
    }

    #[test]
    fn unknown_channel_is_an_error() {
        let err = "x".parse::<Channel>().unwrap_err();
        assert!(matches!(&err, Error::UnknownChannel { name } if name == "x"));
        assert_eq!(err.to_string(), "Unknown channel: \"x\"");
    }

    #[test]
    fn error_messages() {
        let err = validate(Channel::Red, "300").unwrap_err();
        assert_eq!(err.to_string(), "red: 300 is outside of 0..=255");
        let err = validate(Channel::A, "x").unwrap_err();
        assert_eq!(err.to_string(), "a: \"x\" is not a number");
    }
}
