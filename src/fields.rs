//! The field set keeps the text of every color field in sync.
//!
//! It stands in for the presentation layer: it owns the text of all ten
//! fields, validates an edit, converts the edited space and rewrites the
//! fields of the other two spaces. The conversion functions never see any of
//! this state.

use tracing::{debug, warn};

use crate::{
    color::{Color, Component, Space, Spaces},
    config::FieldsConfig,
    convert::ColorSet,
    math::round_to,
    models::{Cmyk, Lab, Rgb},
    validate::{validate, Channel, Input, ValidationError},
};

/// The text of all color fields, plus the color they currently describe.
#[derive(Debug, Clone)]
pub struct FieldSet {
    config: FieldsConfig,
    fields: [String; Channel::ALL.len()],
    colors: ColorSet,
}

impl Default for FieldSet {
    fn default() -> Self {
        Self::new(FieldsConfig::default())
    }
}

impl FieldSet {
    /// Create a field set showing black in every space.
    pub fn new(config: FieldsConfig) -> Self {
        let black = Rgb::new(0, 0, 0);
        let mut fields = Self {
            config,
            fields: Default::default(),
            colors: ColorSet::from_rgb(black),
        };
        fields.set_color(black.into());
        fields
    }

    /// Apply text typed into the field of `channel`.
    ///
    /// Rejected text clears that field (unless configured otherwise) and
    /// leaves every other field alone. Pending text is stored as typed
    /// without converting. A field emptied by the user reads as zero, like
    /// its empty siblings. After any other edit, and after emptying a field,
    /// the fields of the other two spaces are rewritten and returned.
    pub fn edit(&mut self, channel: Channel, raw: &str) -> Result<Spaces, ValidationError> {
        if raw.trim().is_empty() {
            self.fields[channel as usize].clear();
            return Ok(self.recompute(channel));
        }

        let input = match validate(channel, raw) {
            Ok(input) => input,
            Err(err) => {
                warn!("rejected edit: {}", err);
                if self.config.clear_on_reject {
                    self.fields[channel as usize].clear();
                }
                return Err(err);
            }
        };

        self.fields[channel as usize] = raw.to_string();

        if input == Input::Pending {
            debug!("{} is pending: {:?}", channel, raw);
            return Ok(Spaces::empty());
        }

        Ok(self.recompute(channel))
    }

    /// Show `color` in every field.
    pub fn set_color(&mut self, color: Color) {
        self.colors = ColorSet::from_color(color);
        self.write(Spaces::all());
    }

    /// The text of the field of `channel`.
    pub fn field(&self, channel: Channel) -> &str {
        &self.fields[channel as usize]
    }

    /// The text of the fields of `space`, in channel order.
    pub fn fields_of(&self, space: Space) -> Vec<&str> {
        Channel::of_space(space)
            .iter()
            .map(|c| self.field(*c))
            .collect()
    }

    /// The color the fields describe in every space.
    pub fn colors(&self) -> ColorSet {
        self.colors
    }

    /// The preview color of the current fields.
    pub fn swatch(&self) -> Rgb {
        self.colors.rgb
    }

    /// The configuration in use.
    pub fn config(&self) -> &FieldsConfig {
        &self.config
    }

    /// Convert the space of the edited `channel` and rewrite the fields of
    /// the other two.
    fn recompute(&mut self, channel: Channel) -> Spaces {
        let space = channel.space();
        let color = self.read(space);
        debug!("{} edited, recomputing from {:?}", channel, color);

        self.colors = ColorSet::from_color(color);

        let derived = Spaces::all().difference(space.into());
        self.write(derived);
        derived
    }

    /// Read the color described by the fields of `space`. Fields that are
    /// empty or pending read as zero.
    fn read(&self, space: Space) -> Color {
        let value = |channel: Channel| match validate(channel, self.field(channel)) {
            Ok(Input::Value(value)) => value,
            _ => 0.0,
        };

        match space {
            Space::Rgb => Rgb::from_channels(
                value(Channel::Red),
                value(Channel::Green),
                value(Channel::Blue),
            )
            .into(),
            Space::Lab => Lab::new(
                value(Channel::Lightness),
                value(Channel::A),
                value(Channel::B),
            )
            .into(),
            Space::Cmyk => Cmyk::new(
                value(Channel::Cyan),
                value(Channel::Magenta),
                value(Channel::Yellow),
                value(Channel::Key),
            )
            .into(),
        }
    }

    /// Rewrite the fields of `spaces` from the current colors.
    fn write(&mut self, spaces: Spaces) {
        if spaces.contains(Spaces::RGB) {
            let text = self.colors.rgb.to_array().map(|v| v.to_string());
            self.write_space(Space::Rgb, text);
        }

        if spaces.contains(Spaces::LAB) {
            let p = self.config.lab_precision;
            let text = self
                .colors
                .lab
                .to_array()
                .map(|v| format!("{:.p$}", round_to(v, p as i32) + 0.0));
            self.write_space(Space::Lab, text);
        }

        if spaces.contains(Spaces::CMYK) {
            let p = self.config.cmyk_precision as i32;
            let text = self
                .colors
                .cmyk
                .to_array()
                .map(|v: Component| (round_to(v, p) + 0.0).to_string());
            self.write_space(Space::Cmyk, text);
        }
    }

    fn write_space<const N: usize>(&mut self, space: Space, text: [String; N]) {
        for (channel, text) in Channel::of_space(space).iter().zip(text) {
            self.fields[*channel as usize] = text;
        }
    }
}

impl std::fmt::Display for FieldSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for space in Space::ALL {
            writeln!(f, "{:<7}{}", space, self.fields_of(space).join("  "))?;
        }
        let swatch = self.swatch();
        write!(f, "{:<7}{} {}", "swatch", swatch.to_hex(), swatch.to_css())
    }
}
