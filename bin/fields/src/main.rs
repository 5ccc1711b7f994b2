//! A terminal front end for the linked color fields.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use chromalink::{
    validate, Channel, Cmyk, Color, ColorSet, FieldSet, FieldsConfig, Input, Lab, Rgb, Space,
};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "chromalink-fields",
    about = "Convert between RGB, CIE Lab and CMYK",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert one color to every space
    Convert {
        /// The space the values are given in
        #[arg(value_enum)]
        space: InputSpace,

        /// The channel values, or a single hex string for `hex`
        #[arg(allow_hyphen_values = true, required = true)]
        values: Vec<String>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit the fields interactively, one `<channel> <text>` line at a time
    Edit {
        /// JSON configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum InputSpace {
    Rgb,
    Lab,
    Cmyk,
    Hex,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chromalink=info,chromalink_fields=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            space,
            values,
            json,
        } => {
            let colors = ColorSet::from_color(parse_color(space, &values)?);
            if json {
                println!("{}", serde_json::to_string_pretty(&colors)?);
            } else {
                print_colors(&colors);
            }
        }
        Commands::Edit { config } => {
            let config = match config {
                Some(path) => FieldsConfig::from_json_file(&path)
                    .with_context(|| format!("loading {}", path.display()))?,
                None => FieldsConfig::default(),
            };
            run_editor(config)?;
        }
    }

    Ok(())
}

fn parse_color(space: InputSpace, values: &[String]) -> Result<Color> {
    let space = match space {
        InputSpace::Hex => {
            let [hex] = values else {
                bail!("expected a single hex color, got {} values", values.len());
            };
            return Ok(Rgb::from_hex(hex)?.into());
        }
        InputSpace::Rgb => Space::Rgb,
        InputSpace::Lab => Space::Lab,
        InputSpace::Cmyk => Space::Cmyk,
    };

    let channels = Channel::of_space(space);
    if values.len() != channels.len() {
        bail!(
            "{} takes {} values, got {}",
            space,
            channels.len(),
            values.len()
        );
    }

    let mut parsed = Vec::with_capacity(channels.len());
    for (channel, text) in channels.iter().zip(values) {
        match validate(*channel, text)? {
            Input::Value(value) => parsed.push(value),
            Input::Pending => bail!("{}: incomplete value {:?}", channel, text),
        }
    }

    Ok(match space {
        Space::Rgb => Rgb::from_channels(parsed[0], parsed[1], parsed[2]).into(),
        Space::Lab => Lab::new(parsed[0], parsed[1], parsed[2]).into(),
        Space::Cmyk => Cmyk::new(parsed[0], parsed[1], parsed[2], parsed[3]).into(),
    })
}

fn print_colors(colors: &ColorSet) {
    println!("rgb    {}", colors.rgb);
    println!("lab    {:.4}", colors.lab);
    println!("cmyk   {}", colors.cmyk);
    println!("hex    {}", colors.rgb.to_hex());
}

fn run_editor(config: FieldsConfig) -> Result<()> {
    let mut fields = FieldSet::new(config);
    info!("editing fields, enter `<channel> <text>` or `quit`");
    run_session(&mut fields, std::io::stdin().lock(), std::io::stdout())
}

/// Apply `<channel> <text>` lines from `input` until it ends or reads `quit`,
/// printing the fields to `output` after every edit.
fn run_session(fields: &mut FieldSet, input: impl BufRead, mut output: impl Write) -> Result<()> {
    writeln!(output, "{fields}")?;

    for line in input.lines() {
        let line = line.context("reading input")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" || line == "exit" {
            break;
        }

        // The text may be empty, which clears the field.
        let (name, text) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let channel = match name.parse::<Channel>() {
            Ok(channel) => channel,
            Err(e) => {
                writeln!(output, "error: {e}")?;
                continue;
            }
        };

        match fields.edit(channel, text.trim()) {
            Ok(refreshed) => debug!("refreshed {:?}", refreshed),
            Err(e) => writeln!(output, "error: {e}")?,
        }
        writeln!(output, "{fields}")?;
    }

    Ok(())
}
