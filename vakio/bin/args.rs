use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use vakio::export::ExportFormat;

#[derive(Debug, Parser)]
/// Derives a chroma-maximized Oklch color palette for light editor themes.
pub struct Args {
    #[arg(long, global = true)]
    /// Palette config file. Defaults to `<config dir>/vakio/palette.toml`,
    /// falling back to the built-in parameters when it does not exist.
    pub config: Option<PathBuf>,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    /// Log more. Once for info, twice for debug, three times for trace.
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print every palette color with its role.
    Show,
    /// Write the palette as semantic, ANSI and rainbow color maps.
    Export {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
        #[arg(short, long)]
        /// File to write to instead of stdout.
        output: Option<PathBuf>,
    },
    /// List the chroma peaks of the sRGB gamut boundary at a lightness.
    Peaks {
        lightness: f64,
        #[arg(long, default_value_t = 0.2)]
        /// Minimum peak prominence, per mille.
        prominence: f64,
    },
    /// Generate colors at a lightness from the gamut peaks.
    Generate {
        lightness: f64,
        #[arg(long, default_value_t = 1)]
        /// Number of colors between blue and red.
        magenta: usize,
        #[arg(long, default_value_t = 1)]
        /// Number of colors between blue and green.
        cyan: usize,
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        /// Comma separated shift per color, each in (-1, 1). Negative values
        /// pull a color towards its left neighbour, positive to its right.
        shift: Option<Vec<f64>>,
        #[arg(long, default_value_t = 0.2)]
        /// Minimum prominence of the gamut peaks, per mille.
        prominence: f64,
    },
    /// Render the gamut at a lightness as a PNG, marking the palette colors
    /// of that lightness.
    Plot {
        #[arg(long, value_enum, default_value_t = Level::Dark)]
        level: Level,
        #[arg(long)]
        /// Plot at this lightness instead of the level's, marking the level's
        /// colors regenerated there.
        lightness: Option<f64>,
        #[arg(long, default_value_t = 720)]
        /// Width and height in pixels.
        size: u32,
        #[arg(long)]
        /// Circle every color with the minimum distance between any two.
        separation: bool,
        output: PathBuf,
    },
    /// Draw the palette as an SVG swatch table.
    Swatches {
        #[arg(long, value_enum, default_value_t = Table::Text)]
        table: Table,
        #[arg(long)]
        /// Print labels in black instead of their own color.
        plain: bool,
        output: PathBuf,
    },
    /// Write the default palette config.
    InitConfig {
        #[arg(long)]
        /// Overwrite an existing file.
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Toml,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Level {
    Dark,
    Bright,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Table {
    /// Text greys below text colors.
    Text,
    /// UI greys below manual greys.
    Greys,
    /// ANSI colors, normal below bright.
    Ansi,
    /// The rainbow colors in one row.
    Rainbow,
}

impl From<Format> for ExportFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => ExportFormat::Json,
            Format::Toml => ExportFormat::Toml,
        }
    }
}
