use std::{fs, path::PathBuf};

use anyhow::{bail, Context, Result};
use clap::Parser;
use common::{
    color::OkLch,
    config::{LevelConfig, PaletteConfig},
};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{filter, layer::SubscriberExt, util::SubscriberInitExt};

use args::{Args, Command, Level, Table};
use vakio::{
    alg::{find_peaks, generate, generate_with, PeakDetectionParams, LEFT_HUE},
    create_palette,
    export::{ExportFormat, PaletteExport},
    metadata::{
        ansi_position, rainbow_position, Role, ANSI, ANSI_NAMES, BRIGHT_COLORS, DARK_COLORS,
        MANUAL_GREYS, RAINBOW, RAINBOW_NAMES, TEXT_COLORS, TEXT_GREYS, UI_GREYS,
    },
    render::{
        gamut::{draw_colors, render_slice},
        swatches::{self, Labeled},
    },
    Palette,
};

mod args;

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = filter::Targets::new()
        .with_default(LevelFilter::OFF)
        .with_target("vakio", level)
        .with_target("common", level);
    let format = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(format)
        .init();

    let config = args.config.as_deref();

    match args.command {
        Command::Show => show(&create_palette(&PaletteConfig::resolve(config)?)?),
        Command::Export { format, output } => {
            let palette = create_palette(&PaletteConfig::resolve(config)?)?;
            let format = ExportFormat::from(format);
            let string = format.render(&PaletteExport::new(&palette))?;
            match output {
                Some(path) => {
                    fs::write(&path, string)?;
                    info!("Wrote {} export to {}", format.extension(), path.display());
                }
                None => println!("{string}"),
            }
        }
        Command::Peaks {
            lightness,
            prominence,
        } => {
            let params = PeakDetectionParams {
                prominence,
                ..Default::default()
            };
            let peaks = find_peaks(lightness, LEFT_HUE, &params)?;
            println!("{:>8} {:>8} {:>10}", "hue", "chroma", "prominence");
            for (color, prominence) in peaks.colors.iter().zip(&peaks.prominences) {
                println!("{:>8.1} {:>8.1} {:>10.2}", color.h, color.c, prominence);
            }
        }
        Command::Generate {
            lightness,
            magenta,
            cyan,
            shift,
            prominence,
        } => {
            let params = PeakDetectionParams {
                prominence,
                ..Default::default()
            };
            for color in generate_with(lightness, magenta, cyan, shift.as_deref(), &params)? {
                println!("{}  {color}", color.to_hex());
            }
        }
        Command::Plot {
            level,
            lightness,
            size,
            separation,
            output,
        } => {
            let config = PaletteConfig::resolve(config)?;
            let (level_config, indices) = match level {
                Level::Dark => (&config.dark, DARK_COLORS.as_slice()),
                Level::Bright => (&config.bright, BRIGHT_COLORS.as_slice()),
            };

            let (l, colors) = match lightness {
                Some(l) => (l, level_colors(level_config, l)?),
                None => {
                    let palette = create_palette(&config)?;
                    let colors = indices.iter().map(|&i| palette[i]).collect::<Vec<_>>();
                    (level_config.lightness, colors)
                }
            };

            let mut image = render_slice(l, size);
            draw_colors(&mut image, &colors, separation);
            image.save(&output)?;
            info!("Saved gamut plot at L = {l} to {}", output.display());
        }
        Command::Swatches {
            table,
            plain,
            output,
        } => {
            let palette = create_palette(&PaletteConfig::resolve(config)?)?;
            let (bottom, top) = swatch_table(&palette, table);
            let document = swatches::document(&bottom, top.as_deref(), !plain);
            svg::save(&output, &document)?;
            info!("Saved swatches to {}", output.display());
        }
        Command::InitConfig { force } => {
            let config_path = match config {
                Some(path) => path.to_owned(),
                None => default_path()?,
            };
            if config_path.exists() && !force {
                bail!(
                    "{} already exists, pass --force to overwrite it",
                    config_path.display()
                );
            }
            PaletteConfig::default().save(&config_path)?;
            println!("Wrote default config to {}", config_path.display());
        }
    }

    Ok(())
}

fn default_path() -> Result<PathBuf> {
    PaletteConfig::default_path().context("No config directory on this platform, pass --config")
}

/// Colors of a level moved to another lightness. Shifts are dropped since
/// they were tuned for the configured lightness.
fn level_colors(config: &LevelConfig, l: f64) -> Result<Vec<OkLch<f64>>> {
    generate(l, config.n_magenta, config.n_cyan, None)
}

fn show(palette: &Palette) {
    println!(
        "{:>3}  {:<10} {:<8} {:>5} {:>6} {:>6}  {:<16} {:<8} {}",
        "#", "role", "hex", "L", "c", "h", "ansi", "rainbow", "description"
    );

    for swatch in palette.swatches() {
        let role = Role::of_index(swatch.index);
        let ansi = ansi_position(swatch.index).map_or("", |i| ANSI_NAMES[i]);
        let rainbow = rainbow_position(swatch.index).map_or("", |i| RAINBOW_NAMES[i]);
        println!(
            "{:>3}  {:<10} {:<8} {:>5.1} {:>6.1} {:>6.1}  {:<16} {:<8} {}",
            swatch.index,
            role.map_or("", |r| r.key()),
            swatch.hex.to_string(),
            swatch.color.l * 100.0,
            swatch.color.c,
            swatch.color.h,
            ansi,
            rainbow,
            role.map_or("", |r| r.description()),
        );
    }
}

fn swatch_table(palette: &Palette, table: Table) -> (Vec<Labeled>, Option<Vec<Labeled>>) {
    let by_role = |indices: &[usize]| {
        indices
            .iter()
            .map(|&i| Labeled {
                label: Role::of_index(i).map_or_else(|| i.to_string(), |r| r.key().to_owned()),
                hex: palette.hex(i),
            })
            .collect::<Vec<_>>()
    };
    let by_name = |indices: &[usize], names: &[&str]| {
        indices
            .iter()
            .zip(names)
            .map(|(&i, name)| Labeled {
                label: name.to_string(),
                hex: palette.hex(i),
            })
            .collect::<Vec<_>>()
    };

    match table {
        Table::Text => (by_role(&TEXT_GREYS), Some(by_role(&TEXT_COLORS))),
        Table::Greys => (by_role(&UI_GREYS), Some(by_role(&MANUAL_GREYS))),
        Table::Ansi => (
            by_name(&ANSI[..8], &ANSI_NAMES[..8]),
            Some(by_name(&ANSI[8..], &ANSI_NAMES[8..])),
        ),
        Table::Rainbow => (by_name(&RAINBOW, &RAINBOW_NAMES), None),
    }
}
