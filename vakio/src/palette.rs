use std::ops::Index;

use anyhow::{ensure, Context, Result};
use common::{
    color::{Hex, OkLch},
    config::{LevelConfig, PaletteConfig},
};
use tracing::{debug, info};

use crate::{
    alg::{clamp, generate},
    metadata::{Role, BRIGHT_COLORS, DARK_COLORS, GREYS, MANUAL_COLORS, PALETTE_SIZE},
};

/// The derived colors, indexed as laid out in [`metadata`](crate::metadata).
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<OkLch<f64>>,
}

/// A palette entry together with its 8-bit rendition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Swatch {
    pub index: usize,
    pub color: OkLch<f64>,
    pub hex: Hex,
}

/// Derives the palette described by `config`.
pub fn create_palette(config: &PaletteConfig) -> Result<Palette> {
    validate(config)?;

    let mut colors = Vec::with_capacity(PALETTE_SIZE);
    colors.extend(
        config
            .greys
            .iter()
            .map(|&l| grey(l, config.grey_chroma, config.grey_hue)),
    );
    colors.extend(level(&config.dark).context("Failed to generate dark colors")?);
    colors.extend(level(&config.bright).context("Failed to generate bright colors")?);
    colors.extend(config.manual.iter().map(|&color| clamp(color)));

    info!("Created palette with {} colors", colors.len());
    Ok(Palette { colors })
}

impl Palette {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn hex(&self, index: usize) -> Hex {
        self.colors[index].to_hex()
    }

    pub fn swatch(&self, index: usize) -> Swatch {
        Swatch {
            index,
            color: self.colors[index],
            hex: self.hex(index),
        }
    }

    pub fn role(&self, role: Role) -> Swatch {
        self.swatch(role.index())
    }

    /// Swatches of a group of indices, e.g. [`GREYS`].
    pub fn select(&self, indices: &[usize]) -> Vec<Swatch> {
        indices.iter().map(|&i| self.swatch(i)).collect()
    }

    pub fn swatches(&self) -> impl Iterator<Item = Swatch> + '_ {
        (0..self.len()).map(|i| self.swatch(i))
    }
}

impl Index<usize> for Palette {
    type Output = OkLch<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.colors[index]
    }
}

fn validate(config: &PaletteConfig) -> Result<()> {
    ensure!(
        config.greys.len() == GREYS.len(),
        "Expected {} grey lightness values, got {}",
        GREYS.len(),
        config.greys.len()
    );
    ensure!(
        config.greys.windows(2).all(|w| w[0] < w[1]),
        "Grey lightness values must be strictly increasing"
    );
    ensure!(
        config.greys.iter().all(|&l| l > 0.0 && l <= 1.0),
        "Grey lightness values must be within (0, 1]"
    );
    ensure!(
        config.dark.color_count() == DARK_COLORS.len(),
        "Dark level must produce {} colors, but n_magenta + n_cyan = {}",
        DARK_COLORS.len(),
        config.dark.n_magenta + config.dark.n_cyan
    );
    ensure!(
        config.bright.color_count() == BRIGHT_COLORS.len(),
        "Bright level must produce {} colors, but n_magenta + n_cyan = {}",
        BRIGHT_COLORS.len(),
        config.bright.n_magenta + config.bright.n_cyan
    );
    ensure!(
        config.manual.len() == MANUAL_COLORS.len(),
        "Expected {} manual colors, got {}",
        MANUAL_COLORS.len(),
        config.manual.len()
    );
    ensure!(
        config.manual.iter().all(|c| c.l > 0.0 && c.l < 1.0),
        "Manual colors must have lightness within (0, 1)"
    );
    Ok(())
}

fn level(config: &LevelConfig) -> Result<Vec<OkLch<f64>>> {
    debug!(lightness = config.lightness, "Generating level");
    generate(
        config.lightness,
        config.n_magenta,
        config.n_cyan,
        config.shifts.as_deref(),
    )
}

/// Pure white has no chroma to spare, so the tint is dropped there.
fn grey(l: f64, chroma: f64, hue: f64) -> OkLch<f64> {
    if l >= 1.0 || chroma <= 0.0 {
        OkLch::new(l, 0.0, 0.0)
    } else {
        clamp(OkLch::new(l, chroma, hue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::{MANUAL_GREYS, TEXT_GREYS, UI_GREYS, UI_LIGHT_GREYS};

    fn assert_grey_order(palette: &Palette, indices: &[usize]) {
        let lightness = palette
            .select(indices)
            .iter()
            .map(|swatch| swatch.hex.to_oklch().l)
            .collect::<Vec<_>>();
        assert!(
            lightness.windows(2).all(|w| w[0] < w[1]),
            "{indices:?}: {lightness:?}"
        );
    }

    #[test]
    fn grey_order() {
        let palette = create_palette(&PaletteConfig::default()).unwrap();
        assert_eq!(palette.len(), PALETTE_SIZE);

        assert_grey_order(&palette, &GREYS);
        assert_grey_order(&palette, &UI_LIGHT_GREYS);
        assert_grey_order(&palette, &MANUAL_GREYS);
        assert_grey_order(&palette, &UI_GREYS);
        assert_grey_order(&palette, &TEXT_GREYS);
    }

    #[test]
    fn every_color_in_gamut() {
        let palette = create_palette(&PaletteConfig::default()).unwrap();
        for swatch in palette.swatches().filter(|s| s.color.l < 1.0) {
            assert!(swatch.color.in_gamut(), "{swatch:?}");
        }
        assert_eq!(palette.role(Role::Base).hex.to_string(), "#ffffff");
    }

    #[test]
    fn levels_are_at_their_lightness() {
        let config = PaletteConfig::default();
        let palette = create_palette(&config).unwrap();
        for i in DARK_COLORS {
            assert_eq!(palette[i].l, config.dark.lightness);
        }
        for i in BRIGHT_COLORS {
            assert_eq!(palette[i].l, config.bright.lightness);
        }
    }

    #[test]
    fn rejects_invalid_configs() {
        let mut config = PaletteConfig::default();
        config.greys.swap(0, 1);
        assert!(create_palette(&config).is_err());

        let mut config = PaletteConfig::default();
        config.dark.n_cyan = 2;
        assert!(create_palette(&config).is_err());

        let mut config = PaletteConfig::default();
        config.manual.pop();
        assert!(create_palette(&config).is_err());

        let mut config = PaletteConfig::default();
        config.bright.lightness = 0.9;
        let err = create_palette(&config).unwrap_err();
        assert!(format!("{err:#}").contains("bright"));
    }
}
