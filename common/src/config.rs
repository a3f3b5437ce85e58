use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::color::OkLch;

const CONFIG_FILE: &str = "palette.toml";

/// Parameters the palette is derived from.
///
/// The grey ramp runs from the darkest text color (`BLACK`) to the
/// background (`WHITE`), so the palette targets light backgrounds.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct PaletteConfig {
    pub grey_hue: f64,
    pub grey_chroma: f64,
    pub greys: Vec<f64>,

    pub dark: LevelConfig,
    pub bright: LevelConfig,
    pub manual: Vec<OkLch<f64>>,
}

/// One lightness level of chroma-maximized colors.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LevelConfig {
    pub lightness: f64,
    pub n_magenta: usize,
    pub n_cyan: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shifts: Option<Vec<f64>>,
}

impl PaletteConfig {
    /// `<config dir>/vakio/palette.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("vakio").join(CONFIG_FILE))
    }

    /// An explicit `path` must load. Without one the default file is read
    /// through [`load_or_default`](Self::load_or_default).
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                Self::load(path).with_context(|| format!("Invalid config {}", path.display()))
            }
            None => Ok(match Self::default_path() {
                Some(path) => Self::load_or_default(&path),
                None => {
                    warn!("No config directory on this platform, using defaults");
                    Self::default()
                }
            }),
        }
    }

    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                warn!("Failed to load config, using defaults: {err:#}");
                PaletteConfig::default()
            }
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        Ok(if path.exists() {
            let string = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let config = toml::from_str(&string)?;
            info!("Loaded palette config from {}", path.display());
            config
        } else {
            info!("No config file at {}, using defaults", path.display());
            Self::default()
        })
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let string = toml::to_string(self)?;
        fs::write(path, string)?;
        Ok(())
    }
}

impl LevelConfig {
    pub fn color_count(&self) -> usize {
        3 + self.n_magenta + self.n_cyan
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            grey_hue: 250.0,
            grey_chroma: 3.0,
            greys: vec![
                0.24,  // black
                0.33,  // almost black
                0.42,  // dark grey
                0.58,  // bright grey
                0.70,  // subtle grey
                0.80,  // ui light greys
                0.85,
                0.89,
                0.92,
                0.95,  // crust
                0.975, // mantle
                1.0,   // white
            ],

            dark: LevelConfig {
                lightness: 0.48,
                n_magenta: 1,
                n_cyan: 1,
                shifts: None,
            },
            bright: LevelConfig {
                lightness: 0.62,
                n_magenta: 2,
                n_cyan: 1,
                shifts: None,
            },
            manual: vec![
                OkLch::new(0.60, 160.0, 50.0),  // orange
                OkLch::new(0.68, 140.0, 88.0),  // yellow
                OkLch::new(0.64, 160.0, 140.0), // green
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{Arc, Mutex},
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Logs(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Logs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn toml_round_trip() {
        let config = PaletteConfig {
            bright: LevelConfig {
                shifts: Some(vec![0.0, 0.1, 0.0, -0.2, 0.0, 0.0]),
                ..PaletteConfig::default().bright
            },
            ..PaletteConfig::default()
        };

        let string = toml::to_string(&config).unwrap();
        let parsed: PaletteConfig = toml::from_str(&string).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn partial_files_use_defaults() {
        let parsed: PaletteConfig = toml::from_str("grey_chroma = 0.0").unwrap();
        assert_eq!(parsed.grey_chroma, 0.0);
        assert_eq!(parsed.greys, PaletteConfig::default().greys);
        assert_eq!(parsed.dark.color_count(), 5);
        assert_eq!(parsed.bright.color_count(), 6);
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("vakio-config-does-not-exist.toml");
        let config = PaletteConfig::load(&path).unwrap();
        assert_eq!(config, PaletteConfig::default());
    }

    #[test]
    fn broken_file_falls_back_with_warning() {
        let dir = std::env::temp_dir().join(format!("vakio-broken-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE);
        fs::write(&path, "greys = \"not a list\"").unwrap();

        let logs = Logs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let config = tracing::subscriber::with_default(subscriber, || {
            PaletteConfig::load_or_default(&path)
        });

        assert_eq!(config, PaletteConfig::default());
        let logs = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"), "{logs}");
        assert!(logs.contains("using defaults"), "{logs}");

        let err = PaletteConfig::resolve(Some(&path)).unwrap_err();
        assert!(format!("{err:#}").contains("Invalid config"), "{err:#}");

        fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn save_then_load() {
        let dir = std::env::temp_dir().join(format!("vakio-config-{}", std::process::id()));
        let path = dir.join(CONFIG_FILE);

        let mut config = PaletteConfig::default();
        config.dark.lightness = 0.45;
        config.save(&path).unwrap();

        assert_eq!(PaletteConfig::load(&path).unwrap(), config);
        fs::remove_dir_all(dir).unwrap();
    }
}
