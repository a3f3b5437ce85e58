use anyhow::Result;
use common::color::Hex;
use serde::{ser::SerializeMap, Serialize, Serializer};

use crate::{
    metadata::{Role, ANSI, ANSI_NAMES, RAINBOW, RAINBOW_NAMES},
    palette::Palette,
};

/// Name to color pairs that serialize as a map in insertion order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NamedColors(pub Vec<(String, Hex)>);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteExport {
    pub semantic: NamedColors,
    pub ansi: NamedColors,
    pub rainbow: NamedColors,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Toml,
}

/// The palette keyed by semantic role.
pub fn with_semantic_keys(palette: &Palette) -> NamedColors {
    NamedColors(
        Role::ALL
            .iter()
            .map(|role| (role.key().to_owned(), palette.role(*role).hex))
            .collect(),
    )
}

impl PaletteExport {
    pub fn new(palette: &Palette) -> Self {
        Self {
            semantic: with_semantic_keys(palette),
            ansi: named(palette, &ANSI, &ANSI_NAMES),
            rainbow: named(palette, &RAINBOW, &RAINBOW_NAMES),
        }
    }
}

impl ExportFormat {
    pub fn render(&self, export: &PaletteExport) -> Result<String> {
        Ok(match self {
            ExportFormat::Json => serde_json::to_string_pretty(export)?,
            ExportFormat::Toml => toml::to_string(export)?,
        })
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Toml => "toml",
        }
    }
}

impl NamedColors {
    pub fn get(&self, name: &str) -> Option<Hex> {
        self.0.iter().find(|(key, _)| key == name).map(|(_, hex)| *hex)
    }
}

impl Serialize for NamedColors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, hex) in &self.0 {
            map.serialize_entry(name, hex)?;
        }
        map.end()
    }
}

fn named(palette: &Palette, indices: &[usize], names: &[&str]) -> NamedColors {
    NamedColors(
        indices
            .iter()
            .zip(names)
            .map(|(&i, name)| (name.to_string(), palette.hex(i)))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use common::config::PaletteConfig;

    use super::*;
    use crate::{create_palette, metadata::WHITE};

    fn export() -> PaletteExport {
        let palette = create_palette(&PaletteConfig::default()).unwrap();
        PaletteExport::new(&palette)
    }

    #[test]
    fn semantic_keys_in_role_order() {
        let export = export();
        let keys = export.semantic.0.iter().map(|(k, _)| k.as_str()).collect::<Vec<_>>();
        assert_eq!(keys.len(), Role::ALL.len());
        assert_eq!(&keys[..3], &["text", "labels", "params"]);
        assert_eq!(keys.last(), Some(&"subtext1"));
    }

    #[test]
    fn ansi_white_is_background() {
        let export = export();
        let palette = create_palette(&PaletteConfig::default()).unwrap();
        assert_eq!(export.ansi.get("Bright White"), Some(palette.hex(WHITE)));
        assert_eq!(export.ansi.0.len(), 16);
        assert_eq!(export.rainbow.0.len(), 6);
    }

    #[test]
    fn json_preserves_order() {
        let json = ExportFormat::Json.render(&export()).unwrap();
        let text = json.find("\"text\"").unwrap();
        let base = json.find("\"base\"").unwrap();
        assert!(text < base);

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["semantic"]["base"], "#ffffff");
    }

    #[test]
    fn toml_is_parseable() {
        let string = ExportFormat::Toml.render(&export()).unwrap();
        let value: toml::Table = toml::from_str(&string).unwrap();
        assert_eq!(value["ansi"]["Bright White"].as_str(), Some("#ffffff"));
        assert_eq!(value["rainbow"].as_table().map(|t| t.len()), Some(6));
    }
}
