use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    catalog::{self, default_tables, parse_hex_color, ColorPalette, FurnitureCatalog, StyleTable},
    error::{ConfigError, Result},
    styles::StyleId,
};

/// Main configuration for the Interior-Styler
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Placeholder drawing settings
    pub overlay: OverlayConfig,

    /// Label font settings
    pub font: FontConfig,

    /// Furniture and palette tables, keyed by style
    pub styles: BTreeMap<StyleId, StyleTable>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            overlay: OverlayConfig::default(),
            font: FontConfig::default(),
            styles: default_tables(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: path.display().to_string() })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            reason: e.message().to_string(),
        })?;
        config.validate()?;

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::InvalidValue {
            key: "config".to_string(),
            value: e.to_string(),
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.overlay.validate()?;
        self.font.validate()?;
        self.catalog()?;
        Ok(())
    }

    /// Build the typed furniture catalog and palette from the style tables
    pub fn catalog(&self) -> Result<(FurnitureCatalog, ColorPalette)> {
        catalog::load(&self.styles)
    }
}

/// Placeholder rectangle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    /// Maximum number of placeholders drawn
    pub slot_count: usize,

    /// Opacity of the rectangle fill (0-255)
    pub fill_alpha: u8,

    /// Corner radius in pixels
    pub corner_radius: u32,

    /// Outline width in pixels
    pub border_width: u32,

    /// Horizontal distance from the rectangle's left edge to the label
    pub label_inset: u32,

    /// Label color as `#RRGGBB`
    pub text_color: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            slot_count: crate::overlay::SLOT_COUNT,
            fill_alpha: 140,
            corner_radius: 15,
            border_width: 3,
            label_inset: 10,
            text_color: "#000000".to_string(),
        }
    }
}

impl OverlayConfig {
    fn validate(&self) -> Result<()> {
        if self.slot_count > crate::overlay::SLOT_COUNT {
            return Err(ConfigError::InvalidValue {
                key: "overlay.slot_count".to_string(),
                value: self.slot_count.to_string(),
            }
            .into());
        }

        parse_hex_color("overlay.text_color", &self.text_color)?;
        Ok(())
    }
}

/// Label font settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Explicit font file to try first
    pub path: Option<PathBuf>,

    /// Family names to look for among the system fonts, in order
    pub families: Vec<String>,

    /// Label size in pixels
    pub size: f32,

    /// Whether to search the system fonts at all
    pub system_fonts: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            families: vec![
                "Arial".to_string(),
                "Helvetica".to_string(),
                "DejaVu Sans".to_string(),
                "Liberation Sans".to_string(),
            ],
            size: 20.0,
            system_fonts: true,
        }
    }
}

impl FontConfig {
    /// Largest accepted label size in pixels
    pub const MAX_SIZE: f32 = 1000.0;

    fn validate(&self) -> Result<()> {
        if !(self.size.is_finite() && (1.0..=Self::MAX_SIZE).contains(&self.size)) {
            return Err(ConfigError::InvalidValue {
                key: "font.size".to_string(),
                value: self.size.to_string(),
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StylerError;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.styles.len(), 6);
    }

    #[test]
    fn test_config_roundtrip() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("test_config.toml");

        let original_config = Config::default();

        original_config.save_to_file(&file_path).unwrap();
        let loaded_config = Config::from_file(&file_path).unwrap();

        assert_eq!(original_config.overlay.fill_alpha, loaded_config.overlay.fill_alpha);
        assert_eq!(original_config.font.families, loaded_config.font.families);
        assert_eq!(original_config.styles, loaded_config.styles);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("partial.toml");
        std::fs::write(&file_path, "[overlay]\nfill_alpha = 200\n").unwrap();

        let config = Config::from_file(&file_path).unwrap();
        assert_eq!(config.overlay.fill_alpha, 200);
        assert_eq!(config.overlay.corner_radius, 15);
        assert_eq!(config.styles.len(), 6);
    }

    #[test]
    fn test_bad_hex_fails_at_load() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("bad_hex.toml");

        let mut config = Config::default();
        if let Some(table) = config.styles.get_mut(&StyleId::Modern) {
            table.palette[0].hex = "#XYZXYZ".to_string();
        }
        config.save_to_file(&file_path).unwrap();

        let err = Config::from_file(&file_path).unwrap_err();
        assert!(matches!(err, StylerError::Config(ConfigError::InvalidHexColor { .. })));
    }

    #[test]
    fn test_unknown_style_key_fails_to_parse() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("unknown_style.toml");
        std::fs::write(
            &file_path,
            "[styles.baroque]\nfurniture = [\"Gilded chair\"]\npalette = [{ hex = \"#FFD700\", name = \"Gold\" }]\n",
        )
        .unwrap();

        let err = Config::from_file(&file_path).unwrap_err();
        assert!(matches!(err, StylerError::Config(ConfigError::ParseFailed { .. })));
    }

    #[test]
    fn test_missing_file() {
        let err = Config::from_file("/no/such/config.toml").unwrap_err();
        assert!(matches!(err, StylerError::Config(ConfigError::FileNotFound { .. })));
    }

    #[test]
    fn test_invalid_overlay_values() {
        let mut config = Config::default();
        config.overlay.slot_count = 4;
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.overlay.text_color = "black".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.font.size = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_font_is_rejected() {
        let mut config = Config::default();
        config.font.size = FontConfig::MAX_SIZE;
        assert!(config.validate().is_ok());

        for size in [1001.0, 1e20, f32::INFINITY] {
            config.font.size = size;
            let err = config.validate().unwrap_err();
            assert!(
                matches!(err, StylerError::Config(ConfigError::InvalidValue { ref key, .. }) if key == "font.size"),
                "size {} should be rejected",
                size
            );
        }
    }
}
