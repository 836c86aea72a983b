use thiserror::Error;

use crate::styles::StyleId;

/// Main error type for the Interior-Styler library
#[derive(Error, Debug)]
pub enum StylerError {
    #[error("Style error: {0}")]
    Style(#[from] StyleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Design history error: {0}")]
    History(#[from] HistoryError),

    #[error("Recommendation error: {0}")]
    Recommend(#[from] RecommendError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Style-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    #[error("Unknown style: {name}")]
    Unknown { name: String },

    #[error("No furniture listed for style {style}")]
    EmptyCatalog { style: StyleId },

    #[error("No palette colors listed for style {style}")]
    EmptyPalette { style: StyleId },
}

/// Configuration-specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to parse configuration file: {path} ({reason})")]
    ParseFailed { path: String, reason: String },

    #[error("Invalid configuration value: {key} = {value}")]
    InvalidValue { key: String, value: String },

    #[error("Invalid hex color for {key}: {value:?} (expected #RRGGBB)")]
    InvalidHexColor { key: String, value: String },

    #[error("Missing required configuration: {key}")]
    MissingKey { key: String },

    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },
}

/// Design history errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Design #{index} does not exist (history holds {len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Failed to encode design image: {reason}")]
    EncodingFailed { reason: String },

    #[error("Failed to decode design image: {reason}")]
    DecodingFailed { reason: String },
}

/// Room and budget input errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Invalid room {dimension}: {value} ft (expected {min}-{max})")]
    InvalidRoom {
        dimension: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    #[error("Invalid budget ${min}-${max} (expected {floor} <= min <= max <= {ceiling})")]
    InvalidBudget { min: u32, max: u32, floor: u32, ceiling: u32 },
}

/// Convenience type alias for Results using StylerError
pub type Result<T> = std::result::Result<T, StylerError>;

impl StylerError {
    /// Whether the caller supplied something bad (as opposed to an environment failure)
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Style(_) | Self::Config(_) | Self::Recommend(_)
        )
    }

    /// Get a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Style(StyleError::Unknown { name }) => {
                let available: Vec<&str> = StyleId::ALL.iter().map(|s| s.key()).collect();
                format!(
                    "Style '{}' not found. Available styles: {}",
                    name,
                    available.join(", ")
                )
            }
            Self::Config(ConfigError::FileNotFound { path }) => {
                format!("Configuration file '{}' not found.", path)
            }
            Self::Config(ConfigError::InvalidHexColor { key, value }) => {
                format!("Color '{}' in {} is not a #RRGGBB hex color.", value, key)
            }
            Self::Image(e) => {
                format!("Could not read or write the image: {}. Supported formats are PNG and JPEG.", e)
            }
            _ => self.to_string(),
        }
    }
}
