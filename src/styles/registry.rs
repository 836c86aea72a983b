use crate::error::StyleError;
use crate::styles::{
    BohemianStyle, IndustrialStyle, MinimalistStyle, ModernStyle, ScandinavianStyle, Style,
    StyleId, TraditionalStyle,
};

/// Build the implementation behind a style identifier
///
/// The match is exhaustive, so adding a `StyleId` variant without a style
/// to go with it is a compile error.
pub fn builtin(id: StyleId) -> Box<dyn Style> {
    match id {
        StyleId::Modern => Box::new(ModernStyle::new()),
        StyleId::Traditional => Box::new(TraditionalStyle::new()),
        StyleId::Industrial => Box::new(IndustrialStyle::new()),
        StyleId::Scandinavian => Box::new(ScandinavianStyle::new()),
        StyleId::Bohemian => Box::new(BohemianStyle::new()),
        StyleId::Minimalist => Box::new(MinimalistStyle::new()),
    }
}

/// Registry holding one instance of every built-in style
///
/// Styles are stateless, so a single registry can be shared across threads
/// and used for any number of images.
pub struct StyleRegistry {
    styles: Vec<Box<dyn Style>>,
}

impl StyleRegistry {
    /// Create a new style registry with all built-in styles
    pub fn new() -> Self {
        Self {
            styles: StyleId::ALL.into_iter().map(builtin).collect(),
        }
    }

    /// Get the style for an identifier
    pub fn get(&self, id: StyleId) -> &dyn Style {
        self.styles[id.index()].as_ref()
    }

    /// Get a style by its name, failing on anything outside the closed set
    pub fn get_by_name(&self, name: &str) -> Result<&dyn Style, StyleError> {
        let id: StyleId = name.parse()?;
        Ok(self.get(id))
    }

    /// Get all available style keys
    pub fn available_styles(&self) -> Vec<&'static str> {
        StyleId::ALL.iter().map(|id| id.key()).collect()
    }

    /// Iterate over every registered style in display order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Style> {
        self.styles.iter().map(|s| s.as_ref())
    }

    /// Get the number of registered styles
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl std::fmt::Debug for StyleRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter().map(|s| s.id())).finish()
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}
