use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StyleError;

/// The closed set of interior design styles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleId {
    Modern,
    Traditional,
    Industrial,
    Scandinavian,
    Bohemian,
    Minimalist,
}

impl StyleId {
    /// Every style, in display order
    pub const ALL: [StyleId; 6] = [
        StyleId::Modern,
        StyleId::Traditional,
        StyleId::Industrial,
        StyleId::Scandinavian,
        StyleId::Bohemian,
        StyleId::Minimalist,
    ];

    /// Lowercase key used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            StyleId::Modern => "modern",
            StyleId::Traditional => "traditional",
            StyleId::Industrial => "industrial",
            StyleId::Scandinavian => "scandinavian",
            StyleId::Bohemian => "bohemian",
            StyleId::Minimalist => "minimalist",
        }
    }

    /// Human-readable name
    pub fn name(self) -> &'static str {
        match self {
            StyleId::Modern => "Modern",
            StyleId::Traditional => "Traditional",
            StyleId::Industrial => "Industrial",
            StyleId::Scandinavian => "Scandinavian",
            StyleId::Bohemian => "Bohemian",
            StyleId::Minimalist => "Minimalist",
        }
    }

    /// Position in [`StyleId::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for StyleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StyleId {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        StyleId::ALL
            .into_iter()
            .find(|style| style.key().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StyleError::Unknown { name: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("Modern".parse::<StyleId>(), Ok(StyleId::Modern));
        assert_eq!(" scandinavian ".parse::<StyleId>(), Ok(StyleId::Scandinavian));
        assert_eq!("BOHEMIAN".parse::<StyleId>(), Ok(StyleId::Bohemian));
    }

    #[test]
    fn test_unknown_style_fails_fast() {
        let err = "art-deco".parse::<StyleId>().unwrap_err();
        assert_eq!(err, StyleError::Unknown { name: "art-deco".to_string() });
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, style) in StyleId::ALL.iter().enumerate() {
            assert_eq!(style.index(), i);
        }
    }
}
