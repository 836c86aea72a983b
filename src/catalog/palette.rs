use image::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, StyleError};
use crate::styles::StyleId;

/// Parse a `#RRGGBB` hex string into RGB bytes
///
/// `key` names the config entry the value came from and only shows up in errors.
pub fn parse_hex_color(key: &str, value: &str) -> Result<Rgb<u8>, ConfigError> {
    let invalid = || ConfigError::InvalidHexColor {
        key: key.to_string(),
        value: value.to_string(),
    };

    let digits = value.strip_prefix('#').ok_or_else(invalid)?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());
    Ok(Rgb([channel(0)?, channel(2)?, channel(4)?]))
}

/// One raw palette entry as it appears in configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// `#RRGGBB`
    pub hex: String,

    /// Display name, e.g. "Urban Gray"
    pub name: String,
}

impl PaletteEntry {
    pub fn new<H: Into<String>, N: Into<String>>(hex: H, name: N) -> Self {
        Self {
            hex: hex.into(),
            name: name.into(),
        }
    }
}

/// A validated palette color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteColor {
    pub rgb: Rgb<u8>,
    pub hex: String,
    pub name: String,
}

impl PaletteColor {
    /// Same color with an alpha channel attached
    pub fn with_alpha(&self, alpha: u8) -> image::Rgba<u8> {
        let [r, g, b] = self.rgb.0;
        image::Rgba([r, g, b, alpha])
    }
}

/// Per-style ordered color palettes
///
/// Every style has at least one color, so [`ColorPalette::color_for`] never fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorPalette {
    colors: Vec<Vec<PaletteColor>>,
}

impl ColorPalette {
    /// Validate raw entries for every style. Hex strings are parsed here, once,
    /// so a bad color is reported at load time rather than at draw time.
    pub fn from_entries<'a, I>(entries: I) -> Result<Self, crate::error::StylerError>
    where
        I: IntoIterator<Item = (StyleId, &'a [PaletteEntry])>,
    {
        let mut colors: Vec<Option<Vec<PaletteColor>>> = vec![None; StyleId::ALL.len()];

        for (style, raw) in entries {
            if raw.is_empty() {
                return Err(StyleError::EmptyPalette { style }.into());
            }

            let parsed = raw
                .iter()
                .enumerate()
                .map(|(i, entry)| {
                    let key = format!("styles.{}.palette[{}]", style.key(), i);
                    Ok(PaletteColor {
                        rgb: parse_hex_color(&key, &entry.hex)?,
                        hex: entry.hex.clone(),
                        name: entry.name.clone(),
                    })
                })
                .collect::<Result<Vec<_>, ConfigError>>()?;

            colors[style.index()] = Some(parsed);
        }

        let colors = StyleId::ALL
            .iter()
            .zip(colors)
            .map(|(style, slot)| {
                slot.ok_or_else(|| ConfigError::MissingKey {
                    key: format!("styles.{}.palette", style.key()),
                })
            })
            .collect::<Result<Vec<_>, ConfigError>>()?;

        Ok(Self { colors })
    }

    /// All colors for a style, in order
    pub fn colors(&self, style: StyleId) -> &[PaletteColor] {
        &self.colors[style.index()]
    }

    /// Color for the `index`-th item, cycling through the palette
    pub fn color_for(&self, style: StyleId, index: usize) -> &PaletteColor {
        let colors = self.colors(style);
        &colors[index % colors.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("k", "#FF5733").unwrap(), Rgb([255, 87, 51]));
        assert_eq!(parse_hex_color("k", "#3a86ff").unwrap(), Rgb([0x3A, 0x86, 0xFF]));
    }

    #[test]
    fn test_parse_hex_color_rejects_malformed() {
        for bad in ["FF5733", "#FF573", "#FF57331", "#GG5733", "", "#", "#+F5733"] {
            assert!(
                matches!(parse_hex_color("k", bad), Err(ConfigError::InvalidHexColor { .. })),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_palette_wraps_around() {
        let entries = vec![PaletteEntry::new("#000000", "Black"), PaletteEntry::new("#FFFFFF", "White")];
        let palette =
            ColorPalette::from_entries(StyleId::ALL.iter().map(|&s| (s, entries.as_slice()))).unwrap();

        assert_eq!(palette.color_for(StyleId::Modern, 2).name, "Black");
        assert_eq!(palette.color_for(StyleId::Modern, 3).name, "White");
    }

    #[test]
    fn test_palette_requires_every_style() {
        let entries = vec![PaletteEntry::new("#000000", "Black")];
        let result = ColorPalette::from_entries([(StyleId::Modern, entries.as_slice())]);
        assert!(result.is_err());
    }

    #[test]
    fn test_palette_rejects_empty_style() {
        let entries = vec![PaletteEntry::new("#000000", "Black")];
        let result = ColorPalette::from_entries(StyleId::ALL.iter().map(|&s| {
            if s == StyleId::Bohemian {
                (s, &entries[..0])
            } else {
                (s, entries.as_slice())
            }
        }));
        assert!(matches!(
            result,
            Err(crate::error::StylerError::Style(StyleError::EmptyPalette { style: StyleId::Bohemian }))
        ));
    }
}
