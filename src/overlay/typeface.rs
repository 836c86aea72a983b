//! Label typeface acquisition and drawing.
//!
//! Acquisition is two-tier: first a named outline font (an explicit file, or
//! a family looked up among the system fonts), then the embedded 8×8 bitmap
//! font, which is always available. Failure of the first tier is logged and
//! never surfaced.

use std::fmt;
use std::path::Path;

use ab_glyph::{FontVec, PxScale};
use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};
use image::{Rgba, RgbaImage};
use tracing::{debug, info, warn};

use crate::config::FontConfig;

/// Side of one bitmap glyph cell, in font units
const CELL: i64 = 8;

/// Font used to draw placeholder labels
pub enum Typeface {
    /// A proportional outline font
    Outline { font: FontVec, family: String },

    /// The embedded fixed-width bitmap font
    Builtin,
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::Outline { family, .. } => f.debug_struct("Outline").field("family", family).finish(),
            Typeface::Builtin => f.write_str("Builtin"),
        }
    }
}

impl Typeface {
    /// Acquire the best available typeface. Never fails.
    pub fn resolve(config: &FontConfig) -> Self {
        if let Some(path) = &config.path {
            match load_font_file(path) {
                Ok(font) => {
                    info!("Using label font from {:?}", path);
                    return Typeface::Outline {
                        font,
                        family: path.display().to_string(),
                    };
                }
                Err(reason) => warn!("Could not load font {:?}: {}", path, reason),
            }
        }

        if config.system_fonts && !config.families.is_empty() {
            if let Some((font, family)) = find_system_font(&config.families) {
                info!("Using system font '{}' for labels", family);
                return Typeface::Outline { font, family };
            }
            debug!("None of {:?} found among system fonts", config.families);
        }

        debug!("Falling back to the built-in bitmap font");
        Typeface::Builtin
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin)
    }

    /// Name of the font family in use
    pub fn family(&self) -> &str {
        match self {
            Typeface::Outline { family, .. } => family,
            Typeface::Builtin => "builtin-8x8",
        }
    }

    /// Draw `text` with its top-left corner at `(x, y)`, clipped to the canvas
    pub fn draw_text(&self, canvas: &mut RgbaImage, color: Rgba<u8>, x: i64, y: i64, size: f32, text: &str) {
        match self {
            Typeface::Outline { font, .. } => {
                imageproc::drawing::draw_text_mut(
                    canvas,
                    color,
                    x as i32,
                    y as i32,
                    PxScale::from(size),
                    font,
                    text,
                );
            }
            Typeface::Builtin => draw_bitmap_text(canvas, color, x, y, size, text),
        }
    }
}

fn load_font_file(path: &Path) -> Result<FontVec, String> {
    let data = std::fs::read(path).map_err(|e| e.to_string())?;
    FontVec::try_from_vec(data).map_err(|e| e.to_string())
}

fn find_system_font(families: &[String]) -> Option<(FontVec, String)> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    debug!("Loaded {} system font faces", db.len());

    let wanted: Vec<fontdb::Family> = families.iter().map(|f| fontdb::Family::Name(f.as_str())).collect();
    let query = fontdb::Query {
        families: &wanted,
        ..fontdb::Query::default()
    };

    let id = db.query(&query)?;
    let family = db
        .face(id)
        .and_then(|face| face.families.first().map(|(name, _)| name.clone()))
        .unwrap_or_else(|| "unknown".to_string());

    let font = db.with_face_data(id, |data, index| FontVec::try_from_vec_and_index(data.to_vec(), index))?;
    match font {
        Ok(font) => Some((font, family)),
        Err(e) => {
            warn!("System font '{}' could not be parsed: {}", family, e);
            None
        }
    }
}

/// Render with the 8×8 bitmap font, scaled by whole pixels to roughly `size`.
/// Characters without a glyph (emoji, pictographs) are skipped.
fn draw_bitmap_text(canvas: &mut RgbaImage, color: Rgba<u8>, x: i64, y: i64, size: f32, text: &str) {
    let scale = ((size / CELL as f32).floor() as i64).max(1);
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);
    let mut pen_x = x;

    for ch in text.trim_start().chars() {
        let Some(rows) = BASIC_FONTS.get(ch).or_else(|| LATIN_FONTS.get(ch)) else {
            continue;
        };

        for (row, bits) in rows.iter().enumerate() {
            for col in 0..CELL {
                if bits & (1 << col) == 0 {
                    continue;
                }
                let left = pen_x.saturating_add(col.saturating_mul(scale));
                let top = y.saturating_add((row as i64).saturating_mul(scale));
                for py in top.max(0)..top.saturating_add(scale).min(height) {
                    for px in left.max(0)..left.saturating_add(scale).min(width) {
                        canvas.put_pixel(px as u32, py as u32, color);
                    }
                }
            }
        }
        pen_x = pen_x.saturating_add(CELL.saturating_mul(scale));
        if pen_x >= width {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn unavailable_font() -> FontConfig {
        FontConfig {
            path: Some(PathBuf::from("/definitely/not/here/arial.ttf")),
            families: vec!["No Such Family 7f3a".to_string()],
            size: 20.0,
            system_fonts: true,
        }
    }

    #[test]
    fn test_missing_font_falls_back_to_builtin() {
        let typeface = Typeface::resolve(&unavailable_font());
        assert!(typeface.is_builtin());
        assert_eq!(typeface.family(), "builtin-8x8");
    }

    #[test]
    fn test_corrupt_font_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.ttf");
        std::fs::write(&path, b"not a font").unwrap();

        let config = FontConfig {
            path: Some(path),
            system_fonts: false,
            ..FontConfig::default()
        };
        assert!(Typeface::resolve(&config).is_builtin());
    }

    #[test]
    fn test_builtin_draws_ascii() {
        let mut canvas = RgbaImage::new(40, 20);
        Typeface::Builtin.draw_text(&mut canvas, Rgba([0, 0, 0, 255]), 2, 2, 16.0, "Hi");

        let inked = canvas.pixels().filter(|p| p.0[3] == 255).count();
        assert!(inked > 0);
    }

    #[test]
    fn test_builtin_huge_size_does_not_overflow() {
        let mut canvas = RgbaImage::new(30, 30);
        Typeface::Builtin.draw_text(&mut canvas, Rgba([0, 0, 0, 255]), 5, 5, 1e20, "Sofa");
        Typeface::Builtin.draw_text(&mut canvas, Rgba([0, 0, 0, 255]), i64::MAX - 4, 5, 64.0, "Sofa");
        assert_eq!(canvas.dimensions(), (30, 30));
    }

    #[test]
    fn test_builtin_skips_missing_glyphs_and_clips() {
        let mut canvas = RgbaImage::new(10, 10);
        Typeface::Builtin.draw_text(&mut canvas, Rgba([0, 0, 0, 255]), -4, 6, 20.0, "🛋 Sleek sofa");
        assert_eq!(canvas.dimensions(), (10, 10));

        let mut blank = RgbaImage::new(10, 10);
        Typeface::Builtin.draw_text(&mut blank, Rgba([0, 0, 0, 255]), 0, 0, 8.0, "🛋🪞");
        assert!(blank.pixels().all(|p| p.0[3] == 0));
    }
}
