//! # Style Catalog
//!
//! Static per-style tables: the furniture labels suggested for a style and
//! the color palette used to draw its placeholders. Raw tables live in
//! configuration ([`StyleTable`]); [`load`] validates them into the typed
//! [`FurnitureCatalog`] and [`ColorPalette`] the rest of the crate uses.

pub mod furniture;
pub mod palette;
pub mod tables;

use std::collections::BTreeMap;

pub use furniture::FurnitureCatalog;
pub use palette::{parse_hex_color, ColorPalette, PaletteColor, PaletteEntry};
pub use tables::{default_tables, StyleTable};

use crate::error::Result;
use crate::styles::StyleId;

/// Validate raw tables into a catalog and palette
///
/// Fails if any style is missing, has an empty list, or carries a malformed
/// hex color.
pub fn load(tables: &BTreeMap<StyleId, StyleTable>) -> Result<(FurnitureCatalog, ColorPalette)> {
    let catalog = FurnitureCatalog::from_lists(
        tables.iter().map(|(&style, table)| (style, table.furniture.as_slice())),
    )?;
    let palette = ColorPalette::from_entries(
        tables.iter().map(|(&style, table)| (style, table.palette.as_slice())),
    )?;
    Ok((catalog, palette))
}
