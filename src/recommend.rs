//! Furniture suggestions, palette swatches and space tips for a room.

use std::ops::RangeInclusive;

use image::{Rgb, RgbImage};
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{ColorPalette, FurnitureCatalog, PaletteColor},
    error::{RecommendError, Result},
    styles::StyleId,
};

/// Side of a furniture suggestion swatch
pub const SUGGESTION_SWATCH: u32 = 150;

/// Side of a palette swatch
pub const PALETTE_SWATCH: u32 = 100;

/// Room size in feet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDimensions {
    pub length_ft: u32,
    pub width_ft: u32,
}

impl RoomDimensions {
    pub const RANGE: RangeInclusive<u32> = 5..=50;

    pub fn new(length_ft: u32, width_ft: u32) -> Result<Self> {
        for (dimension, value) in [("length", length_ft), ("width", width_ft)] {
            if !Self::RANGE.contains(&value) {
                return Err(RecommendError::InvalidRoom {
                    dimension,
                    value,
                    min: *Self::RANGE.start(),
                    max: *Self::RANGE.end(),
                }
                .into());
            }
        }
        Ok(Self { length_ft, width_ft })
    }

    /// `"<length>x<width>"`
    pub fn label(&self) -> String {
        format!("{}x{}", self.length_ft, self.width_ft)
    }
}

impl Default for RoomDimensions {
    fn default() -> Self {
        Self {
            length_ft: 12,
            width_ft: 10,
        }
    }
}

/// Budget range in dollars
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRange {
    pub min: u32,
    pub max: u32,
}

impl BudgetRange {
    pub const RANGE: RangeInclusive<u32> = 500..=10_000;

    pub fn new(min: u32, max: u32) -> Result<Self> {
        if !Self::RANGE.contains(&min) || !Self::RANGE.contains(&max) || min > max {
            return Err(RecommendError::InvalidBudget {
                min,
                max,
                floor: *Self::RANGE.start(),
                ceiling: *Self::RANGE.end(),
            }
            .into());
        }
        Ok(Self { min, max })
    }
}

impl Default for BudgetRange {
    fn default() -> Self {
        Self { min: 1000, max: 5000 }
    }
}

/// A furniture item paired with the color it is shown in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub color: PaletteColor,
}

/// Everything shown to the user for one style and room
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub style: StyleId,
    pub vision: Option<String>,
    pub suggestions: Vec<Suggestion>,
    pub palette: Vec<PaletteColor>,
    pub tips: Vec<String>,
}

impl Recommendation {
    /// Build the recommendation sheet
    ///
    /// Every catalog item is paired with `palette[i mod len]`. The vision line
    /// only appears when `description` has non-whitespace content.
    pub fn build(
        catalog: &FurnitureCatalog,
        palette: &ColorPalette,
        style: StyleId,
        room: RoomDimensions,
        budget: BudgetRange,
        description: &str,
    ) -> Self {
        let description = description.trim();
        let vision = (!description.is_empty())
            .then(|| format!("Your vision: '{}' fits best with {} style.", description, style));

        let suggestions = catalog
            .items(style)
            .iter()
            .enumerate()
            .map(|(i, label)| Suggestion {
                label: label.clone(),
                color: palette.color_for(style, i).clone(),
            })
            .collect();

        let tips = vec![
            format!("Focus on essentials for a {} ft room", room.label()),
            format!("Budget range: ${} - ${}", budget.min, budget.max),
        ];

        Self {
            style,
            vision,
            suggestions,
            palette: palette.colors(style).to_vec(),
            tips,
        }
    }
}

/// Solid square swatch of a palette color
pub fn swatch(color: &PaletteColor, side: u32) -> RgbImage {
    RgbImage::from_pixel(side, side, Rgb(color.rgb.0))
}
