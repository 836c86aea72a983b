use image::RgbImage;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::{
    catalog::FurnitureCatalog,
    config::Config,
    error::Result,
    history::{DesignHistory, DesignRecord},
    overlay::{OverlayCompositor, Typeface},
    recommend::{BudgetRange, Recommendation, RoomDimensions},
    styles::{StyleId, StyleRegistry},
};

/// A finished design: the styled, annotated image and what was placed on it
#[derive(Debug, Clone)]
pub struct Design {
    pub style: StyleId,
    pub items: Vec<String>,
    pub image: RgbImage,
}

/// Turns a room photo into a styled design with furniture placeholders
///
/// The pipeline is built once per configuration:
/// 1. Validate the configuration and build the catalog tables
/// 2. Resolve the label typeface (outline font or built-in fallback)
/// 3. For every request, restyle the photo, then draw the placeholders
///
/// All per-request operations take `&self`, so one pipeline can serve many
/// images, including from several threads at once.
#[derive(Debug)]
pub struct DesignPipeline {
    styles: StyleRegistry,
    catalog: FurnitureCatalog,
    compositor: OverlayCompositor,
    slot_count: usize,
}

impl DesignPipeline {
    /// Create a pipeline from a configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let (catalog, palette) = config.catalog()?;

        let typeface = Typeface::resolve(&config.font);
        debug!("Label typeface: {}", typeface.family());

        let slot_count = config.overlay.slot_count;
        let compositor = OverlayCompositor::new(config.overlay, &config.font, palette, typeface)?;

        Ok(Self {
            styles: StyleRegistry::new(),
            catalog,
            compositor,
            slot_count,
        })
    }

    pub fn catalog(&self) -> &FurnitureCatalog {
        &self.catalog
    }

    pub fn compositor(&self) -> &OverlayCompositor {
        &self.compositor
    }

    /// Restyle the photo without drawing anything on it
    pub fn stylize(&self, image: &RgbImage, style: StyleId) -> RgbImage {
        self.styles.get(style).apply(image)
    }

    /// Restyle the photo and draw placeholders for `items`
    pub fn render(&self, image: &RgbImage, style: StyleId, items: &[String]) -> Design {
        info!(
            "🎨 Rendering {} design ({}x{}, {} items)",
            style,
            image.width(),
            image.height(),
            items.len()
        );

        let styled = self.stylize(image, style);
        let image = self.compositor.overlay(&styled, items, style);

        Design {
            style,
            items: items.iter().take(self.slot_count).cloned().collect(),
            image,
        }
    }

    /// Render with the style's own leading catalog items
    pub fn render_default(&self, image: &RgbImage, style: StyleId) -> Design {
        let items = self.catalog.first(style, self.slot_count);
        self.render(image, style, items)
    }

    /// Render every style with its default items, in parallel
    ///
    /// Results come back in [`StyleId::ALL`] order.
    pub fn render_all(&self, image: &RgbImage) -> Vec<Design> {
        info!("Rendering all {} styles", StyleId::ALL.len());
        StyleId::ALL
            .par_iter()
            .map(|&style| self.render_default(image, style))
            .collect()
    }

    /// Build the recommendation sheet for a style and room
    pub fn recommend(
        &self,
        style: StyleId,
        room: RoomDimensions,
        budget: BudgetRange,
        description: &str,
    ) -> Recommendation {
        Recommendation::build(&self.catalog, self.compositor.palette(), style, room, budget, description)
    }

    /// Store a finished design in `history`, returning its index
    pub fn save_design(
        &self,
        history: &mut DesignHistory,
        design: &Design,
        room: RoomDimensions,
        description: &str,
    ) -> Result<usize> {
        let record = DesignRecord::new(
            design.style,
            room,
            design.items.clone(),
            description.trim().to_string(),
            &design.image,
        )?;
        Ok(history.save(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlay::OverlaySlot;
    use crate::styles::transform;
    use image::Rgb;

    fn pipeline() -> DesignPipeline {
        let mut config = Config::default();
        config.font.system_fonts = false;
        DesignPipeline::new(config).unwrap()
    }

    fn room() -> RgbImage {
        RgbImage::from_fn(600, 400, |x, y| Rgb([(x % 256) as u8, (y % 256) as u8, 128]))
    }

    #[test]
    fn test_render_without_items_is_plain_transform() {
        let pipeline = pipeline();
        let image = room();

        for style in StyleId::ALL {
            let design = pipeline.render(&image, style, &[]);
            assert_eq!(design.image, transform(&image, style));
            assert!(design.items.is_empty());
        }
    }

    #[test]
    fn test_render_default_uses_leading_catalog_items() {
        let pipeline = pipeline();
        let design = pipeline.render_default(&room(), StyleId::Bohemian);

        assert_eq!(design.items, pipeline.catalog().first(StyleId::Bohemian, 3).to_vec());
        assert_eq!(design.image.dimensions(), (600, 400));
    }

    #[test]
    fn test_render_draws_over_styled_image() {
        let pipeline = pipeline();
        let image = room();
        let items = vec!["Lamp".to_string()];

        let styled = pipeline.stylize(&image, StyleId::Modern);
        let design = pipeline.render(&image, StyleId::Modern, &items);

        let slot = OverlaySlot::layout(600, 400)[0];
        let (px, py) = ((slot.x + 40) as u32, (slot.y + 70) as u32);
        assert_ne!(design.image.get_pixel(px, py), styled.get_pixel(px, py));
        assert_eq!(design.image.get_pixel(5, 5), styled.get_pixel(5, 5));
    }

    #[test]
    fn test_render_all_matches_sequential() {
        let pipeline = pipeline();
        let image = RgbImage::from_fn(90, 60, |x, y| Rgb([(x * 2) as u8, (y * 3) as u8, 70]));

        let designs = pipeline.render_all(&image);
        assert_eq!(designs.len(), 6);

        for (design, style) in designs.iter().zip(StyleId::ALL) {
            assert_eq!(design.style, style);
            assert_eq!(design.image, pipeline.render_default(&image, style).image);
        }
    }

    #[test]
    fn test_save_design() {
        let pipeline = pipeline();
        let mut history = DesignHistory::new();
        let design = pipeline.render_default(&RgbImage::from_pixel(60, 40, Rgb([90, 90, 90])), StyleId::Industrial);

        let index = pipeline
            .save_design(&mut history, &design, RoomDimensions::new(20, 15).unwrap(), "  loft  ")
            .unwrap();

        let record = history.get(index).unwrap();
        assert_eq!(record.style, StyleId::Industrial);
        assert_eq!(record.dimensions_label(), "20x15");
        assert_eq!(record.description, "loft");
        assert_eq!(record.furniture, design.items);
        assert_eq!(record.decode_image().unwrap(), design.image);
    }

    #[test]
    fn test_recommend_uses_configured_tables() {
        let pipeline = pipeline();
        let rec = pipeline.recommend(
            StyleId::Traditional,
            RoomDimensions::default(),
            BudgetRange::default(),
            "",
        );
        assert_eq!(rec.suggestions.len(), pipeline.catalog().items(StyleId::Traditional).len());
    }
}
