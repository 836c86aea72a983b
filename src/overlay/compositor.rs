use image::{Rgb, RgbImage, Rgba, RgbaImage};

use crate::{
    catalog::{parse_hex_color, ColorPalette, PaletteColor},
    config::{FontConfig, OverlayConfig},
    error::Result,
    overlay::{
        shapes::{draw_rounded_rect, RoundedRect},
        OverlaySlot, Typeface,
    },
    styles::StyleId,
};

/// One placeholder to draw: where, what, and in which color
#[derive(Debug, Clone, PartialEq)]
pub struct Placement<'a> {
    pub index: usize,
    pub slot: OverlaySlot,
    pub label: &'a str,
    pub color: &'a PaletteColor,
}

/// Draws translucent, labeled furniture placeholders over an image
#[derive(Debug)]
pub struct OverlayCompositor {
    config: OverlayConfig,
    palette: ColorPalette,
    typeface: Typeface,
    font_size: f32,
    text_color: Rgba<u8>,
}

impl OverlayCompositor {
    /// Create a compositor from validated settings and an already-resolved typeface
    pub fn new(config: OverlayConfig, font: &FontConfig, palette: ColorPalette, typeface: Typeface) -> Result<Self> {
        let Rgb([r, g, b]) = parse_hex_color("overlay.text_color", &config.text_color)?;
        Ok(Self {
            config,
            palette,
            typeface,
            font_size: font.size,
            text_color: Rgba([r, g, b, u8::MAX]),
        })
    }

    pub fn typeface(&self) -> &Typeface {
        &self.typeface
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Decide which items get drawn where
    ///
    /// Only the first `slot_count` items are placed; the rest are ignored.
    /// Item `i` takes palette color `i mod palette_len`.
    pub fn plan<'a>(&'a self, width: u32, height: u32, items: &'a [String], style: StyleId) -> Vec<Placement<'a>> {
        let slots = OverlaySlot::layout(width, height);

        items
            .iter()
            .zip(slots.into_iter().take(self.config.slot_count))
            .enumerate()
            .map(|(index, (label, slot))| Placement {
                index,
                slot,
                label: label.as_str(),
                color: self.palette.color_for(style, index),
            })
            .collect()
    }

    /// Render only the placeholder layer, transparent everywhere else
    pub fn render_layer(&self, width: u32, height: u32, items: &[String], style: StyleId) -> RgbaImage {
        let mut layer = RgbaImage::new(width, height);

        for placement in self.plan(width, height, items, style) {
            let slot = placement.slot;
            let rect = RoundedRect {
                x: slot.x,
                y: slot.y,
                width: slot.side,
                height: slot.side,
                radius: self.config.corner_radius,
            };

            draw_rounded_rect(
                &mut layer,
                &rect,
                placement.color.with_alpha(self.config.fill_alpha),
                placement.color.with_alpha(u8::MAX),
                self.config.border_width,
            );

            self.typeface.draw_text(
                &mut layer,
                self.text_color,
                slot.x + self.config.label_inset as i64,
                slot.y + slot.side as i64 / 3,
                self.font_size,
                placement.label,
            );
        }

        layer
    }

    /// Draw placeholders for `items` over `image`, returning a new image of the same size
    pub fn overlay(&self, image: &RgbImage, items: &[String], style: StyleId) -> RgbImage {
        let layer = self.render_layer(image.width(), image.height(), items, style);
        composite_over(image, &layer)
    }
}

/// Source-over blend of `layer` onto an opaque `base`
///
/// `out = layer * a + base * (1 - a)` per channel, rounded. Fully transparent
/// layer pixels leave the base untouched.
pub fn composite_over(base: &RgbImage, layer: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(base.width(), base.height(), |x, y| {
        let bottom = base.get_pixel(x, y).0;
        let Rgba([r, g, b, a]) = *layer.get_pixel(x, y);

        match a {
            0 => Rgb(bottom),
            u8::MAX => Rgb([r, g, b]),
            _ => {
                let alpha = a as u32;
                let mix = |top: u8, under: u8| {
                    ((top as u32 * alpha + under as u32 * (255 - alpha) + 127) / 255) as u8
                };
                Rgb([mix(r, bottom[0]), mix(g, bottom[1]), mix(b, bottom[2])])
            }
        }
    })
}
