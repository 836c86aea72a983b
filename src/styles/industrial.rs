use image::RgbImage;

use crate::styles::{
    ops::{luma, map_pixels, scale_sample},
    traits::StyleMetadata,
    Style, StyleId,
};

/// Multipliers applied to the gray level for the R, G and B outputs
pub const GRAY_FACTORS: [f32; 3] = [0.8, 0.9, 1.0];

/// Desaturated blue-gray look
pub struct IndustrialStyle;

impl IndustrialStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for IndustrialStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for IndustrialStyle {
    fn id(&self) -> StyleId {
        StyleId::Industrial
    }

    fn description(&self) -> &str {
        "Raw and cool: grayscale with a steel-blue cast"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        map_pixels(image, |[r, g, b]| {
            let gray = luma(r, g, b);
            [
                scale_sample(gray, GRAY_FACTORS[0]),
                scale_sample(gray, GRAY_FACTORS[1]),
                gray,
            ]
        })
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            channel_factors: Some(GRAY_FACTORS),
            blur_kernel: None,
            steps: vec!["grayscale", "scale_gray"],
        }
    }
}
