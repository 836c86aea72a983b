use image::RgbImage;

use crate::styles::{
    ops::{hsv_to_rgb, map_pixels, rgb_to_hsv, scale_sample},
    traits::StyleMetadata,
    Style, StyleId,
};

pub const SATURATION_FACTOR: f32 = 0.5;
pub const VALUE_FACTOR: f32 = 1.1;

/// Washed-out, bright look
pub struct MinimalistStyle;

impl MinimalistStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for MinimalistStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for MinimalistStyle {
    fn id(&self) -> StyleId {
        StyleId::Minimalist
    }

    fn description(&self) -> &str {
        "Calm and pared back: saturation halved, value lifted"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        map_pixels(image, |rgb| {
            let [h, s, v] = rgb_to_hsv(rgb);
            hsv_to_rgb([
                h,
                scale_sample(s, SATURATION_FACTOR),
                scale_sample(v, VALUE_FACTOR),
            ])
        })
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            channel_factors: Some([1.0, SATURATION_FACTOR, VALUE_FACTOR]),
            blur_kernel: None,
            steps: vec!["rgb_to_hsv", "scale_hsv", "hsv_to_rgb"],
        }
    }
}
