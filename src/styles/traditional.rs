use image::RgbImage;

use crate::styles::{
    ops::{gaussian_blur, scale_rgb, GaussianKernel},
    traits::StyleMetadata,
    Style, StyleId,
};

/// Red pulled down, green and blue pushed up
pub const CHANNEL_FACTORS: [f32; 3] = [0.9, 1.1, 1.1];

pub const BLUR_KERNEL: usize = 5;

/// Muted, softly focused look
pub struct TraditionalStyle {
    kernel: GaussianKernel,
}

impl TraditionalStyle {
    pub fn new() -> Self {
        Self {
            kernel: GaussianKernel::new(BLUR_KERNEL),
        }
    }
}

impl Default for TraditionalStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for TraditionalStyle {
    fn id(&self) -> StyleId {
        StyleId::Traditional
    }

    fn description(&self) -> &str {
        "Classic and muted: less red, more green and blue, with a wide soft blur"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        let graded = scale_rgb(image, CHANNEL_FACTORS);
        gaussian_blur(&graded, &self.kernel)
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            channel_factors: Some(CHANNEL_FACTORS),
            blur_kernel: Some(BLUR_KERNEL),
            steps: vec!["scale_rgb", "gaussian_blur"],
        }
    }
}
