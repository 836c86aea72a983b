use image::RgbImage;

use crate::styles::{
    ops::{gaussian_blur, scale_rgb, GaussianKernel},
    traits::StyleMetadata,
    Style, StyleId,
};

/// Uniform 20% lift on every channel
pub const CHANNEL_FACTORS: [f32; 3] = [1.2, 1.2, 1.2];

/// Light softening pass
pub const BLUR_KERNEL: usize = 3;

/// Bright, slightly softened look
pub struct ModernStyle {
    kernel: GaussianKernel,
}

impl ModernStyle {
    pub fn new() -> Self {
        Self {
            kernel: GaussianKernel::new(BLUR_KERNEL),
        }
    }
}

impl Default for ModernStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for ModernStyle {
    fn id(&self) -> StyleId {
        StyleId::Modern
    }

    fn description(&self) -> &str {
        "Clean and bright: every channel lifted, then a light blur"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        let lifted = scale_rgb(image, CHANNEL_FACTORS);
        gaussian_blur(&lifted, &self.kernel)
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            channel_factors: Some(CHANNEL_FACTORS),
            blur_kernel: Some(BLUR_KERNEL),
            steps: vec!["scale_rgb", "gaussian_blur"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_modern_brightens_flat_image() {
        let image = RgbImage::from_pixel(10, 8, Rgb([100, 150, 220]));
        let styled = ModernStyle::new().apply(&image);

        assert_eq!(styled.dimensions(), (10, 8));
        // Blur of a flat image is a no-op, so only the lift shows
        assert_eq!(styled.get_pixel(4, 4).0, [120, 180, 255]);
    }
}
