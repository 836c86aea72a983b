use image::RgbImage;

use crate::styles::{
    ops::{gaussian_blur, scale_rgb, GaussianKernel},
    traits::StyleMetadata,
    Style, StyleId,
};

/// Warm red boost, green and blue held back
pub const CHANNEL_FACTORS: [f32; 3] = [1.1, 0.95, 0.9];

pub const BLUR_KERNEL: usize = 3;

/// Warm, earthy look
pub struct BohemianStyle {
    kernel: GaussianKernel,
}

impl BohemianStyle {
    pub fn new() -> Self {
        Self {
            kernel: GaussianKernel::new(BLUR_KERNEL),
        }
    }
}

impl Default for BohemianStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for BohemianStyle {
    fn id(&self) -> StyleId {
        StyleId::Bohemian
    }

    fn description(&self) -> &str {
        "Warm and earthy: red boosted, green and blue cooled off, light blur"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        let warmed = scale_rgb(image, CHANNEL_FACTORS);
        gaussian_blur(&warmed, &self.kernel)
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
    fn test_bohemian_warms_image() {
        let image = RgbImage::from_pixel(5, 5, Rgb([100, 100, 100]));
        let styled = BohemianStyle::new().apply(&image);

        let [r, g, b] = styled.get_pixel(2, 2).0;
        assert!(r > 100);
        assert!(g < 100);
        assert!(b < g);
    }
}
