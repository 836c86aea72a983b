use image::RgbImage;

use crate::styles::{
    ops::{autocontrast, brighten},
    traits::StyleMetadata,
    Style, StyleId,
};

pub const BRIGHTNESS: f32 = 1.3;

/// Airy, high-key look
pub struct ScandinavianStyle;

impl ScandinavianStyle {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ScandinavianStyle {
    fn default() -> Self {
        Self::new()
    }
}

impl Style for ScandinavianStyle {
    fn id(&self) -> StyleId {
        StyleId::Scandinavian
    }

    fn description(&self) -> &str {
        "Light and airy: full-range contrast, then a strong brightness lift"
    }

    fn apply(&self, image: &RgbImage) -> RgbImage {
        brighten(&autocontrast(image), BRIGHTNESS)
    }

    fn metadata(&self) -> StyleMetadata {
        StyleMetadata {
            channel_factors: Some([BRIGHTNESS; 3]),
            blur_kernel: None,
            steps: vec!["autocontrast", "brighten"],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn mean(image: &RgbImage) -> f64 {
        let raw = image.as_raw();
        raw.iter().map(|&v| v as f64).sum::<f64>() / raw.len() as f64
    }

    #[test]
    fn test_scandinavian_brightens_dark_room() {
        let image = RgbImage::from_pixel(100, 100, Rgb([50, 50, 50]));
        let styled = ScandinavianStyle::new().apply(&image);

        assert!(mean(&styled) > mean(&image));
        assert_eq!(styled.get_pixel(0, 0).0, [65, 65, 65]);
    }

    #[test]
    fn test_scandinavian_stretches_then_clips() {
        let image = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([40; 3]) } else { Rgb([140; 3]) });
        let styled = ScandinavianStyle::new().apply(&image);

        assert_eq!(styled.get_pixel(0, 0).0, [0; 3]);
        assert_eq!(styled.get_pixel(1, 0).0, [255; 3]);
    }
}
