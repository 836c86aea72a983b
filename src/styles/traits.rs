use image::RgbImage;

use crate::styles::StyleId;

/// Core trait that all interior styles implement
pub trait Style: Send + Sync {
    /// The identifier this style answers to
    fn id(&self) -> StyleId;

    /// Returns the human-readable name of this style
    fn name(&self) -> &str {
        self.id().name()
    }

    /// Returns a short description of the look this style produces
    fn description(&self) -> &str;

    /// Apply the style's color grading to an image
    ///
    /// # Arguments
    ///
    /// * `image` - The source image; it is never modified
    ///
    /// # Returns
    ///
    /// A new image with the same dimensions as `image`.
    fn apply(&self, image: &RgbImage) -> RgbImage;

    /// Describe the operations this style performs, in order
    fn metadata(&self) -> StyleMetadata {
        StyleMetadata::default()
    }
}

/// Metadata about a style's processing steps
#[derive(Debug, Clone, Default)]
pub struct StyleMetadata {
    /// Per-channel multipliers, if the style has any
    ///
    /// They apply in the space of the step that uses them: R, G, B for
    /// `scale_rgb` and `brighten`, the gray level fanned out to R, G, B for
    /// `scale_gray`, and H, S, V for `scale_hsv`.
    pub channel_factors: Option<[f32; 3]>,

    /// Side length of the blur kernel, if the style blurs
    pub blur_kernel: Option<usize>,

    /// Ordered list of operation names
    pub steps: Vec<&'static str>,
}
