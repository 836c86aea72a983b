//! # Interior Style System
//!
//! Each style is a fixed, deterministic color-grading recipe built from a
//! handful of shared pixel operations (see [`ops`]).
//!
//! ## Built-in Styles
//!
//! - **Modern**: every channel lifted 20%, 3×3 Gaussian blur
//! - **Traditional**: red down, green and blue up, 5×5 Gaussian blur
//! - **Industrial**: grayscale with a steel-blue cast
//! - **Scandinavian**: auto-contrast, then a brightness lift
//! - **Bohemian**: warm red boost, 3×3 Gaussian blur
//! - **Minimalist**: saturation halved and value lifted in HSV
//!
//! ## Usage
//!
//! ```rust,no_run
//! use image::RgbImage;
//! use interior_styler::styles::{transform, StyleId};
//!
//! let room = RgbImage::new(640, 480);
//! let styled = transform(&room, StyleId::Scandinavian);
//! assert_eq!(styled.dimensions(), room.dimensions());
//! ```

pub mod id;
pub mod ops;
pub mod registry;
pub mod traits;

// Style implementations
pub mod bohemian;
pub mod industrial;
pub mod minimalist;
pub mod modern;
pub mod scandinavian;
pub mod traditional;

use image::RgbImage;

// Re-exports for convenience
pub use id::StyleId;
pub use registry::StyleRegistry;
pub use traits::{Style, StyleMetadata};

// Re-export all built-in styles
pub use bohemian::BohemianStyle;
pub use industrial::IndustrialStyle;
pub use minimalist::MinimalistStyle;
pub use modern::ModernStyle;
pub use scandinavian::ScandinavianStyle;
pub use traditional::TraditionalStyle;

/// Apply a style to an image, returning a new image of the same size
pub fn transform(image: &RgbImage, style: StyleId) -> RgbImage {
    registry::builtin(style).apply(image)
}
