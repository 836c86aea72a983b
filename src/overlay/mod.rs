//! # Furniture Overlay
//!
//! Draws up to three translucent, rounded placeholder squares at fixed
//! positions along an image's vertical midline, each tagged with a furniture
//! label and tinted from the style's palette.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use image::RgbImage;
//! use interior_styler::{config::Config, overlay::{OverlayCompositor, Typeface}, styles::StyleId};
//!
//! # fn main() -> interior_styler::Result<()> {
//! let config = Config::default();
//! let (catalog, palette) = config.catalog()?;
//! let typeface = Typeface::resolve(&config.font);
//! let compositor = OverlayCompositor::new(config.overlay.clone(), &config.font, palette, typeface)?;
//!
//! let room = RgbImage::new(800, 600);
//! let sketched = compositor.overlay(&room, catalog.first(StyleId::Modern, 3), StyleId::Modern);
//! # Ok(())
//! # }
//! ```

pub mod compositor;
pub mod shapes;
pub mod slots;
pub mod typeface;

pub use compositor::{composite_over, OverlayCompositor, Placement};
pub use slots::{OverlaySlot, SLOT_COUNT};
pub use typeface::Typeface;
