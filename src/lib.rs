//! # Interior-Styler
//!
//! Restyle room photos in one of six interior-design looks and mark where
//! suggested furniture could go.
//!
//! A design is made in two deterministic steps: a per-style color grade of
//! the whole photo, then up to three translucent rounded placeholders, each
//! labeled with a furniture item and tinted from the style's palette.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use interior_styler::{config::Config, styles::StyleId, DesignPipeline};
//!
//! # fn main() -> anyhow::Result<()> {
//! let pipeline = DesignPipeline::new(Config::default())?;
//!
//! let photo = image::open("living_room.jpg")?.to_rgb8();
//! let design = pipeline.render_default(&photo, StyleId::Scandinavian);
//! design.image.save("living_room_scandinavian.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - [`styles`] - the six color-grading recipes and their shared pixel operations
//! - [`overlay`] - placeholder layout, drawing and compositing
//! - [`catalog`] - per-style furniture labels and color palettes
//! - [`recommend`] - furniture suggestions, swatches and space tips
//! - [`history`] - saved designs
//! - [`pipeline`] - ties the above together
//! - [`config`] - configuration management

pub mod catalog;
pub mod config;
pub mod error;
pub mod history;
pub mod overlay;
pub mod pipeline;
pub mod recommend;
pub mod styles;

// Re-export commonly used types for convenience
pub use crate::{
    config::Config,
    error::{Result, StylerError},
    overlay::OverlayCompositor,
    pipeline::{Design, DesignPipeline},
    styles::{transform, Style, StyleId, StyleRegistry},
};
