//! Saved designs.
//!
//! The history is a flat list owned by the caller: records are appended on
//! save and removed by index, never edited in place.

use std::io::Cursor;

use chrono::{DateTime, Utc};
use image::{ImageFormat, RgbImage};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    error::{HistoryError, Result},
    recommend::RoomDimensions,
    styles::StyleId,
};

/// One saved design
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignRecord {
    pub style: StyleId,
    pub dimensions: RoomDimensions,
    pub furniture: Vec<String>,
    pub description: String,
    /// Final image, PNG-encoded
    pub image_png: Vec<u8>,
    pub saved_at: DateTime<Utc>,
}

impl DesignRecord {
    /// Create a record, encoding `image` as PNG
    pub fn new(
        style: StyleId,
        dimensions: RoomDimensions,
        furniture: Vec<String>,
        description: String,
        image: &RgbImage,
    ) -> Result<Self> {
        Ok(Self {
            style,
            dimensions,
            furniture,
            description,
            image_png: encode_png(image)?,
            saved_at: Utc::now(),
        })
    }

    /// `"<length>x<width>"`
    pub fn dimensions_label(&self) -> String {
        self.dimensions.label()
    }

    /// Decode the stored image
    pub fn decode_image(&self) -> Result<RgbImage> {
        let decoded = image::load_from_memory_with_format(&self.image_png, ImageFormat::Png)
            .map_err(|e| HistoryError::DecodingFailed { reason: e.to_string() })?;
        Ok(decoded.to_rgb8())
    }
}

/// Encode an RGB image as PNG bytes
pub fn encode_png(image: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .map_err(|e| HistoryError::EncodingFailed { reason: e.to_string() })?;
    Ok(bytes)
}

/// Append-only list of saved designs, with removal by index
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DesignHistory {
    records: Vec<DesignRecord>,
}

impl DesignHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, returning its index
    pub fn save(&mut self, record: DesignRecord) -> usize {
        info!(
            "Saved design #{}: {} | {}",
            self.records.len() + 1,
            record.style,
            record.dimensions_label()
        );
        self.records.push(record);
        self.records.len() - 1
    }

    /// Remove and return the record at `index` (0-based)
    pub fn remove(&mut self, index: usize) -> Result<DesignRecord> {
        if index >= self.records.len() {
            return Err(HistoryError::IndexOutOfRange {
                index,
                len: self.records.len(),
            }
            .into());
        }
        debug!("Removing design at index {}", index);
        Ok(self.records.remove(index))
    }

    pub fn get(&self, index: usize) -> Option<&DesignRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in save order
    pub fn iter(&self) -> impl Iterator<Item = &DesignRecord> {
        self.records.iter()
    }

    /// `(index, record)` pairs, most recent first
    pub fn iter_newest_first(&self) -> impl Iterator<Item = (usize, &DesignRecord)> {
        self.records.iter().enumerate().rev()
    }
}
