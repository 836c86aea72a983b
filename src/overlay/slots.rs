/// Number of fixed placeholder slots
pub const SLOT_COUNT: usize = 3;

/// Horizontal nudge applied to the middle and right anchors
const MIDDLE_NUDGE: i64 = 50;
const RIGHT_NUDGE: i64 = 100;

/// One square placeholder region, in image coordinates
///
/// The anchor can fall outside the image on very small inputs; drawing clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlaySlot {
    pub x: i64,
    pub y: i64,
    pub side: u32,
}

impl OverlaySlot {
    /// Lay out the fixed slots for an image of the given size
    ///
    /// Anchors sit on the vertical midline at `w/6`, `w/2 - 50` and
    /// `5w/6 - 100`. The square side is `min(w, h) / 5`, never less than 1.
    pub fn layout(width: u32, height: u32) -> [OverlaySlot; SLOT_COUNT] {
        let w = width as i64;
        let y = height as i64 / 2;
        let side = (width.min(height) / 5).max(1);

        [w / 6, w / 2 - MIDDLE_NUDGE, 5 * w / 6 - RIGHT_NUDGE].map(|x| OverlaySlot { x, y, side })
    }

    /// Exclusive right edge
    pub fn right(&self) -> i64 {
        self.x + self.side as i64
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i64 {
        self.y + self.side as i64
    }
}
