use image::{Rgba, RgbaImage};

/// Axis-aligned rectangle with rounded corners
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedRect {
    pub x: i64,
    pub y: i64,
    pub width: u32,
    pub height: u32,
    pub radius: u32,
}

impl RoundedRect {
    /// Whether the point lies inside the shape shrunk by `inset` on every side
    fn contains(&self, px: f32, py: f32, inset: f32) -> bool {
        let left = self.x as f32 + inset;
        let top = self.y as f32 + inset;
        let right = (self.x + self.width as i64) as f32 - inset;
        let bottom = (self.y + self.height as i64) as f32 - inset;

        if px < left || px > right || py < top || py > bottom {
            return false;
        }

        let radius = (self.radius as f32 - inset)
            .max(0.0)
            .min((right - left) / 2.0)
            .min((bottom - top) / 2.0);
        if radius <= 0.0 {
            return true;
        }

        let (dx, dy) = (
            outside_band(px, left + radius, right - radius),
            outside_band(py, top + radius, bottom - radius),
        );
        dx * dx + dy * dy <= radius * radius
    }
}

/// Distance from `v` to the band `[lo, hi]`, zero inside it
fn outside_band(v: f32, lo: f32, hi: f32) -> f32 {
    if v < lo {
        v - lo
    } else if v > hi {
        v - hi
    } else {
        0.0
    }
}

/// Paint a filled, outlined rounded rectangle
///
/// Pixels are replaced rather than blended, so a translucent fill stays
/// translucent in the layer. The outline is `border` pixels wide and sits
/// inside the shape. Anything outside the canvas is clipped.
pub fn draw_rounded_rect(
    canvas: &mut RgbaImage,
    rect: &RoundedRect,
    fill: Rgba<u8>,
    outline: Rgba<u8>,
    border: u32,
) {
    let x0 = rect.x.max(0);
    let y0 = rect.y.max(0);
    let x1 = (rect.x + rect.width as i64).min(canvas.width() as i64);
    let y1 = (rect.y + rect.height as i64).min(canvas.height() as i64);

    for y in y0..y1 {
        for x in x0..x1 {
            // Sample at the pixel center
            let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
            if !rect.contains(px, py, 0.0) {
                continue;
            }

            let color = if border > 0 && !rect.contains(px, py, border as f32) {
                outline
            } else {
                fill
            };
            canvas.put_pixel(x as u32, y as u32, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FILL: Rgba<u8> = Rgba([10, 20, 30, 140]);
    const LINE: Rgba<u8> = Rgba([10, 20, 30, 255]);

    fn rect(x: i64, y: i64, side: u32, radius: u32) -> RoundedRect {
        RoundedRect { x, y, width: side, height: side, radius }
    }

    #[test]
    fn test_fill_and_outline() {
        let mut canvas = RgbaImage::new(50, 50);
        draw_rounded_rect(&mut canvas, &rect(5, 5, 40, 15), FILL, LINE, 3);

        assert_eq!(*canvas.get_pixel(25, 25), FILL);
        assert_eq!(*canvas.get_pixel(25, 5), LINE);
        assert_eq!(*canvas.get_pixel(25, 7), LINE);
        assert_eq!(*canvas.get_pixel(25, 8), FILL);
        assert_eq!(*canvas.get_pixel(44, 25), LINE);
        assert_eq!(*canvas.get_pixel(45, 25), Rgba([0; 4]));
    }

    #[test]
    fn test_corners_are_rounded() {
        let mut canvas = RgbaImage::new(50, 50);
        draw_rounded_rect(&mut canvas, &rect(5, 5, 40, 15), FILL, LINE, 3);

        // The very corner pixel lies outside the arc
        assert_eq!(canvas.get_pixel(5, 5).0[3], 0);
        assert_eq!(canvas.get_pixel(44, 44).0[3], 0);
    }

    #[test]
    fn test_clips_to_canvas() {
        let mut canvas = RgbaImage::new(10, 10);
        draw_rounded_rect(&mut canvas, &rect(-20, -20, 25, 15), FILL, LINE, 3);
        draw_rounded_rect(&mut canvas, &rect(8, 8, 25, 15), FILL, LINE, 3);
        assert_eq!(canvas.dimensions(), (10, 10));
    }

    #[test]
    fn test_single_pixel_rect() {
        let mut canvas = RgbaImage::new(1, 1);
        draw_rounded_rect(&mut canvas, &rect(0, 0, 1, 15), FILL, LINE, 3);
        assert_eq!(*canvas.get_pixel(0, 0), LINE);
    }
}
