//! Pixel operations shared by the built-in styles.
//!
//! Every function here takes an image by reference and returns a freshly
//! allocated buffer of the same dimensions. All byte arithmetic saturates.

use image::{Rgb, RgbImage};

/// Multiply one sample, clipping to `[0, 255]` and truncating toward zero
#[inline]
pub fn scale_sample(value: u8, factor: f32) -> u8 {
    (value as f32 * factor).clamp(0.0, 255.0) as u8
}

/// Saturating scale of a single-channel byte array
///
/// `scale_channel(&[100, 200, 50], 1.5)` yields `[150, 255, 75]`.
pub fn scale_channel(samples: &[u8], factor: f32) -> Vec<u8> {
    samples.iter().map(|&v| scale_sample(v, factor)).collect()
}

/// Scale the R, G and B channels independently
pub fn scale_rgb(image: &RgbImage, factors: [f32; 3]) -> RgbImage {
    map_pixels(image, |[r, g, b]| {
        [
            scale_sample(r, factors[0]),
            scale_sample(g, factors[1]),
            scale_sample(b, factors[2]),
        ]
    })
}

/// Uniform brightness enhancement (blend against black)
pub fn brighten(image: &RgbImage, factor: f32) -> RgbImage {
    scale_rgb(image, [factor; 3])
}

/// Apply `f` to every pixel, producing a new image
pub fn map_pixels<F>(image: &RgbImage, f: F) -> RgbImage
where
    F: Fn([u8; 3]) -> [u8; 3],
{
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        Rgb(f(image.get_pixel(x, y).0))
    })
}

/// Luma using the fixed-point BT.601 weights (14-bit precision)
#[inline]
pub fn luma(r: u8, g: u8, b: u8) -> u8 {
    const R_WEIGHT: u32 = 4899;
    const G_WEIGHT: u32 = 9617;
    const B_WEIGHT: u32 = 1868;
    const SHIFT: u32 = 14;

    let sum = r as u32 * R_WEIGHT + g as u32 * G_WEIGHT + b as u32 * B_WEIGHT + (1 << (SHIFT - 1));
    (sum >> SHIFT) as u8
}

/// Stretch each channel's histogram so its darkest sample maps to 0 and its
/// brightest to 255. Flat channels are left untouched.
pub fn autocontrast(image: &RgbImage) -> RgbImage {
    let mut lo = [u8::MAX; 3];
    let mut hi = [u8::MIN; 3];

    for pixel in image.pixels() {
        for c in 0..3 {
            lo[c] = lo[c].min(pixel[c]);
            hi[c] = hi[c].max(pixel[c]);
        }
    }

    let luts = [
        stretch_lut(lo[0], hi[0]),
        stretch_lut(lo[1], hi[1]),
        stretch_lut(lo[2], hi[2]),
    ];

    map_pixels(image, |[r, g, b]| {
        [luts[0][r as usize], luts[1][g as usize], luts[2][b as usize]]
    })
}

fn stretch_lut(lo: u8, hi: u8) -> [u8; 256] {
    let mut lut = [0u8; 256];

    if hi <= lo {
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = i as u8;
        }
        return lut;
    }

    let span = (hi - lo) as i32;
    for (i, slot) in lut.iter_mut().enumerate() {
        let mapped = (i as i32 - lo as i32) * 255 / span;
        *slot = mapped.clamp(0, 255) as u8;
    }
    lut
}

/// Symmetric, separable Gaussian kernel with integer (binomial) weights
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaussianKernel {
    weights: Vec<u32>,
    shift: u32,
}

impl GaussianKernel {
    /// Largest supported kernel side
    pub const MAX_SIZE: usize = 15;

    /// Build a kernel of the given odd side length with the sigma implied by
    /// the size. Even sizes are rounded up; the size is capped at [`Self::MAX_SIZE`].
    pub fn new(size: usize) -> Self {
        let size = (size | 1).min(Self::MAX_SIZE);

        // Row `size - 1` of Pascal's triangle
        let mut weights = vec![1u32; size];
        for row in 1..size {
            for i in (1..row).rev() {
                weights[i] += weights[i - 1];
            }
        }

        Self {
            weights,
            shift: (size - 1) as u32,
        }
    }

    pub fn size(&self) -> usize {
        self.weights.len()
    }

    pub fn radius(&self) -> usize {
        self.weights.len() / 2
    }

    /// 1D weights; they sum to `1 << shift`
    pub fn weights(&self) -> &[u32] {
        &self.weights
    }
}

/// Blur with `kernel` along both axes, reflecting at the borders
/// (`dcb|abcd|cba`, the edge sample is not repeated)
pub fn gaussian_blur(image: &RgbImage, kernel: &GaussianKernel) -> RgbImage {
    let (width, height) = image.dimensions();
    let mut output = RgbImage::new(width, height);
    if width == 0 || height == 0 {
        return output;
    }

    let w = width as usize;
    let h = height as usize;
    let radius = kernel.radius() as i64;
    let src: &[u8] = image.as_raw();

    // Horizontal pass keeps full precision
    let mut horizontal = vec![0u32; w * h * 3];
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u32; 3];
            for (k, &weight) in kernel.weights().iter().enumerate() {
                let sx = reflect_101(x as i64 + k as i64 - radius, w);
                let idx = (y * w + sx) * 3;
                for c in 0..3 {
                    acc[c] += weight * src[idx + c] as u32;
                }
            }
            let out = (y * w + x) * 3;
            horizontal[out..out + 3].copy_from_slice(&acc);
        }
    }

    // Vertical pass, then round once
    let total_shift = kernel.shift * 2;
    let half = 1u64 << total_shift >> 1;
    let dst: &mut [u8] = &mut output;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 3];
            for (k, &weight) in kernel.weights().iter().enumerate() {
                let sy = reflect_101(y as i64 + k as i64 - radius, h);
                let idx = (sy * w + x) * 3;
                for c in 0..3 {
                    acc[c] += weight as u64 * horizontal[idx + c] as u64;
                }
            }
            let out = (y * w + x) * 3;
            for c in 0..3 {
                dst[out + c] = ((acc[c] + half) >> total_shift).min(255) as u8;
            }
        }
    }

    output
}

fn reflect_101(mut i: i64, len: usize) -> usize {
    let last = len as i64 - 1;
    if last <= 0 {
        return 0;
    }
    loop {
        if i < 0 {
            i = -i;
        } else if i > last {
            i = 2 * last - i;
        } else {
            return i as usize;
        }
    }
}

/// Convert RGB to 8-bit HSV: hue in `[0, 180)`, saturation and value in `[0, 255]`
pub fn rgb_to_hsv([r, g, b]: [u8; 3]) -> [u8; 3] {
    let (ri, gi, bi) = (r as i32, g as i32, b as i32);
    let v = ri.max(gi).max(bi);
    let min = ri.min(gi).min(bi);
    let diff = v - min;

    let s = if v == 0 {
        0
    } else {
        (diff as f32 * 255.0 / v as f32).round() as i32
    };

    let h = if diff == 0 {
        0
    } else {
        let sector = if v == ri {
            gi - bi
        } else if v == gi {
            bi - ri + 2 * diff
        } else {
            ri - gi + 4 * diff
        };
        let mut h = (sector as f32 * 30.0 / diff as f32).round() as i32;
        if h < 0 {
            h += 180;
        }
        h % 180
    };

    [h as u8, s.clamp(0, 255) as u8, v as u8]
}

/// Inverse of [`rgb_to_hsv`]
pub fn hsv_to_rgb([h, s, v]: [u8; 3]) -> [u8; 3] {
    let s = s as f32 / 255.0;
    let v = v as f32 / 255.0;

    let mut hue = h as f32 * (6.0 / 180.0);
    if hue >= 6.0 {
        hue -= 6.0;
    }
    let sector = hue.floor();
    let f = hue - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match sector as u8 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    [to_byte(r), to_byte(g), to_byte(b)]
}

#[inline]
fn to_byte(unit: f32) -> u8 {
    (unit * 255.0).round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_channel_clips() {
        assert_eq!(scale_channel(&[100, 200, 50], 1.5), vec![150, 255, 75]);
        assert_eq!(scale_channel(&[100], 10.0), vec![255]);
        assert_eq!(scale_channel(&[100], -1.0), vec![0]);
    }

    #[test]
    fn test_binomial_kernels() {
        assert_eq!(GaussianKernel::new(3).weights(), &[1, 2, 1]);
        assert_eq!(GaussianKernel::new(5).weights(), &[1, 4, 6, 4, 1]);
        assert_eq!(GaussianKernel::new(4).size(), 5);
        assert_eq!(GaussianKernel::new(99).size(), GaussianKernel::MAX_SIZE);
    }

    #[test]
    fn test_blur_keeps_flat_image_flat() {
        let image = RgbImage::from_pixel(7, 5, Rgb([90, 120, 200]));
        let blurred = gaussian_blur(&image, &GaussianKernel::new(5));
        assert_eq!(blurred, image);
    }

    #[test]
    fn test_blur_softens_edge() {
        let image = RgbImage::from_fn(6, 1, |x, _| if x < 3 { Rgb([0; 3]) } else { Rgb([255; 3]) });
        let blurred = gaussian_blur(&image, &GaussianKernel::new(3));

        // (0 + 2*0 + 255) / 4 and (0 + 2*255 + 255) / 4, rounded
        assert_eq!(blurred.get_pixel(2, 0).0, [64; 3]);
        assert_eq!(blurred.get_pixel(3, 0).0, [191; 3]);
        assert_eq!(blurred.get_pixel(0, 0).0, [0; 3]);
        assert_eq!(blurred.get_pixel(5, 0).0, [255; 3]);
    }

    #[test]
    fn test_blur_handles_tiny_images() {
        let single = RgbImage::from_pixel(1, 1, Rgb([10, 20, 30]));
        assert_eq!(gaussian_blur(&single, &GaussianKernel::new(5)), single);

        let empty = RgbImage::new(0, 0);
        assert_eq!(gaussian_blur(&empty, &GaussianKernel::new(3)).dimensions(), (0, 0));
    }

    #[test]
    fn test_reflect_101() {
        assert_eq!(reflect_101(-1, 4), 1);
        assert_eq!(reflect_101(-2, 4), 2);
        assert_eq!(reflect_101(4, 4), 2);
        assert_eq!(reflect_101(-2, 2), 0);
        assert_eq!(reflect_101(3, 1), 0);
    }

    #[test]
    fn test_luma() {
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
        assert_eq!(luma(100, 150, 200), 141);
    }

    #[test]
    fn test_autocontrast_stretches_range() {
        let image = RgbImage::from_fn(2, 1, |x, _| if x == 0 { Rgb([50, 60, 70]) } else { Rgb([150, 160, 170]) });
        let stretched = autocontrast(&image);
        assert_eq!(stretched.get_pixel(0, 0).0, [0, 0, 0]);
        assert_eq!(stretched.get_pixel(1, 0).0, [255, 255, 255]);
    }

    #[test]
    fn test_autocontrast_leaves_flat_channel() {
        let image = RgbImage::from_pixel(3, 3, Rgb([50, 50, 50]));
        assert_eq!(autocontrast(&image), image);
    }

    #[test]
    fn test_hsv_primaries() {
        assert_eq!(rgb_to_hsv([255, 0, 0]), [0, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 255, 0]), [60, 255, 255]);
        assert_eq!(rgb_to_hsv([0, 0, 255]), [120, 255, 255]);
        assert_eq!(rgb_to_hsv([128, 128, 128]), [0, 0, 128]);
    }

    #[test]
    fn test_hsv_round_trip_is_close() {
        for rgb in [[255, 0, 0], [12, 200, 90], [240, 240, 10], [33, 66, 99], [0, 0, 0]] {
            let back = hsv_to_rgb(rgb_to_hsv(rgb));
            for c in 0..3 {
                let delta = (back[c] as i32 - rgb[c] as i32).abs();
                assert!(delta <= 3, "{:?} -> {:?}", rgb, back);
            }
        }
    }
}
