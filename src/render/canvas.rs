//! Drawing surface and 1-bit raster output.
//!
//! The [`Canvas`] holds intensities (0.0 = white, 1.0 = black). Once the label
//! is composed it is thresholded into a packed [`Raster`]: MSB first, 1 = black,
//! each row padded to a whole byte.

use std::path::Path;

use image::{GrayImage, Luma};

use crate::error::LabelError;

/// Grayscale intensity buffer. 0.0 = white, 1.0 = black.
#[derive(Debug, Clone)]
pub struct Canvas {
    buf: Vec<f32>,
    width: usize,
    height: usize,
}

impl Canvas {
    /// Blank (white) canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            buf: vec![0.0; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Set a pixel; out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, intensity: f32) {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x] = intensity.clamp(0.0, 1.0);
        }
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        if x < self.width && y < self.height {
            self.buf[y * self.width + x]
        } else {
            0.0
        }
    }

    /// Fill `w × h` pixels black starting at `(x, y)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for py in y.min(self.height)..y_end {
            let row = py * self.width;
            for px in x.min(self.width)..x_end {
                self.buf[row + px] = 1.0;
            }
        }
    }

    /// 1-pixel outline through the corners `(x0, y0)` and `(x1, y1)`, inclusive.
    pub fn stroke_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize) {
        let w = x1.saturating_sub(x0) + 1;
        let h = y1.saturating_sub(y0) + 1;
        self.fill_rect(x0, y0, w, 1);
        self.fill_rect(x0, y1, w, 1);
        self.fill_rect(x0, y0, 1, h);
        self.fill_rect(x1, y0, 1, h);
    }

    /// Threshold into a packed 1-bit raster. Pixels at or above `threshold` print.
    pub fn to_raster(&self, threshold: f32) -> Raster {
        let width_bytes = self.width.div_ceil(8);
        let mut data = vec![0u8; width_bytes * self.height];
        for y in 0..self.height {
            for x in 0..self.width {
                if self.buf[y * self.width + x] >= threshold {
                    data[y * width_bytes + x / 8] |= 1 << (7 - (x % 8));
                }
            }
        }
        Raster {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Packed monochrome image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl Raster {
    pub fn width_bytes(&self) -> usize {
        self.width.div_ceil(8)
    }

    pub fn is_black(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let byte = self.data[y * self.width_bytes() + x / 8];
        (byte >> (7 - (x % 8))) & 1 == 1
    }

    /// Expand to an 8-bit image holding only 0 and 255.
    pub fn to_gray_image(&self) -> GrayImage {
        let mut img = GrayImage::new(self.width as u32, self.height as u32);
        for y in 0..self.height {
            for x in 0..self.width {
                let color = if self.is_black(x, y) { 0u8 } else { 255u8 };
                img.put_pixel(x as u32, y as u32, Luma([color]));
            }
        }
        img
    }

    /// Save as PNG.
    ///
    /// The file is 8-bit grayscale (`L8`), not a packed 1-bit PNG. Every pixel
    /// is 0 or 255.
    pub fn save_png(&self, path: &Path) -> Result<(), LabelError> {
        self.to_gray_image()
            .save(path)
            .map_err(|e| LabelError::Image(format!("Failed to save PNG {}: {}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fill_rect_clips() {
        let mut canvas = Canvas::new(10, 10);
        canvas.fill_rect(8, 8, 5, 5);
        assert_eq!(canvas.get(9, 9), 1.0);
        assert_eq!(canvas.get(7, 7), 0.0);
    }

    #[test]
    fn test_stroke_rect_is_hollow() {
        let mut canvas = Canvas::new(10, 10);
        canvas.stroke_rect(2, 2, 7, 7);
        assert_eq!(canvas.get(2, 2), 1.0);
        assert_eq!(canvas.get(7, 5), 1.0);
        assert_eq!(canvas.get(5, 7), 1.0);
        assert_eq!(canvas.get(5, 5), 0.0);
        assert_eq!(canvas.get(8, 8), 0.0);
    }

    #[test]
    fn test_raster_packing() {
        let mut canvas = Canvas::new(10, 2);
        canvas.set(0, 0, 1.0);
        canvas.set(9, 1, 1.0);
        canvas.set(3, 0, 0.2);
        let raster = canvas.to_raster(0.5);
        assert_eq!(raster.width_bytes(), 2);
        assert_eq!(raster.data, vec![0b1000_0000, 0, 0, 0b0100_0000]);
        assert!(raster.is_black(0, 0));
        assert!(!raster.is_black(3, 0));
        assert!(raster.is_black(9, 1));
    }

    #[test]
    fn test_saved_png_is_l8_black_and_white() {
        let mut canvas = Canvas::new(12, 3);
        canvas.fill_rect(0, 0, 5, 3);
        canvas.set(8, 1, 0.3);
        let path = std::env::temp_dir().join(format!("etiquette-raster-{}.png", std::process::id()));
        canvas.to_raster(0.5).save_png(&path).unwrap();

        let img = image::open(&path).unwrap();
        assert_eq!(img.color(), image::ColorType::L8);
        let gray = img.to_luma8();
        assert_eq!(gray.dimensions(), (12, 3));
        assert!(gray.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert_eq!(gray.get_pixel(4, 2).0[0], 0);
        assert_eq!(gray.get_pixel(8, 1).0[0], 255);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_gray_image_is_monochrome() {
        let mut canvas = Canvas::new(16, 4);
        canvas.fill_rect(0, 0, 4, 4);
        canvas.set(10, 2, 0.7);
        let img = canvas.to_raster(0.5).to_gray_image();
        assert!(img.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
        assert_eq!(img.get_pixel(1, 1).0[0], 0);
        assert_eq!(img.get_pixel(10, 2).0[0], 0);
        assert_eq!(img.get_pixel(12, 2).0[0], 255);
    }
}
