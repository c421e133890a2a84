//! Bitmap text using the Spleen font family.
//!
//! Every size is monospaced, so measuring is `chars × advance`.

use spleen_font::{FONT_8X16, FONT_12X24, PSF2Font};

use super::canvas::Canvas;
use crate::error::LabelError;

/// Text sizes used on a label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// 8x16: human-readable code, footer
    Small,
    /// 12x24: title
    Medium,
    /// 12x24 doubled: price
    Large,
}

impl FontSize {
    fn font_data(self) -> &'static [u8] {
        match self {
            FontSize::Small => FONT_8X16,
            FontSize::Medium | FontSize::Large => FONT_12X24,
        }
    }

    fn glyph_width(self) -> usize {
        match self {
            FontSize::Small => 8,
            FontSize::Medium | FontSize::Large => 12,
        }
    }

    fn glyph_height(self) -> usize {
        match self {
            FontSize::Small => 16,
            FontSize::Medium | FontSize::Large => 24,
        }
    }

    fn scale(self) -> usize {
        match self {
            FontSize::Large => 2,
            _ => 1,
        }
    }

    /// Horizontal advance per character in pixels.
    pub fn char_width(self) -> usize {
        self.glyph_width() * self.scale()
    }

    /// Line height in pixels.
    pub fn char_height(self) -> usize {
        self.glyph_height() * self.scale()
    }
}

pub fn text_width(text: &str, size: FontSize) -> usize {
    text.chars().count() * size.char_width()
}

/// Draw text with its top-left corner at `(x, y)`.
///
/// Characters missing from the font are drawn as a box.
pub fn draw_text(
    canvas: &mut Canvas,
    text: &str,
    x: usize,
    y: usize,
    size: FontSize,
) -> Result<(), LabelError> {
    let mut font = PSF2Font::new(size.font_data())
        .map_err(|_| LabelError::Image("Failed to load Spleen font".to_string()))?;
    let scale = size.scale();
    let mut cursor_x = x;

    for ch in text.chars() {
        let utf8 = ch.to_string();
        match font.glyph_for_utf8(utf8.as_bytes()) {
            Some(glyph) => {
                for (row_y, row) in glyph.enumerate() {
                    for (col_x, on) in row.enumerate() {
                        if on {
                            canvas.fill_rect(
                                cursor_x + col_x * scale,
                                y + row_y * scale,
                                scale,
                                scale,
                            );
                        }
                    }
                }
            }
            None => {
                let (w, h) = (size.char_width(), size.char_height());
                canvas.stroke_rect(cursor_x + 1, y + 1, cursor_x + w - 2, y + h - 2);
            }
        }
        cursor_x += size.char_width();
    }

    Ok(())
}

/// Draw text horizontally centered on the canvas.
pub fn draw_text_centered(
    canvas: &mut Canvas,
    text: &str,
    y: usize,
    size: FontSize,
) -> Result<(), LabelError> {
    let w = text_width(text, size);
    let x = canvas.width().saturating_sub(w) / 2;
    draw_text(canvas, text, x, y, size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink(canvas: &Canvas) -> usize {
        let mut count = 0;
        for y in 0..canvas.height() {
            for x in 0..canvas.width() {
                if canvas.get(x, y) > 0.5 {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width("ABC", FontSize::Small), 24);
        assert_eq!(text_width("ABC", FontSize::Medium), 36);
        assert_eq!(text_width("ABC", FontSize::Large), 72);
        assert_eq!(text_width("", FontSize::Large), 0);
    }

    #[test]
    fn test_draw_text_puts_ink_inside_cell() {
        let mut canvas = Canvas::new(40, 30);
        draw_text(&mut canvas, "A", 4, 2, FontSize::Medium).unwrap();
        assert!(ink(&canvas) > 0);
        for y in 0..30 {
            for x in 0..40 {
                if canvas.get(x, y) > 0.5 {
                    assert!((4..16).contains(&x) && (2..26).contains(&y), "ink at {x},{y}");
                }
            }
        }
    }

    #[test]
    fn test_large_is_scaled_medium() {
        let mut medium = Canvas::new(20, 30);
        let mut large = Canvas::new(40, 60);
        draw_text(&mut medium, "8", 0, 0, FontSize::Medium).unwrap();
        draw_text(&mut large, "8", 0, 0, FontSize::Large).unwrap();
        assert_eq!(ink(&large), ink(&medium) * 4);
    }

    #[test]
    fn test_centered_text_is_symmetric_cell() {
        let mut canvas = Canvas::new(100, 20);
        draw_text_centered(&mut canvas, "II", 0, FontSize::Small).unwrap();
        // 16px of text on 100px: cell starts at 42
        for y in 0..20 {
            for x in 0..42 {
                assert_eq!(canvas.get(x, y), 0.0);
            }
        }
    }

    #[test]
    fn test_space_draws_nothing() {
        let mut canvas = Canvas::new(40, 30);
        draw_text(&mut canvas, "  ", 0, 0, FontSize::Medium).unwrap();
        assert_eq!(ink(&canvas), 0);
    }
}
