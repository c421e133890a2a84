//! # Price Label Layout
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │          Title line one (≤32)            │  margin, 24px pitch
//! │          title line two                  │
//! │                                          │  +15
//! │        ║█║ ║██ ║║ █║ ║█ ║║█ ║║           │  barcode, 100px
//! │             4 006381 333931              │  +5
//! │                                          │  +30
//! │               12.90 €                    │  price
//! │                                          │  +50
//! │             www.example.com              │  footer (optional)
//! └──────────────────────────────────────────┘
//! ```
//!
//! EAN-13 placement keeps the historical geometry: centered as if 113
//! modules wide, then shifted 35px right. Code 128 is centered on the width
//! of the pattern actually emitted.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use super::canvas::{Canvas, Raster};
use super::font::{FontSize, draw_text, draw_text_centered};
use crate::barcode::{self, ModulePattern, Symbology, code128};
use crate::error::LabelError;
use crate::selector::Selection;

/// Prefix of saved label files.
pub const FILE_PREFIX: &str = "etiquette_";

const ELLIPSIS: &str = "...";

/// Label geometry and text limits.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelLayout {
    pub width: usize,
    pub height: usize,
    pub margin: usize,
    /// Inset of the 1px border from each edge.
    pub border_inset: usize,
    pub title_line_pitch: usize,
    pub title_max_lines: usize,
    pub title_max_line_chars: usize,
    pub title_gap: usize,
    pub barcode_height: usize,
    pub code_text_gap: usize,
    pub code_text_advance: usize,
    pub price_advance: usize,
    pub currency: String,
    /// Module count EAN-13 is centered on (bars plus guard padding).
    pub ean13_layout_modules: usize,
    pub ean13_right_offset: usize,
}

impl Default for LabelLayout {
    fn default() -> Self {
        Self {
            width: 696,
            height: 300,
            margin: 12,
            border_inset: 2,
            title_line_pitch: 24,
            title_max_lines: 2,
            title_max_line_chars: 32,
            title_gap: 15,
            barcode_height: 100,
            code_text_gap: 5,
            code_text_advance: 30,
            price_advance: 50,
            currency: "€".to_string(),
            ean13_layout_modules: 113,
            ean13_right_offset: 35,
        }
    }
}

/// How the barcode ended up on the label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BarcodePlacement {
    Bars {
        x: usize,
        y: usize,
        module_width: usize,
        modules: usize,
    },
    /// Encoding failed or the symbol did not fit; `Code: <payload>` was drawn.
    TextFallback,
}

/// A rendered price label.
#[derive(Debug, Clone)]
pub struct Label {
    pub title_lines: Vec<String>,
    pub price_text: String,
    pub code_text: String,
    pub footer: Option<String>,
    pub selection: Selection,
    pub barcode: BarcodePlacement,
    pub raster: Raster,
}

impl Label {
    /// `etiquette_<payload>.png` with non-alphanumerics removed.
    pub fn file_name(&self) -> String {
        file_name_for(&self.selection.payload)
    }

    /// Write the label into `dir` and return the full path.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, LabelError> {
        let path = dir.join(self.file_name());
        self.raster.save_png(&path)?;
        debug!(path = %path.display(), "label saved");
        Ok(path)
    }
}

pub fn file_name_for(payload: &str) -> String {
    let clean: String = payload.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    format!("{FILE_PREFIX}{clean}.png")
}

/// Parse a price argument: finite and non-negative.
pub fn parse_price(raw: &str) -> Result<f64, LabelError> {
    match raw.trim().parse::<f64>() {
        // "-0" passes the sign check as -0.0
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price.abs()),
        _ => Err(LabelError::InvalidInput(format!(
            "Price must be a non-negative number, got {raw:?}"
        ))),
    }
}

/// Cut a title to `max_chars`, ending in `...` when anything was removed.
pub fn truncate_title(title: &str, max_chars: usize) -> String {
    let chars: Vec<char> = title.chars().collect();
    if chars.len() <= max_chars {
        return title.to_string();
    }
    let keep = max_chars.saturating_sub(ELLIPSIS.len());
    chars[..keep].iter().collect::<String>() + ELLIPSIS
}

/// Wrap a title into at most `max_lines` lines of at most `max_line_chars`.
///
/// The title is truncated to `max_line_chars * max_lines` first. Words that
/// do not fit once the last line is closed are dropped.
pub fn wrap_title(title: &str, max_line_chars: usize, max_lines: usize) -> Vec<String> {
    let title = truncate_title(title, max_line_chars * max_lines);

    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in title.split_whitespace() {
        let word: Vec<char> = word.chars().collect();
        // words longer than a line are hard-split
        for piece in word.chunks(max_line_chars.max(1)) {
            let piece: String = piece.iter().collect();
            let current_len = current.chars().count();
            let needed = if current.is_empty() {
                piece.chars().count()
            } else {
                current_len + 1 + piece.chars().count()
            };

            if needed <= max_line_chars {
                if !current.is_empty() {
                    current.push(' ');
                }
                current.push_str(&piece);
            } else {
                lines.push(std::mem::take(&mut current));
                if lines.len() >= max_lines {
                    return lines;
                }
                current = piece;
            }
        }
    }

    if !current.is_empty() && lines.len() < max_lines {
        lines.push(current);
    }
    lines
}

/// Composes labels on a fixed-size canvas.
#[derive(Debug, Clone, Default)]
pub struct LabelRenderer {
    layout: LabelLayout,
}

impl LabelRenderer {
    pub fn new(layout: LabelLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &LabelLayout {
        &self.layout
    }

    pub fn render(
        &self,
        title: &str,
        price: f64,
        footer: Option<&str>,
        selection: &Selection,
    ) -> Result<Label, LabelError> {
        let layout = &self.layout;
        let mut canvas = Canvas::new(layout.width, layout.height);
        let mut y = layout.margin;

        let title_lines = wrap_title(title, layout.title_max_line_chars, layout.title_max_lines);
        for line in &title_lines {
            draw_text_centered(&mut canvas, line, y, FontSize::Medium)?;
            y += layout.title_line_pitch;
        }
        y += layout.title_gap;

        let barcode = self.draw_barcode(&mut canvas, selection, y)?;
        y += layout.barcode_height + layout.code_text_gap;

        let code_text = selection
            .symbology
            .format_human_readable(&selection.payload);
        draw_text_centered(&mut canvas, &code_text, y, FontSize::Small)?;
        y += layout.code_text_advance;

        let price_text = format!("{:.2} {}", price, layout.currency);
        draw_text_centered(&mut canvas, &price_text, y, FontSize::Large)?;
        y += layout.price_advance;

        let footer = footer
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string);
        if let Some(footer) = &footer {
            draw_text_centered(&mut canvas, footer, y, FontSize::Small)?;
        }

        let inset = layout.border_inset;
        canvas.stroke_rect(
            inset,
            inset,
            layout.width.saturating_sub(inset),
            layout.height.saturating_sub(inset),
        );

        Ok(Label {
            title_lines,
            price_text,
            code_text,
            footer,
            selection: selection.clone(),
            barcode,
            raster: canvas.to_raster(0.5),
        })
    }

    fn draw_barcode(
        &self,
        canvas: &mut Canvas,
        selection: &Selection,
        y: usize,
    ) -> Result<BarcodePlacement, LabelError> {
        let pattern = match barcode::encode(selection.symbology, &selection.payload) {
            Ok(pattern) => Some(pattern),
            Err(e) => {
                warn!(error = %e, "barcode encoding failed, drawing text");
                None
            }
        };
        let placed = pattern.and_then(|pattern| {
            let geometry = self.place(selection, &pattern);
            if geometry.is_none() {
                warn!(modules = pattern.len(), "barcode wider than label, drawing text");
            }
            geometry.map(|(x, module_width)| (pattern, x, module_width))
        });

        let Some((pattern, x, module_width)) = placed else {
            let x = self.fallback_x(selection);
            draw_text(
                canvas,
                &format!("Code: {}", selection.payload),
                x,
                y,
                FontSize::Small,
            )?;
            return Ok(BarcodePlacement::TextFallback);
        };

        debug!(
            symbology = %selection.symbology,
            modules = pattern.len(),
            module_width,
            x,
            "drawing barcode"
        );
        for (start, run) in pattern.bar_runs() {
            canvas.fill_rect(
                x + start * module_width,
                y,
                run * module_width,
                self.layout.barcode_height,
            );
        }

        Ok(BarcodePlacement::Bars {
            x,
            y,
            module_width,
            modules: pattern.len(),
        })
    }

    /// Left edge and module width, or `None` if the symbol cannot fit.
    fn place(&self, selection: &Selection, pattern: &ModulePattern) -> Option<(usize, usize)> {
        let layout = &self.layout;
        match selection.symbology {
            Symbology::Ean13 => {
                let module_width = Symbology::Ean13.module_width() as usize;
                let x = self.ean13_x(module_width);
                let fits = x + pattern.len() * module_width <= self.usable_right();
                fits.then_some((x, module_width))
            }
            Symbology::Code128A => {
                let estimate = code128::estimated_module_count(selection.payload.chars().count());
                if estimate + 2 != pattern.len() {
                    debug!(estimate, actual = pattern.len(), "code 128 width estimate differs");
                }
                let usable = self.usable_right().saturating_sub(layout.margin);
                let default_width = Symbology::Code128A.module_width() as usize;
                (1..=default_width)
                    .rev()
                    .find(|mw| pattern.len() * mw <= usable)
                    .map(|mw| ((layout.width - pattern.len() * mw) / 2, mw))
            }
        }
    }

    fn ean13_x(&self, module_width: usize) -> usize {
        let layout = &self.layout;
        let estimated = layout.ean13_layout_modules * module_width;
        layout.width.saturating_sub(estimated) / 2 + layout.ean13_right_offset
    }

    fn fallback_x(&self, selection: &Selection) -> usize {
        match selection.symbology {
            Symbology::Ean13 => self.ean13_x(Symbology::Ean13.module_width() as usize),
            Symbology::Code128A => self.layout.margin,
        }
    }

    fn usable_right(&self) -> usize {
        self.layout.width.saturating_sub(self.layout.margin)
    }
}
