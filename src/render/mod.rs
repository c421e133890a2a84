//! # Rendering Module
//!
//! Composes a price label onto a monochrome raster.
//!
//! ## Modules
//!
//! - [`canvas`]: intensity canvas and packed 1-bit raster
//! - [`font`]: Spleen bitmap text
//! - [`label`]: label layout (title, barcode, price, footer)
//!
//! ## Usage Example
//!
//! ```
//! use etiquette::barcode::Symbology;
//! use etiquette::render::LabelRenderer;
//! use etiquette::selector::Selection;
//!
//! let renderer = LabelRenderer::default();
//! let selection = Selection::new(Symbology::Ean13, "4006381333931");
//! let label = renderer.render("Python Book", 29.9, Some("www.site.com"), &selection)?;
//!
//! assert_eq!(label.raster.width, 696);
//! assert_eq!(label.raster.height, 300);
//! # Ok::<(), etiquette::LabelError>(())
//! ```

pub mod canvas;
pub mod font;
pub mod label;

pub use canvas::{Canvas, Raster};
pub use label::{BarcodePlacement, Label, LabelLayout, LabelRenderer};
