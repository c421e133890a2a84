//! # Etiquette - Price Label Printing
//!
//! Etiquette renders price labels (title, barcode, price, footer) as
//! monochrome rasters and hands them to a Brother QL label printer. It
//! provides:
//!
//! - **Barcode encoding**: EAN-13 and Code 128 Set A, check characters included
//! - **Code selection**: symbology choice from user input, generated internal codes
//! - **Rendering**: fixed-size label layout with Spleen bitmap fonts
//! - **Printing**: `brother_ql` invocation and result interpretation
//!
//! ## Quick Start
//!
//! ```no_run
//! use std::path::Path;
//! use etiquette::{CodeSelector, Dispatcher, LabelRenderer, PrinterConfig};
//!
//! let selection = CodeSelector::default().select(Some("400638133393"))?;
//! let label = LabelRenderer::default().render("Python Book", 29.90, None, &selection)?;
//! let path = label.save(Path::new("."))?;
//!
//! Dispatcher::new(PrinterConfig::ql800()).print(&path)?;
//! # Ok::<(), etiquette::LabelError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`barcode`] | Symbol tables, checksums, module encoding |
//! | [`selector`] | Symbology/payload selection |
//! | [`render`] | Canvas, fonts, label layout |
//! | [`printer`] | Printer configuration and dispatch |
//! | [`error`] | Error types |

pub mod barcode;
pub mod error;
pub mod printer;
pub mod render;
pub mod selector;

// Re-exports for convenience
pub use barcode::{ModulePattern, Symbology};
pub use error::LabelError;
pub use printer::{Dispatcher, PrinterConfig};
pub use render::{Label, LabelLayout, LabelRenderer};
pub use selector::{CodeSelector, Selection};
