//! # Printer Configuration
//!
//! Describes how to hand a saved label to the print collaborator
//! (`brother_ql` by default) and how to recognize a successful print.
//!
//! ## Supported Printers
//!
//! | Model | Backend | Media | Resolution |
//! |-------|---------|-------|------------|
//! | Brother QL-800 | pyusb | 62mm endless | 696 dots wide |
//!
//! ## Usage
//!
//! ```
//! use etiquette::printer::PrinterConfig;
//!
//! let config = PrinterConfig::ql800();
//! assert_eq!(config.model, "QL-800");
//!
//! // Partial JSON keeps the QL-800 defaults for missing fields
//! let config = PrinterConfig::from_json(r#"{ "printer": "usb://0x04f9:0x2042" }"#)?;
//! assert_eq!(config.printer, "usb://0x04f9:0x2042");
//! assert_eq!(config.media, "62");
//! # Ok::<(), etiquette::LabelError>(())
//! ```

use std::ffi::OsString;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::LabelError;

/// Print collaborator invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Human-readable name
    pub name: String,
    /// Executable to run
    pub command: String,
    /// `--backend` value
    pub backend: String,
    /// `--model` value
    pub model: String,
    /// `--printer` identifier (USB URI, device path, ...)
    pub printer: String,
    /// `-l` media/label size
    pub media: String,
    /// Text the collaborator writes to stderr when the job went through
    pub success_marker: String,
}

impl PrinterConfig {
    /// # Brother QL-800 over USB
    ///
    /// 62mm continuous tape, 300 dpi, 696 printable dots.
    pub fn ql800() -> Self {
        Self {
            name: "Brother QL-800".to_string(),
            command: "brother_ql".to_string(),
            backend: "pyusb".to_string(),
            model: "QL-800".to_string(),
            printer: "usb://0x04f9:0x209b".to_string(),
            media: "62".to_string(),
            success_marker: "Total:".to_string(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        serde_json::from_str(json).map_err(|e| LabelError::Config(format!("Invalid printer config: {}", e)))
    }

    pub fn load(path: &Path) -> Result<Self, LabelError> {
        let json = fs::read_to_string(path)
            .map_err(|e| LabelError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    /// Arguments passed to [`command`](Self::command) to print `file`.
    pub fn args(&self, file: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = [
            "--backend",
            self.backend.as_str(),
            "--model",
            self.model.as_str(),
            "--printer",
            self.printer.as_str(),
            "print",
            "-l",
            self.media.as_str(),
        ]
        .into_iter()
        .map(OsString::from)
        .collect();
        args.push(file.as_os_str().to_os_string());
        args
    }
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self::ql800()
    }
}
