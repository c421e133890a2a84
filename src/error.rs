//! # Error Types
//!
//! This module defines error types used throughout the etiquette library.

use std::time::Duration;

use thiserror::Error;

use crate::barcode::Symbology;

/// Main error type for etiquette operations
#[derive(Debug, Error)]
pub enum LabelError {
    /// Rejected at the input boundary (price, barcode characters, arity)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Payload length does not fit the symbology
    #[error("Invalid {symbology} payload length: expected {expected}, got {actual}")]
    InvalidPayloadLength {
        symbology: Symbology,
        expected: usize,
        actual: usize,
    },

    /// Character the symbology cannot express
    #[error("Unsupported character {ch:?} for {symbology}")]
    UnsupportedCharacter { symbology: Symbology, ch: char },

    /// Print collaborator failed or did not report success
    #[error("Print error: {0}")]
    PrintDispatch(String),

    /// Print collaborator did not finish in time
    #[error("Print timed out after {0:?}")]
    PrintTimeout(Duration),

    /// Printer configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Image processing error
    #[error("Image error: {0}")]
    Image(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
