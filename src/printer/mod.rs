//! # Printer Module
//!
//! Printer configuration and print job submission.
//!
//! ## Modules
//!
//! - [`config`]: collaborator command and printer parameters
//! - [`dispatch`]: runs the collaborator and interprets its output

pub mod config;
pub mod dispatch;

pub use config::PrinterConfig;
pub use dispatch::Dispatcher;
