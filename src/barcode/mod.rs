//! # Barcode Encoding
//!
//! Turns a validated payload into the module sequence of a full symbol:
//! start/guard, data, check character, stop/guard.
//!
//! ## Supported Symbologies
//!
//! | Symbology | Payload | Modules |
//! |-----------|---------|---------|
//! | EAN-13 | 13 digits (check digit included) | 95 |
//! | Code 128 Set A | space..underscore | 11 × (n + 3) + 2 |
//!
//! ## Example
//!
//! ```
//! use etiquette::barcode::{self, Symbology};
//!
//! let pattern = barcode::encode(Symbology::Ean13, "4006381333931").unwrap();
//! assert_eq!(pattern.len(), 95);
//!
//! let pattern = barcode::encode(Symbology::Code128A, "ABC123").unwrap();
//! assert_eq!(pattern.len(), 11 * 9 + 2);
//! ```

pub mod checksum;
pub mod code128;
pub mod ean13;
pub mod tables;

use std::fmt;

use crate::error::LabelError;
use tables::Pattern;

/// Barcode standard selected once per label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbology {
    Ean13,
    Code128A,
}

impl Symbology {
    pub fn name(self) -> &'static str {
        match self {
            Symbology::Ean13 => "EAN-13",
            Symbology::Code128A => "Code 128-A",
        }
    }

    /// Default module width in pixels.
    ///
    /// EAN-13 is drawn wider since it is fixed at 95 modules; Code 128 grows
    /// with the payload.
    pub fn module_width(self) -> u32 {
        match self {
            Symbology::Ean13 => 5,
            Symbology::Code128A => 3,
        }
    }

    /// Human-readable text printed under the bars.
    ///
    /// EAN-13 is grouped as `D DDDDDD DDDDDD`; anything else is shown as-is.
    pub fn format_human_readable(self, payload: &str) -> String {
        match self {
            Symbology::Ean13 if payload.len() == 13 && payload.is_ascii() => {
                format!("{} {} {}", &payload[..1], &payload[1..7], &payload[7..])
            }
            _ => payload.to_string(),
        }
    }
}

impl fmt::Display for Symbology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Ordered bar/space modules of one symbol (true = bar).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModulePattern {
    modules: Vec<bool>,
}

impl ModulePattern {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            modules: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push(&mut self, pattern: Pattern) {
        self.modules.extend(pattern.modules());
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    /// Contiguous bars as `(first_module, width_in_modules)`.
    pub fn bar_runs(&self) -> Vec<(usize, usize)> {
        let mut runs = Vec::new();
        let mut start = None;
        for (i, &bar) in self.modules.iter().enumerate() {
            match (bar, start) {
                (true, None) => start = Some(i),
                (false, Some(s)) => {
                    runs.push((s, i - s));
                    start = None;
                }
                _ => {}
            }
        }
        if let Some(s) = start {
            runs.push((s, self.modules.len() - s));
        }
        runs
    }

    /// Render as a string of `1` (bar) and `0` (space).
    pub fn to_bit_string(&self) -> String {
        self.modules
            .iter()
            .map(|&bar| if bar { '1' } else { '0' })
            .collect()
    }
}

/// Encode a payload into its full module sequence.
///
/// EAN-13 requires exactly 13 digits. Code 128-A never fails: glyphs outside
/// Set A are drawn as spaces.
pub fn encode(symbology: Symbology, payload: &str) -> Result<ModulePattern, LabelError> {
    match symbology {
        Symbology::Ean13 => ean13::encode(payload),
        Symbology::Code128A => Ok(code128::encode(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_human_readable() {
        assert_eq!(
            Symbology::Ean13.format_human_readable("4006381333931"),
            "4 006381 333931"
        );
        assert_eq!(Symbology::Ean13.format_human_readable("123"), "123");
        assert_eq!(
            Symbology::Code128A.format_human_readable("INTAB12CD34"),
            "INTAB12CD34"
        );
    }

    #[test]
    fn test_bar_runs() {
        let mut pattern = ModulePattern::default();
        pattern.push(Pattern::new(0b1101, 4));
        pattern.push(Pattern::new(0b0011, 4));
        assert_eq!(pattern.to_bit_string(), "11010011");
        assert_eq!(pattern.bar_runs(), vec![(0, 2), (3, 1), (6, 2)]);
    }

    #[test]
    fn test_encode_is_pure() {
        for (symbology, payload) in [
            (Symbology::Ean13, "5901234123457"),
            (Symbology::Code128A, "PJJ123C"),
        ] {
            let a = encode(symbology, payload).unwrap();
            let b = encode(symbology, payload).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Symbology::Ean13.to_string(), "EAN-13");
        assert_eq!(Symbology::Code128A.to_string(), "Code 128-A");
    }
}
