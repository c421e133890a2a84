//! # Code Selection
//!
//! Picks the symbology and payload for a label from the raw barcode argument.
//!
//! | Input | Symbology | Payload |
//! |-------|-----------|---------|
//! | empty | from generator | generated internal code |
//! | 12 digits | EAN-13 | input + check digit |
//! | 13 digits | EAN-13 | input |
//! | other digit count | Code 128-A | input |
//! | letters and digits | Code 128-A | input uppercased |
//!
//! Anything else is rejected before selection.

use rand::Rng;
use rand::rngs::ThreadRng;
use tracing::debug;

use crate::barcode::Symbology;
use crate::barcode::checksum::{ean13_check_digit, ean13_checksum};
use crate::error::LabelError;

/// Prefix of generated Code 128 internal codes.
pub const INTERNAL_PREFIX: &str = "INT";

/// Random characters after [`INTERNAL_PREFIX`].
pub const INTERNAL_RANDOM_LEN: usize = 8;

/// GS1 prefix digit reserved for in-store numbering.
pub const INTERNAL_EAN_PREFIX: u8 = 2;

const INTERNAL_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Symbology plus the payload that will be encoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub symbology: Symbology,
    pub payload: String,
}

impl Selection {
    pub fn new(symbology: Symbology, payload: impl Into<String>) -> Self {
        Self {
            symbology,
            payload: payload.into(),
        }
    }
}

/// Produces a code when the user supplies none.
pub trait CodeGenerator {
    fn generate(&mut self) -> Selection;
}

impl<F: FnMut() -> Selection> CodeGenerator for F {
    fn generate(&mut self) -> Selection {
        self()
    }
}

/// Shape of generated internal codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InternalStyle {
    /// `INT` + 8 of `[A-Z0-9]`
    #[default]
    Code128,
    /// `2` + 11 digits + check digit
    Ean13,
}

/// Random internal code generator backed by any [`Rng`].
pub struct RandomInternalCode<R = ThreadRng> {
    rng: R,
    style: InternalStyle,
}

impl RandomInternalCode<ThreadRng> {
    pub fn new(style: InternalStyle) -> Self {
        Self::with_rng(rand::rng(), style)
    }
}

impl Default for RandomInternalCode<ThreadRng> {
    fn default() -> Self {
        Self::new(InternalStyle::default())
    }
}

impl<R: Rng> RandomInternalCode<R> {
    pub fn with_rng(rng: R, style: InternalStyle) -> Self {
        Self { rng, style }
    }

    fn code128(&mut self) -> Selection {
        let mut payload = String::from(INTERNAL_PREFIX);
        for _ in 0..INTERNAL_RANDOM_LEN {
            let idx = self.rng.random_range(0..INTERNAL_CHARSET.len());
            payload.push(INTERNAL_CHARSET[idx] as char);
        }
        Selection::new(Symbology::Code128A, payload)
    }

    fn ean13(&mut self) -> Selection {
        let mut digits = [0u8; 12];
        digits[0] = INTERNAL_EAN_PREFIX;
        for d in &mut digits[1..] {
            *d = self.rng.random_range(0..10u8);
        }
        let check = ean13_check_digit(&digits);
        let payload = digits
            .iter()
            .chain(std::iter::once(&check))
            .map(|&d| char::from(b'0' + d))
            .collect::<String>();
        Selection::new(Symbology::Ean13, payload)
    }
}

impl<R: Rng> CodeGenerator for RandomInternalCode<R> {
    fn generate(&mut self) -> Selection {
        match self.style {
            InternalStyle::Code128 => self.code128(),
            InternalStyle::Ean13 => self.ean13(),
        }
    }
}

/// Boundary check: letters and digits only.
pub fn validate_barcode_input(raw: &str) -> Result<(), LabelError> {
    match raw.chars().find(|c| !c.is_ascii_alphanumeric()) {
        Some(ch) => Err(LabelError::InvalidInput(format!(
            "Barcode must contain only letters and digits, found {ch:?}"
        ))),
        None => Ok(()),
    }
}

/// Chooses symbology and payload from user input.
pub struct CodeSelector<G = RandomInternalCode> {
    generator: G,
}

impl Default for CodeSelector<RandomInternalCode> {
    fn default() -> Self {
        Self::new(RandomInternalCode::default())
    }
}

impl<G: CodeGenerator> CodeSelector<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub fn select(&mut self, raw: Option<&str>) -> Result<Selection, LabelError> {
        let raw = raw.unwrap_or_default();
        let selection = if raw.is_empty() {
            self.generator.generate()
        } else {
            validate_barcode_input(raw)?;
            select_from_input(raw)?
        };
        debug!(
            symbology = %selection.symbology,
            payload = %selection.payload,
            "selected barcode"
        );
        Ok(selection)
    }
}

fn select_from_input(raw: &str) -> Result<Selection, LabelError> {
    let selection = if raw.chars().all(|c| c.is_ascii_digit()) {
        match raw.len() {
            12 => Selection::new(Symbology::Ean13, format!("{raw}{}", ean13_checksum(raw)?)),
            13 => Selection::new(Symbology::Ean13, raw),
            _ => Selection::new(Symbology::Code128A, raw),
        }
    } else {
        Selection::new(Symbology::Code128A, raw.to_ascii_uppercase())
    };
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    fn fixed() -> CodeSelector<impl CodeGenerator> {
        CodeSelector::new(|| Selection::new(Symbology::Code128A, "INTFIXED00"))
    }

    fn is_code128_internal(payload: &str) -> bool {
        payload.len() == 11
            && payload.starts_with(INTERNAL_PREFIX)
            && payload[3..]
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
    }

    #[test]
    fn test_twelve_digits_get_check_digit() {
        let sel = fixed().select(Some("123456789012")).unwrap();
        assert_eq!(sel.symbology, Symbology::Ean13);
        assert_eq!(sel.payload.len(), 13);
        let check = ean13_checksum(&sel.payload[..12]).unwrap();
        assert_eq!(sel.payload, format!("123456789012{check}"));
        assert_eq!(sel.payload, "1234567890128");
    }

    #[test]
    fn test_thirteen_digits_used_as_is() {
        let sel = fixed().select(Some("4006381333931")).unwrap();
        assert_eq!(sel, Selection::new(Symbology::Ean13, "4006381333931"));
    }

    #[test]
    fn test_other_digit_lengths_fall_back_to_code128() {
        let sel = fixed().select(Some("210012345")).unwrap();
        assert_eq!(sel, Selection::new(Symbology::Code128A, "210012345"));
        let sel = fixed().select(Some("12345678901234")).unwrap();
        assert_eq!(sel.symbology, Symbology::Code128A);
    }

    #[test]
    fn test_alphanumeric_is_uppercased() {
        let sel = fixed().select(Some("ABC123")).unwrap();
        assert_eq!(sel, Selection::new(Symbology::Code128A, "ABC123"));
        let sel = fixed().select(Some("abc123")).unwrap();
        assert_eq!(sel.payload, "ABC123");
    }

    #[test]
    fn test_empty_uses_generator() {
        assert_eq!(fixed().select(None).unwrap().payload, "INTFIXED00");
        assert_eq!(fixed().select(Some("")).unwrap().payload, "INTFIXED00");
    }

    #[test]
    fn test_rejects_punctuation() {
        for bad in ["12-34", "AB C", "ÄBC", "42!"] {
            assert!(
                matches!(fixed().select(Some(bad)), Err(LabelError::InvalidInput(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_random_code128_unique_and_valid() {
        let mut selector = CodeSelector::default();
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let sel = selector.select(None).unwrap();
            assert_eq!(sel.symbology, Symbology::Code128A);
            assert!(is_code128_internal(&sel.payload), "{}", sel.payload);
            assert!(seen.insert(sel.payload));
        }
    }

    #[test]
    fn test_random_ean13_valid() {
        let mut selector = CodeSelector::new(RandomInternalCode::new(InternalStyle::Ean13));
        let mut seen = HashSet::new();
        for _ in 0..1000 {
            let sel = selector.select(None).unwrap();
            assert_eq!(sel.symbology, Symbology::Ean13);
            assert_eq!(sel.payload.len(), 13);
            assert!(sel.payload.starts_with('2'));
            let check = ean13_checksum(&sel.payload[..12]).unwrap();
            assert_eq!(sel.payload[12..], check.to_string());
            assert!(crate::barcode::encode(sel.symbology, &sel.payload).is_ok());
            seen.insert(sel.payload);
        }
        // 10^11 space; a collision here means the generator is broken
        assert_eq!(seen.len(), 1000);
    }

    #[test]
    fn test_seeded_generator_is_deterministic() {
        let a = RandomInternalCode::with_rng(StdRng::seed_from_u64(7), InternalStyle::Code128)
            .generate();
        let b = RandomInternalCode::with_rng(StdRng::seed_from_u64(7), InternalStyle::Code128)
            .generate();
        assert_eq!(a, b);
        assert!(is_code128_internal(&a.payload));
    }

    #[test]
    fn test_seeded_ean13_always_thirteen_digits() {
        let mut generator =
            RandomInternalCode::with_rng(StdRng::seed_from_u64(42), InternalStyle::Ean13);
        for _ in 0..200 {
            let sel = generator.generate();
            assert_eq!(sel.payload.len(), 13, "{}", sel.payload);
            assert!(sel.payload.bytes().all(|b| b.is_ascii_digit()));
            let check = ean13_checksum(&sel.payload[..12]).unwrap();
            assert_eq!(sel.payload[12..], check.to_string());
        }
    }
}
