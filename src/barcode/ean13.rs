//! EAN-13 symbol encoding.
//!
//! ```text
//! 101 | 6 × L/G (parity from first digit) | 01010 | 6 × R | 101
//!  3  |              42                   |   5   |  42   |  3   = 95 modules
//! ```

use super::tables::{
    EAN13_CENTER_GUARD, EAN13_LEFT_GUARD, EAN13_PARITY, EAN13_RIGHT_GUARD, ean13_left, ean13_right,
};
use super::{ModulePattern, Symbology};
use crate::error::LabelError;

/// Total modules in an EAN-13 symbol without quiet zones.
pub const MODULE_COUNT: usize = 95;

/// Encode a 13-digit EAN-13 payload (check digit included).
pub fn encode(payload: &str) -> Result<ModulePattern, LabelError> {
    let digits = payload
        .chars()
        .map(|ch| {
            ch.to_digit(10).map(|d| d as u8).ok_or(LabelError::UnsupportedCharacter {
                symbology: Symbology::Ean13,
                ch,
            })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    if digits.len() != 13 {
        return Err(LabelError::InvalidPayloadLength {
            symbology: Symbology::Ean13,
            expected: 13,
            actual: digits.len(),
        });
    }

    let parity = EAN13_PARITY[digits[0] as usize];
    let mut pattern = ModulePattern::with_capacity(MODULE_COUNT);

    pattern.push(EAN13_LEFT_GUARD);
    for (&digit, &set) in digits[1..7].iter().zip(parity.iter()) {
        pattern.push(ean13_left(digit, set));
    }
    pattern.push(EAN13_CENTER_GUARD);
    for &digit in &digits[7..13] {
        pattern.push(ean13_right(digit));
    }
    pattern.push(EAN13_RIGHT_GUARD);

    Ok(pattern)
}
