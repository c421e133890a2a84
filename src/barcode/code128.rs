//! Code 128 Set A symbol encoding.
//!
//! ```text
//! START A | data symbols | check symbol | STOP (+ termination bar)
//!   11    |   11 × n     |      11      |  13
//! ```

use tracing::warn;

use super::checksum::{StartCode, code128_checksum_values};
use super::tables::{
    CODE128_START_A, CODE128_STOP, CODE128_SYMBOL_WIDTH, code128_value_pattern, code128a_value,
};
use super::ModulePattern;

/// Value drawn in place of glyphs Set A cannot express (space).
const SUBSTITUTE_VALUE: u8 = 0;

/// Width estimate used for layout: start, data, check and stop at 11 modules each.
pub fn estimated_module_count(payload_len: usize) -> usize {
    (payload_len + 3) * CODE128_SYMBOL_WIDTH as usize
}

/// Exact module count for a payload of `payload_len` characters.
pub fn module_count(payload_len: usize) -> usize {
    estimated_module_count(payload_len) + 2
}

/// Encode a payload using Code Set A.
///
/// Characters outside Set A are replaced by a space and the check symbol is
/// computed over what is actually drawn, so the result always scans.
pub fn encode(payload: &str) -> ModulePattern {
    let values: Vec<u8> = payload
        .chars()
        .map(|ch| {
            code128a_value(ch).unwrap_or_else(|| {
                warn!(?ch, "character not in Code 128 Set A, drawing a space");
                SUBSTITUTE_VALUE
            })
        })
        .collect();

    let check = code128_checksum_values(values.iter().copied(), StartCode::A);

    let mut pattern = ModulePattern::with_capacity(module_count(values.len()));
    pattern.push(CODE128_START_A);
    for value in values.into_iter().chain(std::iter::once(check)) {
        // values are at most 102: set A glyphs stop at 63, check is mod 103
        if let Some(symbol) = code128_value_pattern(value) {
            pattern.push(symbol);
        }
    }
    pattern.push(CODE128_STOP);
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_character() {
        // start A, 'A' (33), check 33, stop
        let pattern = encode("A");
        assert_eq!(
            pattern.to_bit_string(),
            "11010000100\
             10100011000\
             10100011000\
             1100011101011"
        );
    }

    #[test]
    fn test_abc123_checksum_symbol() {
        let bits = encode("ABC123").to_bit_string();
        let check_start = 11 * 7;
        // value 66
        assert_eq!(&bits[check_start..check_start + 11], "10010000110");
        assert_eq!(&bits[bits.len() - 13..], "1100011101011");
    }

    #[test]
    fn test_module_count_matches_formula() {
        for payload in ["", "A", "INTAB12CD34", "HELLO WORLD", "0123456789_-?"] {
            let n = payload.chars().count();
            let pattern = encode(payload);
            assert_eq!(pattern.len(), module_count(n), "payload {payload:?}");
            // data + start + check + stop symbols, stop carries the 2-module bar
            assert_eq!(pattern.len(), 11 * (1 + n + 1 + 1) + 2);
            assert_eq!(estimated_module_count(n) + 2, pattern.len());
        }
    }

    #[test]
    fn test_unsupported_glyph_becomes_space() {
        let substituted = encode("AbC");
        let explicit = encode("A C");
        assert_eq!(substituted, explicit);
        assert_eq!(substituted.len(), module_count(3));
    }

    #[test]
    fn test_non_ascii_keeps_width() {
        let pattern = encode("Ä€");
        assert_eq!(pattern.len(), module_count(2));
    }

    #[test]
    fn test_matches_barcoders() {
        use barcoders::sym::code128::Code128;

        for payload in ["ABC123", "HELLO", "INT0A9Z8Y7X", "PRICE 4.99"] {
            let reference = Code128::new(&format!("\u{00C0}{payload}")).unwrap().encode();
            let ours: Vec<u8> = encode(payload).modules().iter().map(|&b| b as u8).collect();
            assert_eq!(ours, reference, "payload {payload}");
        }
    }
}
