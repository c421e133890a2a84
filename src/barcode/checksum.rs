//! # Check Characters
//!
//! - EAN-13: mod 10 over the first 12 digits, weights 1,3,1,3,...
//! - Code 128: mod 103 over the start value plus each symbol value times
//!   its 1-based position.

use super::Symbology;
use crate::error::LabelError;

/// Code 128 start code; its value seeds the checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartCode {
    A,
    B,
    C,
}

impl StartCode {
    pub fn value(self) -> u32 {
        match self {
            StartCode::A => 103,
            StartCode::B => 104,
            StartCode::C => 105,
        }
    }
}

/// Compute the EAN-13 check digit for exactly 12 decimal digits.
///
/// ```
/// use etiquette::barcode::checksum::ean13_checksum;
///
/// assert_eq!(ean13_checksum("400638133393").unwrap(), 1);
/// ```
pub fn ean13_checksum(digits12: &str) -> Result<u8, LabelError> {
    let count = digits12.chars().count();
    if count != 12 {
        return Err(LabelError::InvalidPayloadLength {
            symbology: Symbology::Ean13,
            expected: 12,
            actual: count,
        });
    }

    let mut digits = [0u8; 12];
    for (slot, ch) in digits.iter_mut().zip(digits12.chars()) {
        let d = ch.to_digit(10).ok_or(LabelError::UnsupportedCharacter {
            symbology: Symbology::Ean13,
            ch,
        })?;
        *slot = d as u8;
    }

    Ok(ean13_check_digit(&digits))
}

/// EAN-13 check digit over digit values (each 0..=9).
pub fn ean13_check_digit(digits: &[u8; 12]) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| if i % 2 == 0 { d as u32 } else { d as u32 * 3 })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Symbol value of a printable ASCII character (32..=126) for checksum purposes.
pub fn code128_char_value(ch: char) -> Result<u8, LabelError> {
    match ch {
        ' '..='~' => Ok(ch as u8 - 32),
        _ => Err(LabelError::UnsupportedCharacter {
            symbology: Symbology::Code128A,
            ch,
        }),
    }
}

/// Compute the Code 128 check value for a payload.
///
/// Fails on characters outside printable ASCII instead of coercing them.
pub fn code128_checksum(payload: &str, start: StartCode) -> Result<u8, LabelError> {
    let values = payload
        .chars()
        .map(code128_char_value)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(code128_checksum_values(values, start))
}

/// Checksum over already-resolved symbol values. Result is in 0..=102.
pub fn code128_checksum_values(values: impl IntoIterator<Item = u8>, start: StartCode) -> u8 {
    let weighted: u32 = values
        .into_iter()
        .enumerate()
        .map(|(i, v)| v as u32 * (i as u32 + 1) % 103)
        .fold(start.value() % 103, |acc, term| (acc + term) % 103);
    weighted as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ean13_reference_vector() {
        assert_eq!(ean13_checksum("400638133393").unwrap(), 1);
        assert_eq!(ean13_checksum("590123412345").unwrap(), 7);
        assert_eq!(ean13_checksum("123456789012").unwrap(), 8);
    }

    #[test]
    fn test_ean13_check_digit_over_values() {
        assert_eq!(ean13_check_digit(&[4, 0, 0, 6, 3, 8, 1, 3, 3, 3, 9, 3]), 1);
        assert_eq!(ean13_check_digit(&[2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]), 8);
        assert_eq!(ean13_check_digit(&[0; 12]), 0);
    }

    #[test]
    fn test_ean13_zero_remainder_gives_zero() {
        // 2 * 1 = 2 -> (10 - 2) % 10 = 8; all zeros -> 0
        assert_eq!(ean13_checksum("000000000000").unwrap(), 0);
        assert_eq!(ean13_checksum("200000000000").unwrap(), 8);
    }

    #[test]
    fn test_ean13_self_consistency() {
        for seed in 0..500u64 {
            let digits: String = (0..12)
                .map(|i| char::from(b'0' + ((seed * 7919 + i * 104729) % 10) as u8))
                .collect();
            let check = ean13_checksum(&digits).unwrap();
            assert!(check <= 9);
            let full = format!("{digits}{check}");
            assert_eq!(ean13_checksum(&full[..12]).unwrap(), check);
        }
    }

    #[test]
    fn test_ean13_rejects_wrong_length() {
        assert!(matches!(
            ean13_checksum("12345"),
            Err(LabelError::InvalidPayloadLength { expected: 12, actual: 5, .. })
        ));
    }

    #[test]
    fn test_ean13_rejects_non_digit() {
        assert!(matches!(
            ean13_checksum("12345678901X"),
            Err(LabelError::UnsupportedCharacter { ch: 'X', .. })
        ));
    }

    #[test]
    fn test_code128_checksum_known_values() {
        assert_eq!(code128_checksum("A", StartCode::A).unwrap(), 33);
        assert_eq!(code128_checksum("ABC123", StartCode::A).unwrap(), 66);
        assert_eq!(code128_checksum("HELLO", StartCode::A).unwrap(), 39);
        assert_eq!(code128_checksum("", StartCode::A).unwrap(), 0);
        assert_eq!(code128_checksum("", StartCode::B).unwrap(), 1);
        assert_eq!(code128_checksum("", StartCode::C).unwrap(), 2);
    }

    #[test]
    fn test_code128_checksum_in_range() {
        let long = "~".repeat(200);
        assert!(code128_checksum(&long, StartCode::A).unwrap() <= 102);
    }

    #[test]
    fn test_code128_rejects_non_printable() {
        assert!(matches!(
            code128_checksum("AB\u{7f}", StartCode::A),
            Err(LabelError::UnsupportedCharacter { ch: '\u{7f}', .. })
        ));
        assert!(code128_checksum("é", StartCode::A).is_err());
    }
}
