//! # Symbol Tables
//!
//! Static module patterns for EAN-13 and Code 128 Set A.
//!
//! Patterns are stored as integers read most-significant bit first, one bit
//! per module (1 = bar, 0 = space). The width travels alongside the value so
//! leading spaces are not lost.
//!
//! ## EAN-13 digit sets
//!
//! | Set | Used for | Parity |
//! |-----|----------|--------|
//! | L (A) | left half | odd |
//! | G (B) | left half | even |
//! | R (C) | right half | - |
//!
//! The first digit is not drawn; it selects which of L/G each of the six
//! left-half digits uses (see [`EAN13_PARITY`]).
//!
//! ## Code 128
//!
//! [`CODE128_PATTERNS`] holds symbol values 0..=102. In Set A, printable
//! characters space (32) through underscore (95) map to value `ascii - 32`.
//! Start and stop symbols are separate constants and are never looked up
//! through the value table.

/// A fixed run of modules, most significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub bits: u16,
    pub width: u8,
}

impl Pattern {
    pub const fn new(bits: u16, width: u8) -> Self {
        Self { bits, width }
    }

    /// Iterate modules from left to right (true = bar).
    pub fn modules(self) -> impl Iterator<Item = bool> {
        (0..self.width).rev().map(move |i| (self.bits >> i) & 1 == 1)
    }
}

// ============================================================================
// EAN-13
// ============================================================================

/// Module width of every EAN-13 digit.
pub const EAN13_DIGIT_WIDTH: u8 = 7;

pub const EAN13_LEFT_GUARD: Pattern = Pattern::new(0b101, 3);
pub const EAN13_CENTER_GUARD: Pattern = Pattern::new(0b01010, 5);
pub const EAN13_RIGHT_GUARD: Pattern = Pattern::new(0b101, 3);

/// Set L (labelled A): odd parity, left half.
pub const EAN13_L: [u8; 10] = [
    0b0001101, 0b0011001, 0b0010011, 0b0111101, 0b0100011,
    0b0110001, 0b0101111, 0b0111011, 0b0110111, 0b0001011,
];

/// Set G (labelled B): even parity, left half.
pub const EAN13_G: [u8; 10] = [
    0b0100111, 0b0110011, 0b0011011, 0b0100001, 0b0011101,
    0b0111001, 0b0000101, 0b0010001, 0b0001001, 0b0010111,
];

/// Set R (labelled C): right half.
pub const EAN13_R: [u8; 10] = [
    0b1110010, 0b1100110, 0b1101100, 0b1000010, 0b1011100,
    0b1001110, 0b1010000, 0b1000100, 0b1001000, 0b1110100,
];

/// Which left-half set a digit position draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeftSet {
    L,
    G,
}

use LeftSet::{G, L};

/// First digit → set used by each of the six left-half digits.
pub const EAN13_PARITY: [[LeftSet; 6]; 10] = [
    [L, L, L, L, L, L], // 0
    [L, L, G, L, G, G], // 1
    [L, L, G, G, L, G], // 2
    [L, L, G, G, G, L], // 3
    [L, G, L, L, G, G], // 4
    [L, G, G, L, L, G], // 5
    [L, G, G, G, L, L], // 6
    [L, G, L, G, L, G], // 7
    [L, G, L, G, G, L], // 8
    [L, G, G, L, G, L], // 9
];

pub fn ean13_left(digit: u8, set: LeftSet) -> Pattern {
    let bits = match set {
        LeftSet::L => EAN13_L[digit as usize],
        LeftSet::G => EAN13_G[digit as usize],
    };
    Pattern::new(bits as u16, EAN13_DIGIT_WIDTH)
}

pub fn ean13_right(digit: u8) -> Pattern {
    Pattern::new(EAN13_R[digit as usize] as u16, EAN13_DIGIT_WIDTH)
}

// ============================================================================
// CODE 128
// ============================================================================

/// Module width of every Code 128 symbol except stop.
pub const CODE128_SYMBOL_WIDTH: u8 = 11;

/// Number of addressable symbol values (0..=102).
pub const CODE128_VALUE_COUNT: usize = 103;

pub const CODE128_START_A: Pattern = Pattern::new(0b11010000100, 11);

/// Stop symbol including the trailing termination bar.
pub const CODE128_STOP: Pattern = Pattern::new(0b1100011101011, 13);

/// Symbol value → 11-module pattern.
#[rustfmt::skip]
pub const CODE128_PATTERNS: [u16; CODE128_VALUE_COUNT] = [
    0b11011001100, 0b11001101100, 0b11001100110, 0b10010011000, // 0
    0b10010001100, 0b10001001100, 0b10011001000, 0b10011000100, // 4
    0b10001100100, 0b11001001000, 0b11001000100, 0b11000100100, // 8
    0b10110011100, 0b10011011100, 0b10011001110, 0b10111001100, // 12
    0b10011101100, 0b10011100110, 0b11001110010, 0b11001011100, // 16
    0b11001001110, 0b11011100100, 0b11001110100, 0b11101101110, // 20
    0b11101001100, 0b11100101100, 0b11100100110, 0b11101100100, // 24
    0b11100110100, 0b11100110010, 0b11011011000, 0b11011000110, // 28
    0b11000110110, 0b10100011000, 0b10001011000, 0b10001000110, // 32
    0b10110001000, 0b10001101000, 0b10001100010, 0b11010001000, // 36
    0b11000101000, 0b11000100010, 0b10110111000, 0b10110001110, // 40
    0b10001101110, 0b10111011000, 0b10111000110, 0b10001110110, // 44
    0b11101110110, 0b11010001110, 0b11000101110, 0b11011101000, // 48
    0b11011100010, 0b11011101110, 0b11101011000, 0b11101000110, // 52
    0b11100010110, 0b11101101000, 0b11101100010, 0b11100011010, // 56
    0b11101111010, 0b11001000010, 0b11110001010, 0b10100110000, // 60
    0b10100001100, 0b10010110000, 0b10010000110, 0b10000101100, // 64
    0b10000100110, 0b10110010000, 0b10110000100, 0b10011010000, // 68
    0b10011000010, 0b10000110100, 0b10000110010, 0b11000010010, // 72
    0b11001010000, 0b11110111010, 0b11000010100, 0b10001111010, // 76
    0b10100111100, 0b10010111100, 0b10010011110, 0b10111100100, // 80
    0b10011110100, 0b10011110010, 0b11110100100, 0b11110010100, // 84
    0b11110010010, 0b11011011110, 0b11011110110, 0b11110110110, // 88
    0b10101111000, 0b10100011110, 0b10001011110, 0b10111101000, // 92
    0b10111100010, 0b11110101000, 0b11110100010, 0b10111011110, // 96
    0b10111101110, 0b11101011110, 0b11110101110,                // 100
];

/// Pattern for a symbol value. Values past 102 are not symbol data.
pub fn code128_value_pattern(value: u8) -> Option<Pattern> {
    CODE128_PATTERNS
        .get(value as usize)
        .map(|&bits| Pattern::new(bits, CODE128_SYMBOL_WIDTH))
}

/// Set A symbol value for a printable glyph (space through underscore).
pub fn code128a_value(ch: char) -> Option<u8> {
    match ch {
        ' '..='_' => Some(ch as u8 - 32),
        _ => None,
    }
}

/// Set A glyph → pattern.
pub fn code128a_pattern(ch: char) -> Option<Pattern> {
    code128a_value(ch).and_then(code128_value_pattern)
}
