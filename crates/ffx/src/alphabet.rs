//! [`Alphabet`]: symbol ↔ digit mapping with fixed-length validation.

use std::collections::HashMap;

use crate::error::FfxError;

/// Decimal digits, the alphabet behind [`crate::IntegerCodec`].
pub const DECIMAL: &str = "0123456789";

/// Smallest sequence length the Feistel split accepts.
pub const MIN_LENGTH: usize = 2;

/// An ordered set of distinct symbols bound to a fixed sequence length.
///
/// `radix` is the number of symbols; symbol `k` of the alphabet maps to digit `k`.
#[derive(Debug, Clone)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
    length: usize,
}

impl Alphabet {
    /// Build an alphabet from `symbols` for sequences of exactly `length` symbols.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::InvalidParameter`] if the alphabet has fewer than two
    /// symbols, repeats a symbol, or `length` is below [`MIN_LENGTH`].
    pub fn new(symbols: &str, length: usize) -> Result<Self, FfxError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(FfxError::InvalidParameter(format!(
                "alphabet needs at least 2 symbols, got {}",
                symbols.len()
            )));
        }
        if length < MIN_LENGTH {
            return Err(FfxError::InvalidParameter(format!(
                "length must be at least {MIN_LENGTH}, got {length}"
            )));
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (k, &c) in symbols.iter().enumerate() {
            if index.insert(c, k).is_some() {
                return Err(FfxError::InvalidParameter(format!(
                    "alphabet repeats symbol {c:?}"
                )));
            }
        }

        Ok(Self {
            symbols,
            index,
            length,
        })
    }

    /// Number of symbols.
    pub fn radix(&self) -> usize {
        self.symbols.len()
    }

    /// Fixed sequence length.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Map `value` to digits.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::LengthMismatch`] if `value` is not exactly
    /// [`Alphabet::length`] symbols long, and [`FfxError::NonAlphabetCharacter`]
    /// naming the first symbol that is not in the alphabet.
    pub fn pack(&self, value: &str) -> Result<Vec<usize>, FfxError> {
        let actual = value.chars().count();
        if actual != self.length {
            return Err(FfxError::LengthMismatch {
                expected: self.length,
                actual,
            });
        }

        value
            .chars()
            .map(|c| {
                self.index
                    .get(&c)
                    .copied()
                    .ok_or(FfxError::NonAlphabetCharacter(c))
            })
            .collect()
    }

    /// Map digits back to symbols. Digits must come from [`Alphabet::pack`] or the cipher.
    pub fn unpack(&self, digits: &[usize]) -> String {
        digits.iter().map(|&d| self.symbols[d]).collect()
    }
}
