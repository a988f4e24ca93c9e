//! Feistel cipher engine over arbitrary-radix digit sequences.
//!
//! The input is split into `A` (first `n / 2` digits) and `B` (the rest). For
//! odd `n`, `A` is one digit shorter than `B`. Every round computes
//! `C = A + F(i, B)` digit-wise and shifts `(A, B) <- (B, C)`, so the two
//! halves keep their unequal lengths throughout. After an odd number of rounds
//! the longer half comes first in the ciphertext, and decryption splits there.
//! The cipher is deterministic: there is no nonce or tweak.

use tracing::debug;

use crate::arith;
use crate::error::FfxError;
use crate::key::SecretKey;
use crate::round::{HashAlgorithm, RoundFunction};

/// Number of Feistel rounds used when the caller does not override it.
pub const DEFAULT_ROUNDS: u32 = 10;

/// Keyed FFX cipher engine.
///
/// Immutable after construction; `&Ffx` can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct Ffx {
    round_fn: RoundFunction,
    rounds: u32,
}

impl Ffx {
    /// Create an engine with [`DEFAULT_ROUNDS`] rounds and HMAC-SHA-1.
    pub fn new(key: impl Into<SecretKey>) -> Self {
        Self {
            round_fn: RoundFunction::new(key.into(), HashAlgorithm::default()),
            rounds: DEFAULT_ROUNDS,
        }
    }

    /// Override the number of rounds.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::InvalidParameter`] if `rounds` is zero.
    pub fn with_rounds(mut self, rounds: u32) -> Result<Self, FfxError> {
        if rounds == 0 {
            return Err(FfxError::InvalidParameter("rounds must be > 0".into()));
        }
        self.rounds = rounds;
        Ok(self)
    }

    /// Override the hash used by the round function.
    pub fn with_hash(self, hash: HashAlgorithm) -> Self {
        Self {
            round_fn: self.round_fn.with_hash(hash),
            rounds: self.rounds,
        }
    }

    /// Number of Feistel rounds.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Hash used by the round function.
    pub fn hash(&self) -> HashAlgorithm {
        self.round_fn.hash()
    }

    /// Encrypt `digits`, each in `[0, radix)`, into a sequence of the same length.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::InvalidParameter`] if `radix < 2`, if fewer than two
    /// digits are supplied, or if a digit is not below `radix`.
    /// Returns [`FfxError::EncodingFailure`] if a round input overflows a 32-bit word.
    pub fn encrypt(&self, radix: usize, digits: &[usize]) -> Result<Vec<usize>, FfxError> {
        check_input(radix, digits)?;
        let (a, b) = split(digits);
        let (mut a, mut b) = (a.to_vec(), b.to_vec());

        for i in 0..self.rounds {
            let mixed = self.round_fn.apply(radix, i, &b, a.len())?;
            let c = arith::add(radix, &a, &mixed);
            a = std::mem::replace(&mut b, c);
        }

        debug!(radix, len = digits.len(), rounds = self.rounds, "ffx encrypt");
        a.extend_from_slice(&b);
        Ok(a)
    }

    /// Decrypt `digits`; the exact inverse of [`Ffx::encrypt`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Ffx::encrypt`].
    pub fn decrypt(&self, radix: usize, digits: &[usize]) -> Result<Vec<usize>, FfxError> {
        check_input(radix, digits)?;
        let (a, b) = digits.split_at(self.ciphertext_split(digits.len()));
        let (mut a, mut b) = (a.to_vec(), b.to_vec());

        for i in (0..self.rounds).rev() {
            // (B, C) <- (A, B); then A = C - F(i, B).
            let c = std::mem::replace(&mut b, a);
            let mixed = self.round_fn.apply(radix, i, &b, c.len())?;
            a = arith::sub(radix, &c, &mixed);
        }

        debug!(radix, len = digits.len(), rounds = self.rounds, "ffx decrypt");
        a.extend_from_slice(&b);
        Ok(a)
    }

    /// Length of the first half of a ciphertext of `len` digits.
    fn ciphertext_split(&self, len: usize) -> usize {
        if self.rounds % 2 == 0 {
            len / 2
        } else {
            len - len / 2
        }
    }
}

/// Split into `A` (the shorter half for odd lengths) and `B`.
fn split(digits: &[usize]) -> (&[usize], &[usize]) {
    digits.split_at(digits.len() / 2)
}

fn check_input(radix: usize, digits: &[usize]) -> Result<(), FfxError> {
    if radix < 2 {
        return Err(FfxError::InvalidParameter(format!(
            "radix must be at least 2, got {radix}"
        )));
    }
    if digits.len() < 2 {
        return Err(FfxError::InvalidParameter(format!(
            "need at least 2 digits to split, got {}",
            digits.len()
        )));
    }
    if let Some(&d) = digits.iter().find(|&&d| d >= radix) {
        return Err(FfxError::InvalidParameter(format!(
            "digit {d} out of range for radix {radix}"
        )));
    }
    Ok(())
}
