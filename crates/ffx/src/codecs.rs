//! Typed codecs: alphabet packing around the [`Ffx`] engine.
//!
//! ```text
//! value --pack--> digits --Ffx--> digits --unpack--> value
//! ```
//!
//! [`IntegerCodec`] holds a [`StringCodec`] over [`DECIMAL`] and only adds
//! zero-padded formatting on the way in and parsing on the way out.

use tracing::debug;

use crate::alphabet::{Alphabet, DECIMAL};
use crate::cipher::Ffx;
use crate::error::FfxError;
use crate::key::SecretKey;

/// Widest [`IntegerCodec`]: every value below `10^19` fits a `u64`.
pub const MAX_INTEGER_LENGTH: usize = 19;

/// A format-preserving cipher over values of type `Value`.
pub trait Codec {
    type Value;

    fn encrypt(&self, value: &Self::Value) -> Result<Self::Value, FfxError>;
    fn decrypt(&self, value: &Self::Value) -> Result<Self::Value, FfxError>;
}

/// Encrypts fixed-length strings over an alphabet into strings of the same shape.
#[derive(Debug, Clone)]
pub struct StringCodec {
    alphabet: Alphabet,
    ffx: Ffx,
}

impl StringCodec {
    /// Codec with the default round count and hash.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::InvalidParameter`] if the alphabet has fewer than two
    /// distinct symbols or `length < 2`.
    pub fn new(key: impl Into<SecretKey>, alphabet: &str, length: usize) -> Result<Self, FfxError> {
        Self::from_cipher(Ffx::new(key), alphabet, length)
    }

    /// Codec around a preconfigured engine (custom rounds or hash).
    ///
    /// # Errors
    ///
    /// Same as [`StringCodec::new`].
    pub fn from_cipher(ffx: Ffx, alphabet: &str, length: usize) -> Result<Self, FfxError> {
        let alphabet = Alphabet::new(alphabet, length)?;
        debug!(
            radix = alphabet.radix(),
            length,
            rounds = ffx.rounds(),
            "string codec ready"
        );
        Ok(Self { alphabet, ffx })
    }

    /// Number of symbols in the alphabet.
    pub fn radix(&self) -> usize {
        self.alphabet.radix()
    }

    /// Required input length in symbols.
    pub fn length(&self) -> usize {
        self.alphabet.length()
    }

    /// Encrypt `value`; the result has the same length over the same alphabet.
    pub fn encrypt(&self, value: &str) -> Result<String, FfxError> {
        let packed = self.alphabet.pack(value)?;
        let encrypted = self.ffx.encrypt(self.alphabet.radix(), &packed)?;
        Ok(self.alphabet.unpack(&encrypted))
    }

    /// Decrypt `value`; the exact inverse of [`StringCodec::encrypt`].
    pub fn decrypt(&self, value: &str) -> Result<String, FfxError> {
        let packed = self.alphabet.pack(value)?;
        let decrypted = self.ffx.decrypt(self.alphabet.radix(), &packed)?;
        Ok(self.alphabet.unpack(&decrypted))
    }
}

impl Codec for StringCodec {
    type Value = String;

    fn encrypt(&self, value: &String) -> Result<String, FfxError> {
        StringCodec::encrypt(self, value)
    }

    fn decrypt(&self, value: &String) -> Result<String, FfxError> {
        StringCodec::decrypt(self, value)
    }
}

/// Encrypts integers in `[0, 10^length)` into integers in the same range.
#[derive(Debug, Clone)]
pub struct IntegerCodec {
    inner: StringCodec,
}

impl IntegerCodec {
    /// Codec for `length`-digit integers with the default round count and hash.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::InvalidParameter`] unless `2 <= length <= MAX_INTEGER_LENGTH`.
    pub fn new(key: impl Into<SecretKey>, length: usize) -> Result<Self, FfxError> {
        Self::from_cipher(Ffx::new(key), length)
    }

    /// Codec around a preconfigured engine.
    ///
    /// # Errors
    ///
    /// Same as [`IntegerCodec::new`].
    pub fn from_cipher(ffx: Ffx, length: usize) -> Result<Self, FfxError> {
        if length > MAX_INTEGER_LENGTH {
            return Err(FfxError::InvalidParameter(format!(
                "integer length must be at most {MAX_INTEGER_LENGTH}, got {length}"
            )));
        }
        Ok(Self {
            inner: StringCodec::from_cipher(ffx, DECIMAL, length)?,
        })
    }

    /// Number of decimal digits.
    pub fn length(&self) -> usize {
        self.inner.length()
    }

    /// Encrypt `value`.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::LengthMismatch`] if `value` has more than
    /// [`IntegerCodec::length`] decimal digits.
    pub fn encrypt(&self, value: u64) -> Result<u64, FfxError> {
        let encrypted = self.inner.encrypt(&self.format(value))?;
        parse(&encrypted)
    }

    /// Decrypt `value`; the exact inverse of [`IntegerCodec::encrypt`].
    pub fn decrypt(&self, value: u64) -> Result<u64, FfxError> {
        let decrypted = self.inner.decrypt(&self.format(value))?;
        parse(&decrypted)
    }

    // Too-wide values come out longer than `length` and are rejected by `pack`.
    fn format(&self, value: u64) -> String {
        format!("{value:0width$}", width = self.inner.length())
    }
}

impl Codec for IntegerCodec {
    type Value = u64;

    fn encrypt(&self, value: &u64) -> Result<u64, FfxError> {
        IntegerCodec::encrypt(self, *value)
    }

    fn decrypt(&self, value: &u64) -> Result<u64, FfxError> {
        IntegerCodec::decrypt(self, *value)
    }
}

fn parse(digits: &str) -> Result<u64, FfxError> {
    digits
        .parse()
        .map_err(|e| FfxError::EncodingFailure(format!("decimal output did not parse: {e}")))
}
