//! Keyed pseudorandom round function.
//!
//! Maps `(round index, half-sequence)` to a digit sequence of any requested
//! length in any radix:
//!
//! ```text
//! digest_0 = HMAC(key, w(round) || w(d_0) || ... || w(d_n) || w(0))
//! digest_k = HMAC(key, digest_{k-1} || w(k))
//! ```
//!
//! where `w(x)` is `x` as a little-endian signed 32-bit word. Each digest is
//! read as an unsigned big-endian integer and repeatedly divided by the radix;
//! the remainders are the output digits, least significant first. At most
//! [`chars_per_digest`] digits are taken from one digest before re-hashing.

use hmac::{digest::KeyInit, Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::Sha256;
use tracing::trace;

use crate::error::FfxError;
use crate::key::SecretKey;

/// Byte width of every packed round-function input word.
pub const WORD_LEN: usize = 4;

/// Hash used inside the HMAC construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    /// HMAC-SHA-1 (20-byte digest). Interoperates with existing FFX ciphertext.
    #[default]
    Sha1,
    /// HMAC-SHA-256 (32-byte digest).
    Sha256,
}

impl HashAlgorithm {
    /// Digest size in bytes.
    pub fn digest_len(self) -> usize {
        match self {
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha256 => 32,
        }
    }

    fn mac(self, key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>, FfxError> {
        match self {
            HashAlgorithm::Sha1 => mac_with::<Hmac<Sha1>>(key, parts),
            HashAlgorithm::Sha256 => mac_with::<Hmac<Sha256>>(key, parts),
        }
    }
}

fn mac_with<M: Mac + KeyInit>(key: &[u8], parts: &[&[u8]]) -> Result<Vec<u8>, FfxError> {
    let mut mac = <M as Mac>::new_from_slice(key)
        .map_err(|_| FfxError::InvalidParameter("HMAC rejected the key length".into()))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Number of base-`radix` digits extracted from one digest of `digest_len` bytes.
pub fn chars_per_digest(digest_len: usize, radix: usize) -> usize {
    (digest_len as f64 * (256f64.ln() / (radix as f64).ln())) as usize
}

/// Keyed round function shared by every round of one cipher instance.
#[derive(Debug, Clone)]
pub struct RoundFunction {
    key: SecretKey,
    hash: HashAlgorithm,
}

impl RoundFunction {
    /// Create a round function keyed with `key`.
    pub fn new(key: SecretKey, hash: HashAlgorithm) -> Self {
        Self { key, hash }
    }

    /// Same key, different hash.
    pub fn with_hash(self, hash: HashAlgorithm) -> Self {
        Self { key: self.key, hash }
    }

    /// The hash algorithm behind the HMAC.
    pub fn hash(&self) -> HashAlgorithm {
        self.hash
    }

    /// Produce `out_len` digits in `[0, radix)` for round `round_index` keyed on `half`.
    ///
    /// # Errors
    ///
    /// Returns [`FfxError::EncodingFailure`] if the round index, a digit, or the
    /// re-hash counter does not fit in a signed 32-bit word.
    /// Returns [`FfxError::InvalidParameter`] if `radix < 2`, or if `radix` is so
    /// large that not even one digit fits in a digest.
    pub fn apply(
        &self,
        radix: usize,
        round_index: u32,
        half: &[usize],
        out_len: usize,
    ) -> Result<Vec<usize>, FfxError> {
        if radix < 2 {
            return Err(FfxError::InvalidParameter(format!(
                "radix must be at least 2, got {radix}"
            )));
        }
        let per_digest = chars_per_digest(self.hash.digest_len(), radix);
        if per_digest == 0 {
            return Err(FfxError::InvalidParameter(format!(
                "radix {radix} exceeds the digest range"
            )));
        }

        let mut out = Vec::with_capacity(out_len);
        if out_len == 0 {
            return Ok(out);
        }

        let mut seed = pack_words(round_index, half)?;
        let mut counter: usize = 0;
        loop {
            let suffix = encode_word(counter)?;
            let digest = self
                .hash
                .mac(self.key.expose(), &[&seed[..], &suffix[..]])?;

            let mut value = digest.clone();
            for _ in 0..per_digest {
                out.push(div_rem_in_place(&mut value, radix));
                if out.len() == out_len {
                    trace!(
                        radix,
                        round = round_index,
                        out_len,
                        digests = counter + 1,
                        "round evaluated"
                    );
                    return Ok(out);
                }
            }

            seed = digest;
            counter += 1;
        }
    }
}

/// Pack the round index followed by every digit of `half` into words.
fn pack_words(round_index: u32, half: &[usize]) -> Result<Vec<u8>, FfxError> {
    let mut packed = Vec::with_capacity(WORD_LEN * (half.len() + 1));
    packed.extend_from_slice(&encode_word(round_index)?);
    for &digit in half {
        packed.extend_from_slice(&encode_word(digit)?);
    }
    Ok(packed)
}

/// Encode `value` as a little-endian signed 32-bit word, refusing to wrap.
fn encode_word<T>(value: T) -> Result<[u8; WORD_LEN], FfxError>
where
    T: TryInto<i32> + Copy + std::fmt::Display,
{
    let word: i32 = value.try_into().map_err(|_| {
        FfxError::EncodingFailure(format!("{value} does not fit in a signed 32-bit word"))
    })?;
    Ok(word.to_le_bytes())
}

/// Divide the big-endian integer in `value` by `divisor` in place, returning the remainder.
fn div_rem_in_place(value: &mut [u8], divisor: usize) -> usize {
    let divisor = divisor as u128;
    let mut rem: u128 = 0;
    for byte in value.iter_mut() {
        let acc = (rem << 8) | u128::from(*byte);
        // rem < divisor, so the quotient digit is always < 256.
        *byte = (acc / divisor) as u8;
        rem = acc % divisor;
    }
    rem as usize
}
