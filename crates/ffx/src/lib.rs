//! Format-preserving encryption over arbitrary alphabets.
//!
//! A keyed, deterministic FFX-style Feistel network encrypts a fixed-length
//! sequence of symbols into another sequence of the same length over the same
//! alphabet, so ciphertext drops into fields that validate shape (account
//! numbers, fixed-width codes).
//!
//! ```
//! use ffx::{IntegerCodec, StringCodec};
//!
//! let codec = StringCodec::new("secret-key", "abc", 6)?;
//! assert_eq!(codec.encrypt("aaabbb")?, "acbacc");
//!
//! let numbers = IntegerCodec::new("secret-key", 4)?;
//! assert_eq!(numbers.decrypt(6103)?, 1234);
//! # Ok::<(), ffx::FfxError>(())
//! ```
//!
//! # Invariants
//!
//! - Codecs are immutable after construction and hold no scratch state, so one
//!   instance can serve concurrent callers.
//! - **No key material or plaintext** appears in any log event or `Debug` output.

pub mod alphabet;
pub mod arith;
pub mod cipher;
pub mod codecs;
pub mod error;
pub mod key;
pub mod round;

pub use alphabet::{Alphabet, DECIMAL};
pub use cipher::{Ffx, DEFAULT_ROUNDS};
pub use codecs::{Codec, IntegerCodec, StringCodec, MAX_INTEGER_LENGTH};
pub use error::FfxError;
pub use key::SecretKey;
pub use round::HashAlgorithm;
