//! Error type for the cipher engine and codecs.

use thiserror::Error;

/// Errors produced by the FFX engine and the codecs built on it.
///
/// Every variant is returned at the boundary closest to the violated
/// precondition; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FfxError {
    /// The input does not have the codec's configured length, or an integer
    /// has more decimal digits than the codec's width.
    #[error("sequence length is wrong: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// The input contains a symbol that is not part of the codec's alphabet.
    #[error("non-alphabet character: {0:?}")]
    NonAlphabetCharacter(char),

    /// A round-function input did not fit in a signed 32-bit integer.
    #[error("encoding failure: {0}")]
    EncodingFailure(String),

    /// A constructor or engine argument is outside its valid range.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl FfxError {
    /// Short machine-readable code for this error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FfxError::LengthMismatch { .. } => "length_mismatch",
            FfxError::NonAlphabetCharacter(_) => "non_alphabet_character",
            FfxError::EncodingFailure(_) => "encoding_failure",
            FfxError::InvalidParameter(_) => "invalid_parameter",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_codes() {
        assert_eq!(
            FfxError::LengthMismatch { expected: 4, actual: 5 }.kind(),
            "length_mismatch"
        );
        assert_eq!(
            FfxError::NonAlphabetCharacter('x').kind(),
            "non_alphabet_character"
        );
        assert_eq!(
            FfxError::EncodingFailure("x".into()).kind(),
            "encoding_failure"
        );
        assert_eq!(
            FfxError::InvalidParameter("x".into()).kind(),
            "invalid_parameter"
        );
    }

    #[test]
    fn display_identifies_offending_symbol() {
        let e = FfxError::NonAlphabetCharacter('z');
        assert!(e.to_string().contains("'z'"));
    }

    #[test]
    fn display_includes_lengths() {
        let e = FfxError::LengthMismatch { expected: 6, actual: 3 };
        let msg = e.to_string();
        assert!(msg.contains('6') && msg.contains('3'), "{msg}");
    }
}
