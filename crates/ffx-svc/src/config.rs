//! Configuration loading and validation for the tokenisation service.
//!
//! All values are read from environment variables at startup. The process will
//! exit with a clear error message if any required variable is missing or invalid.

use anyhow::{Context, Result};
use ffx::{Alphabet, Ffx, HashAlgorithm, StringCodec};
use serde::Deserialize;

/// Validated service configuration.
#[derive(Clone, Deserialize)]
pub struct Config {
    /// Secret passphrase keying the cipher. **Required.** Held in memory only.
    pub fpe_key: String,

    /// Symbols of the codec alphabet, in digit order.
    #[serde(default = "default_alphabet")]
    pub fpe_alphabet: String,

    /// Exact number of symbols in every value. **Required.**
    pub fpe_length: usize,

    /// Number of Feistel rounds.
    #[serde(default = "default_rounds")]
    pub fpe_rounds: u32,

    /// Round-function hash: `sha1` or `sha256`.
    #[serde(default)]
    pub fpe_hash: HashAlgorithm,

    /// Port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_alphabet() -> String {
    ffx::DECIMAL.into()
}
fn default_rounds() -> u32 {
    ffx::DEFAULT_ROUNDS
}
fn default_listen_port() -> u16 {
    8080
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any required variable is absent or cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Build the codec described by this configuration.
    pub fn codec(&self) -> Result<StringCodec> {
        let ffx = Ffx::new(self.fpe_key.as_str())
            .with_rounds(self.fpe_rounds)
            .context("FPE_ROUNDS rejected")?
            .with_hash(self.fpe_hash);
        StringCodec::from_cipher(ffx, &self.fpe_alphabet, self.fpe_length)
            .context("FPE_ALPHABET / FPE_LENGTH rejected")
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.fpe_key.is_empty() {
            anyhow::bail!("FPE_KEY is required and must not be empty");
        }
        if self.fpe_rounds == 0 {
            anyhow::bail!("FPE_ROUNDS must be > 0");
        }
        Alphabet::new(&self.fpe_alphabet, self.fpe_length)
            .context("FPE_ALPHABET / FPE_LENGTH invalid")?;
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("fpe_key", &"[REDACTED]")
            .field("fpe_alphabet", &self.fpe_alphabet)
            .field("fpe_length", &self.fpe_length)
            .field("fpe_rounds", &self.fpe_rounds)
            .field("fpe_hash", &self.fpe_hash)
            .field("listen_port", &self.listen_port)
            .field("log_level", &self.log_level)
            .finish()
    }
}
