//! [`SecretKey`]: owned HMAC key material for a cipher instance.

/// Key bytes used as the HMAC key of the round function.
///
/// Set once at construction and never mutated afterwards. When this type is
/// dropped, the memory is overwritten with zeroes to minimise the window
/// during which key material lives in RAM.
#[derive(Clone)]
pub struct SecretKey(Box<[u8]>);

impl SecretKey {
    /// Copy `bytes` into a new key.
    pub fn new(bytes: impl AsRef<[u8]>) -> Self {
        Self(bytes.as_ref().to_vec().into_boxed_slice())
    }

    pub(crate) fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl From<&str> for SecretKey {
    fn from(passphrase: &str) -> Self {
        Self::new(passphrase.as_bytes())
    }
}

impl From<&[u8]> for SecretKey {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for SecretKey {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into_boxed_slice())
    }
}

impl Drop for SecretKey {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material - not even in debug builds.
        f.write_str("SecretKey([REDACTED])")
    }
}
