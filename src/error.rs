// Error types for RSA operations
// Every fallible operation in the crate surfaces one of these variants

use thiserror::Error;

/// Errors that can occur during key generation, encryption, decryption
/// or key encoding/parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    /// Unexpected tag, truncated field or out-of-range read while
    /// walking a DER key structure.
    #[error("invalid key format")]
    InvalidKeyFormat,

    /// An input string or field is not a valid integer/encoding.
    #[error("malformed input: {0}")]
    MalformedInput(&'static str),

    /// Decryption produced bytes that are not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8")]
    InvalidCiphertext,

    /// No modular inverse exists for the given arguments.
    #[error("modular inverse does not exist")]
    NoInverseExists,

    /// The bounded random search found no prime in the requested range.
    #[error("no prime found within the retry limit")]
    PrimeSearchExhausted,

    /// No admissible public exponent below phi(n).
    #[error("key generation failed: no admissible public exponent")]
    KeyGenerationFailed,

    /// The message, read as an integer, is not smaller than the modulus.
    #[error("message too large for the key modulus")]
    MessageTooLarge,
}

/// Result type for RSA operations
pub type RsaResult<T> = Result<T, RsaError>;
