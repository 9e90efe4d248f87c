// Textbook RSA decryption

use num_bigint::BigUint;
use num_traits::Zero;

use crate::bigint::{mod_pow, to_bytes};
use crate::error::{RsaError, RsaResult};
use crate::keygen::RsaPrivateKey;

/// Decrypt a decimal-string ciphertext with a private key.
///
/// Computes `c^d mod n`, takes the minimal big-endian byte form of the
/// result and decodes it as UTF-8. A ciphertext produced from a message
/// whose integer value was not below `n` cannot be recovered.
pub fn decrypt(private_key: &RsaPrivateKey, ciphertext: &str) -> RsaResult<String> {
    let c: BigUint = ciphertext
        .parse()
        .map_err(|_| RsaError::MalformedInput("ciphertext is not a decimal integer"))?;

    let m = mod_pow(&c, &private_key.d, &private_key.n);

    // minimal byte form; zero decodes to the empty message
    let bytes = if m.is_zero() { Vec::new() } else { to_bytes(&m) };

    String::from_utf8(bytes).map_err(|_| RsaError::InvalidCiphertext)
}
