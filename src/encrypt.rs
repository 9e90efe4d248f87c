// Textbook RSA encryption
// One message, one block: the UTF-8 bytes are the integer

use crate::bigint::{from_bytes, mod_pow};
use crate::error::{RsaError, RsaResult};
use crate::keygen::RsaPublicKey;

/// Encrypt a text message with a public key.
///
/// The UTF-8 bytes of `message` are read as one big-endian integer `m`,
/// which must be smaller than the modulus; there is no padding and no
/// chunking. The ciphertext `m^e mod n` is returned as a decimal string.
pub fn encrypt(public_key: &RsaPublicKey, message: &str) -> RsaResult<String> {
    let m = from_bytes(message.as_bytes());
    if m >= public_key.n {
        return Err(RsaError::MessageTooLarge);
    }

    let c = mod_pow(&m, &public_key.e, &public_key.n);
    Ok(c.to_str_radix(10))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;

    #[test]
    fn test_encrypt_known_values() {
        // n = 3233 = 61*53, e = 17: classic worked example, m = 65 -> c = 2790
        let key = RsaPublicKey {
            n: from_u64(3233),
            e: from_u64(17),
        };
        let ciphertext = encrypt(&key, "A").unwrap(); // "A" = 0x41 = 65
        assert_eq!(ciphertext, "2790");
    }

    #[test]
    fn test_encrypt_message_too_large() {
        let key = RsaPublicKey {
            n: from_u64(100),
            e: from_u64(3),
        };
        // "Hi" = 0x4869 = 18537 >= 100
        assert_eq!(encrypt(&key, "Hi"), Err(RsaError::MessageTooLarge));
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let key = RsaPublicKey {
            n: from_u64(3233),
            e: from_u64(17),
        };
        assert_eq!(encrypt(&key, "A").unwrap(), encrypt(&key, "A").unwrap());
    }
}
