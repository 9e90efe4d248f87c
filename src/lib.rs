// rsa_core - textbook RSA built on primitive big-integer arithmetic
// Exposes key generation, block encryption/decryption and DER/PEM key encoding

pub mod bigint;
pub mod decrypt;
pub mod encrypt;
pub mod error;
pub mod keygen;
pub mod pem;
pub mod prime;

pub use decrypt::decrypt;
pub use encrypt::encrypt;
pub use error::{RsaError, RsaResult};
pub use keygen::{generate_keypair, generate_keypair_with, RsaKeyPair, RsaPrivateKey, RsaPublicKey};
pub use pem::{
    create_private_key_pem, create_public_key_pem, decode_pem, parse_private_key,
    parse_public_key, PrivateKeyParts, PublicKeyParts,
};
pub use prime::{is_prime, random_prime};
