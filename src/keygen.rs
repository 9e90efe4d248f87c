// RSA key generation
// Builds a public/private key pair from two random primes

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::bigint::{from_u64, gcd, mod_inverse};
use crate::error::{RsaError, RsaResult};
use crate::prime::{random_prime, MAX_PRIME_ATTEMPTS};

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: BigUint, // Modulus
    pub e: BigUint, // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: BigUint, // Modulus (same as public)
    pub d: BigUint, // Private exponent
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
}

fn parse_hex_field(field: &str) -> RsaResult<BigUint> {
    BigUint::parse_bytes(field.as_bytes(), 16)
        .ok_or(RsaError::MalformedInput("key field is not valid hex"))
}

impl RsaPublicKey {
    /// Rebuild a public key from the hex fields of a parsed PEM
    pub fn from_hex(n: &str, e: &str) -> RsaResult<Self> {
        let n = parse_hex_field(n)?;
        let e = parse_hex_field(e)?;
        if n.is_zero() || e.is_zero() {
            return Err(RsaError::MalformedInput("key field is zero"));
        }
        Ok(Self { n, e })
    }

    /// Get the bit length of the modulus
    pub fn key_size_bits(&self) -> u64 {
        self.n.bits()
    }
}

impl RsaPrivateKey {
    /// Rebuild a private key from the hex fields of a parsed PEM
    pub fn from_hex(n: &str, d: &str) -> RsaResult<Self> {
        let n = parse_hex_field(n)?;
        let d = parse_hex_field(d)?;
        if n.is_zero() || d.is_zero() {
            return Err(RsaError::MalformedInput("key field is zero"));
        }
        Ok(Self { n, d })
    }

    /// Get the bit length of the modulus
    pub fn key_size_bits(&self) -> u64 {
        self.n.bits()
    }
}

/// Generate an RSA key pair with the given modulus bit length, drawing
/// randomness from `rng`.
///
/// Both primes come from `[2^(bits/2), 2^(bits/2 + 1)]`, so the modulus
/// lands near, not exactly at, `bits` total bits.
pub fn generate_keypair_with<R: rand::Rng + ?Sized>(
    rng: &mut R,
    bits: u32,
) -> RsaResult<RsaKeyPair> {
    if bits < 4 {
        return Err(RsaError::MalformedInput("key size must be at least 4 bits"));
    }

    let half_bits = bits / 2;
    let min = BigUint::one() << half_bits;
    let max = BigUint::one() << (half_bits + 1);

    // Step 1: two distinct random primes p and q
    let p = random_prime(rng, &min, &max)?;
    let mut q = random_prime(rng, &min, &max)?;
    let mut attempts = 1;
    while q == p {
        if attempts >= MAX_PRIME_ATTEMPTS {
            return Err(RsaError::PrimeSearchExhausted);
        }
        q = random_prime(rng, &min, &max)?;
        attempts += 1;
    }

    // Step 2: n = p * q, phi = (p-1)(q-1)
    let n = &p * &q;
    let phi = (&p - 1u32) * (&q - 1u32);

    // Step 3: smallest admissible odd e starting from 65537
    let mut e = from_u64(65_537);
    while !gcd(&e, &phi).is_one() {
        e += 2u32;
        if e >= phi {
            return Err(RsaError::KeyGenerationFailed);
        }
    }

    // Step 4: d = e^(-1) mod phi
    let d = mod_inverse(&e, &phi)?;

    Ok(RsaKeyPair {
        public_key: RsaPublicKey { n: n.clone(), e },
        private_key: RsaPrivateKey { n, d },
    })
}

/// Generate an RSA key pair with the thread-local generator
pub fn generate_keypair(bits: u32) -> RsaResult<RsaKeyPair> {
    generate_keypair_with(&mut rand::thread_rng(), bits)
}
