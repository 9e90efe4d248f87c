// Modular arithmetic over num-bigint
// gcd, extended Euclid, modular inverse and square-and-multiply exponentiation

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{RsaError, RsaResult};

/// Create a big integer from u64
pub fn from_u64(n: u64) -> BigUint {
    BigUint::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &BigUint) -> Vec<u8> {
    n.to_bytes_be()
}

/// Greatest common divisor (Euclidean algorithm)
/// Repeatedly replaces (a, b) with (b, a mod b) until b reaches zero
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = &a % &b;
        a = std::mem::replace(&mut b, r);
    }
    a
}

/// Extended Euclidean Algorithm
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b)
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if b.is_zero() {
        return (a.clone(), BigInt::one(), BigInt::zero());
    }

    let (gcd, x1, y1) = extended_gcd(b, &(a % b));
    let x = y1.clone();
    let y = x1 - (a / b) * y1;

    (gcd, x, y)
}

/// Compute modular inverse: a^(-1) mod m, normalized into [0, m)
/// Fails with `NoInverseExists` when gcd(a, m) != 1
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> RsaResult<BigUint> {
    if m.is_one() {
        return Ok(BigUint::zero());
    }

    let m_signed = BigInt::from(m.clone());
    let (gcd, x, _) = extended_gcd(&BigInt::from(a.clone()), &m_signed);
    if !gcd.is_one() {
        return Err(RsaError::NoInverseExists);
    }

    let mut result = x % &m_signed;
    if result < BigInt::zero() {
        result += &m_signed;
    }
    let (_, magnitude) = result.into_parts();

    Ok(magnitude)
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply; exponent is consumed one low bit at a time
pub fn mod_pow(base: &BigUint, exp: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_one() {
        return BigUint::zero();
    }

    let mut result = BigUint::one();
    let mut base = base % modulus;
    let mut exp = exp.clone();

    while !exp.is_zero() {
        if exp.is_odd() {
            result = (&result * &base) % modulus;
        }
        base = (&base * &base) % modulus;
        exp >>= 1;
    }

    result
}
