// Primality testing and random prime search
// Deterministic trial division; exact, and only practical for small moduli

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};

use crate::error::{RsaError, RsaResult};

/// Upper bound on random draws before the search gives up
pub const MAX_PRIME_ATTEMPTS: usize = 1000;

/// Deterministic primality test by trial division.
///
/// Divides by odd candidates up to the square root of `n`, so it is
/// exact but only practical for small numbers. Keys produced from it
/// are demonstration-sized, not cryptographically meaningful.
pub fn is_prime(n: &BigUint) -> bool {
    let two = BigUint::from(2u32);
    if n <= &BigUint::one() {
        return false;
    }
    if n == &two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let mut i = BigUint::from(3u32);
    while &i * &i <= *n {
        if (n % &i).is_zero() {
            return false;
        }
        i += 2u32;
    }
    true
}

/// Draw a random prime from `[min, max]` inclusive.
///
/// Candidates are forced odd (even draws cannot be prime, except 2 in
/// the degenerate `min == max == 2` range). The search is bounded by
/// `MAX_PRIME_ATTEMPTS` and fails with `PrimeSearchExhausted` instead
/// of spinning on a range that contains no prime.
pub fn random_prime<R: rand::Rng + ?Sized>(
    rng: &mut R,
    min: &BigUint,
    max: &BigUint,
) -> RsaResult<BigUint> {
    if min > max {
        return Err(RsaError::PrimeSearchExhausted);
    }

    let two = BigUint::from(2u32);
    let upper = max + 1u32;

    for _ in 0..MAX_PRIME_ATTEMPTS {
        let mut candidate = rng.gen_biguint_range(min, &upper);
        if candidate.is_even() && !(min == max && *min == two) {
            candidate += 1u32;
        }
        if is_prime(&candidate) {
            return Ok(candidate);
        }
    }

    Err(RsaError::PrimeSearchExhausted)
}

/// `random_prime` with the thread-local generator
pub fn random_prime_thread_rng(min: &BigUint, max: &BigUint) -> RsaResult<BigUint> {
    random_prime(&mut rand::thread_rng(), min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bigint::from_u64;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_prime_boundaries() {
        assert!(!is_prime(&from_u64(0)));
        assert!(!is_prime(&from_u64(1)));
        assert!(is_prime(&from_u64(2)));
        assert!(is_prime(&from_u64(3)));
        assert!(!is_prime(&from_u64(4)));
        assert!(is_prime(&from_u64(17)));
        assert!(!is_prime(&from_u64(25)));
    }

    #[test]
    fn test_is_prime_larger_values() {
        assert!(is_prime(&from_u64(7919)));
        assert!(!is_prime(&from_u64(7917)));
        // square of a prime
        assert!(!is_prime(&from_u64(7919 * 7919)));
    }

    #[test]
    fn test_random_prime_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let min = from_u64(256);
        let max = from_u64(512);

        for _ in 0..10 {
            let p = random_prime(&mut rng, &min, &max).unwrap();
            assert!(is_prime(&p));
            // the odd adjustment may push a candidate one past max
            assert!(p >= min && p <= &max + 1u32);
        }
    }

    #[test]
    fn test_random_prime_deterministic_with_seed() {
        let min = from_u64(256);
        let max = from_u64(512);

        let mut rng1 = StdRng::seed_from_u64(7);
        let mut rng2 = StdRng::seed_from_u64(7);
        let p1 = random_prime(&mut rng1, &min, &max).unwrap();
        let p2 = random_prime(&mut rng2, &min, &max).unwrap();
        assert_eq!(p1, p2);
    }

    #[test]
    fn test_random_prime_thread_rng() {
        let p = random_prime_thread_rng(&from_u64(2), &from_u64(50)).unwrap();
        assert!(is_prime(&p));
    }

    #[test]
    fn test_random_prime_two() {
        let mut rng = StdRng::seed_from_u64(1);
        let two = from_u64(2);
        assert_eq!(random_prime(&mut rng, &two, &two).unwrap(), two);
    }

    #[test]
    fn test_random_prime_exhausted() {
        let mut rng = StdRng::seed_from_u64(1);
        // [9, 9] only ever yields 9, which is composite
        let nine = from_u64(9);
        assert_eq!(
            random_prime(&mut rng, &nine, &nine),
            Err(RsaError::PrimeSearchExhausted)
        );
        // inverted range holds no prime at all
        assert_eq!(
            random_prime(&mut rng, &from_u64(10), &from_u64(5)),
            Err(RsaError::PrimeSearchExhausted)
        );
    }
}
