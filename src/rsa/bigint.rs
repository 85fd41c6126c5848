// RSA Big Integer Operations
// Wrapper around num-bigint for RSA-specific operations

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::thread_rng;

/// RSA Big Integer type alias
pub type RsaBigInt = BigUint;

/// Default number of Miller-Rabin rounds.
/// False-positive probability is at most 4^-rounds.
pub const MILLER_RABIN_ROUNDS: u32 = 10;

/// Create a big integer from u64
pub fn from_u64(n: u64) -> RsaBigInt {
    RsaBigInt::from(n)
}

/// Create a big integer from bytes (big-endian)
pub fn from_bytes(bytes: &[u8]) -> RsaBigInt {
    RsaBigInt::from_bytes_be(bytes)
}

/// Convert big integer to bytes (big-endian)
pub fn to_bytes(n: &RsaBigInt) -> Vec<u8> {
    n.to_bytes_be()
}

/// Modular exponentiation: base^exp mod modulus
/// Uses square-and-multiply algorithm
pub fn mod_pow(base: &RsaBigInt, exp: &RsaBigInt, modulus: &RsaBigInt) -> RsaBigInt {
    if modulus.is_one() {
        return RsaBigInt::zero();
    }

    let mut result = RsaBigInt::one();
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

/// Extended Euclidean Algorithm, iterative so large inputs cannot
/// exhaust the stack.
/// Returns (gcd, x, y) such that a*x + b*y = gcd = gcd(a, b);
/// x and y may be negative, hence the signed return type.
pub fn extended_gcd(a: &RsaBigInt, b: &RsaBigInt) -> (BigInt, BigInt, BigInt) {
    let mut old_r = BigInt::from(a.clone());
    let mut r = BigInt::from(b.clone());
    let mut old_x = BigInt::one();
    let mut x = BigInt::zero();
    let mut old_y = BigInt::zero();
    let mut y = BigInt::one();

    while !r.is_zero() {
        let q = &old_r / &r;
        let next_r = &old_r - &q * &r;
        old_r = std::mem::replace(&mut r, next_r);
        let next_x = &old_x - &q * &x;
        old_x = std::mem::replace(&mut x, next_x);
        let next_y = &old_y - &q * &y;
        old_y = std::mem::replace(&mut y, next_y);
    }

    (old_r, old_x, old_y)
}

/// Compute modular inverse: a^(-1) mod m
/// Returns None if inverse doesn't exist (gcd(a, m) != 1)
pub fn mod_inverse(a: &RsaBigInt, m: &RsaBigInt) -> Option<RsaBigInt> {
    let (gcd, x, _) = extended_gcd(a, m);

    if !gcd.is_one() {
        // Inverse doesn't exist
        return None;
    }

    // Normalize the Bezout coefficient into [0, m)
    let m_int = BigInt::from(m.clone());
    let normalized = ((x % &m_int) + &m_int) % &m_int;
    normalized.to_biguint()
}

/// Miller-Rabin primality test
/// Returns true if n is probably prime
pub fn is_probable_prime(n: &RsaBigInt, rounds: u32) -> bool {
    if n < &RsaBigInt::from(2u8) {
        return false;
    }
    if n == &RsaBigInt::from(2u8) || n == &RsaBigInt::from(3u8) {
        return true;
    }
    if n.is_even() {
        return false;
    }

    // Write n-1 as d * 2^s with d odd
    let mut d = n.clone() - 1u8;
    let mut s = 0u32;
    while d.is_even() {
        d >>= 1;
        s += 1;
    }

    // Witness loop
    let mut rng = thread_rng();
    let two = RsaBigInt::from(2u8);
    let n_minus_one = n - 1u8;

    for _ in 0..rounds {
        // Pick random witness a in [2, n-2]
        let a = rng.gen_biguint_range(&two, &n_minus_one);

        // Compute x = a^d mod n
        let mut x = mod_pow(&a, &d, n);

        if x.is_one() || x == n_minus_one {
            continue;
        }

        let mut witness_passed = false;
        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_one {
                witness_passed = true;
                break;
            }
        }

        if witness_passed {
            continue;
        }

        // Composite
        return false;
    }

    // Probably prime
    true
}

fn random_odd_candidate(rng: &mut impl RandBigInt, bits: u64) -> RsaBigInt {
    // Force the top bit so the candidate has exactly `bits` bits,
    // and the bottom bit so it is odd
    let mut candidate = rng.gen_biguint(bits);
    candidate |= RsaBigInt::one() << (bits - 1);
    candidate |= RsaBigInt::one();
    candidate
}

/// Generate a random prime with exactly `bits` bits.
/// Retries until a candidate passes the primality test; the expected
/// attempt count grows linearly with `bits` but the loop is unbounded.
pub fn random_prime(bits: u64) -> RsaBigInt {
    let mut rng = thread_rng();

    loop {
        let candidate = random_odd_candidate(&mut rng, bits);
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return candidate;
        }
    }
}

/// Like random_prime, but gives up after `max_attempts` candidates.
pub fn random_prime_capped(bits: u64, max_attempts: u64) -> Option<RsaBigInt> {
    let mut rng = thread_rng();

    for _ in 0..max_attempts {
        let candidate = random_odd_candidate(&mut rng, bits);
        if is_probable_prime(&candidate, MILLER_RABIN_ROUNDS) {
            return Some(candidate);
        }
    }

    None
}

/// Generate two independent random primes of `bits` bits each,
/// regenerating the second until it differs from the first.
pub fn distinct_prime_pair(bits: u64) -> (RsaBigInt, RsaBigInt) {
    let p = random_prime(bits);
    let mut q = random_prime(bits);
    while q == p {
        q = random_prime(bits);
    }
    (p, q)
}

/// Greatest common divisor
pub fn gcd(a: &RsaBigInt, b: &RsaBigInt) -> RsaBigInt {
    a.gcd(b)
}
