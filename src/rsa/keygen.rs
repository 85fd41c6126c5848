// RSA Key Generation
// Implements RSA key pair generation (public and private keys)

use crate::error::{RsaError, RsaResult};

use super::bigint::{distinct_prime_pair, from_u64, gcd, mod_inverse, to_bytes, RsaBigInt};

/// Default bit length of each generated prime (1024-bit modulus).
pub const DEFAULT_PRIME_BITS: u64 = 512;

/// Smallest supported prime size; below this the modulus cannot even
/// hold a padding-free test message.
pub const MIN_PRIME_BITS: u64 = 16;

/// RSA Public Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPublicKey {
    pub n: RsaBigInt,  // Modulus
    pub e: RsaBigInt,  // Public exponent
}

/// RSA Private Key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RsaPrivateKey {
    pub n: RsaBigInt,      // Modulus (same as public)
    pub d: RsaBigInt,      // Private exponent
    pub p: RsaBigInt,      // First prime factor
    pub q: RsaBigInt,      // Second prime factor
    // Pre-computed values for faster decryption
    pub d_p: RsaBigInt,    // d mod (p-1)
    pub d_q: RsaBigInt,    // d mod (q-1)
    pub q_inv: RsaBigInt,  // q^(-1) mod p
}

/// RSA Key Pair (both public and private keys)
#[derive(Debug, Clone)]
pub struct RsaKeyPair {
    pub public_key: RsaPublicKey,
    pub private_key: RsaPrivateKey,
    pub prime_bits: u64,
}

impl RsaPublicKey {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Lowercase hex of the modulus, for display
    pub fn modulus_hex(&self) -> String {
        hex::encode(to_bytes(&self.n))
    }

    /// Encrypt a plaintext integer under this public key
    pub fn encrypt(&self, m: &RsaBigInt) -> RsaResult<RsaBigInt> {
        super::encrypt::encrypt(m, self)
    }

    /// Check a signature over a message against this public key
    pub fn verify(&self, message: &[u8], signature: &RsaBigInt) -> bool {
        super::signature::verify(message, signature, self)
    }
}

impl RsaPrivateKey {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.n.bits()
    }

    /// Decrypt a ciphertext integer under this private key
    pub fn decrypt(&self, c: &RsaBigInt) -> RsaResult<RsaBigInt> {
        super::decrypt::decrypt(c, self)
    }

    /// Sign a message under this private key
    pub fn sign(&self, message: &[u8]) -> RsaBigInt {
        super::signature::sign(message, self)
    }
}

impl RsaKeyPair {
    /// Get the bit length of the modulus
    pub fn modulus_bits(&self) -> u64 {
        self.public_key.modulus_bits()
    }
}

/// Pick the public exponent for a given totient.
/// Starts from the conventional 65537; if that shares a factor with phi,
/// scans odd candidates upward from 3 until one is coprime. The fallback
/// essentially never triggers at cryptographic sizes but keeps the
/// coprimality guarantee unconditional.
fn choose_public_exponent(phi: &RsaBigInt) -> RsaBigInt {
    let one = from_u64(1);
    let candidate = from_u64(65537);
    if gcd(&candidate, phi) == one {
        return candidate;
    }

    let mut e = from_u64(3);
    while gcd(&e, phi) != one {
        e += 2u8;
    }
    e
}

/// Generate an RSA key pair from two fresh primes of `prime_bits` bits each.
///
/// Algorithm: draw a distinct prime pair (p, q); compute n = p*q and
/// phi = (p-1)(q-1); choose e coprime with phi; derive d = e^(-1) mod phi.
/// A missing inverse after the coprimality check is an internal invariant
/// violation and surfaces as `RsaError::NonInvertibleExponent`.
pub fn generate_keypair(prime_bits: u64) -> RsaResult<RsaKeyPair> {
    if prime_bits < MIN_PRIME_BITS {
        return Err(RsaError::PrimeBitsTooSmall {
            bits: prime_bits,
            min: MIN_PRIME_BITS,
        });
    }

    // Step 1: Generate two distinct random primes p and q
    let (p, q) = distinct_prime_pair(prime_bits);

    // Ensure p > q (for q_inv calculation)
    let (p, q) = if p < q { (q, p) } else { (p, q) };

    // Step 2: Compute n = p * q
    let n = &p * &q;

    // Step 3: Compute φ(n) = (p-1)(q-1)
    let phi = (&p - 1u8) * (&q - 1u8);

    // Step 4: Choose e coprime with φ(n)
    let e = choose_public_exponent(&phi);

    // Step 5: Compute d = e^(-1) mod φ(n)
    let d = mod_inverse(&e, &phi).ok_or(RsaError::NonInvertibleExponent)?;

    // Step 6: Compute CRT parameters for faster decryption
    let d_p = &d % (&p - 1u8);
    let d_q = &d % (&q - 1u8);
    let q_inv = mod_inverse(&q, &p).ok_or(RsaError::NonInvertibleExponent)?;

    let public_key = RsaPublicKey { n: n.clone(), e };

    let private_key = RsaPrivateKey {
        n,
        d,
        p,
        q,
        d_p,
        d_q,
        q_inv,
    };

    Ok(RsaKeyPair {
        public_key,
        private_key,
        prime_bits,
    })
}

/// Generate RSA key pair with default settings (512-bit primes)
pub fn generate_default_keypair() -> RsaResult<RsaKeyPair> {
    generate_keypair(DEFAULT_PRIME_BITS)
}
