// RSA Signatures
// Hash-then-exponentiate: s = H(m)^d mod n, checked via H(m) == s^e mod n

use sha2::{Digest, Sha256};

use super::bigint::{from_bytes, mod_pow, RsaBigInt};
use super::keygen::{RsaPrivateKey, RsaPublicKey};

/// SHA-256 digest of a message, interpreted as a big-endian integer
pub fn message_digest(message: &[u8]) -> RsaBigInt {
    let digest = Sha256::digest(message);
    from_bytes(&digest)
}

/// Sign a message: s = H(message)^d mod n.
///
/// The 256-bit digest is not range-checked against the modulus; with a
/// modulus below 256 bits the digest wraps and the scheme silently loses
/// correctness. Keys at the default size are never affected.
pub fn sign(message: &[u8], private_key: &RsaPrivateKey) -> RsaBigInt {
    let h = message_digest(message);
    mod_pow(&h, &private_key.d, &private_key.n)
}

/// Verify a signature: H(message) == s^e mod n
pub fn verify(message: &[u8], signature: &RsaBigInt, public_key: &RsaPublicKey) -> bool {
    let h = message_digest(message);
    let recovered = mod_pow(signature, &public_key.e, &public_key.n);
    h == recovered
}
