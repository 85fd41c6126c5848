// RSA Decryption Implementation
// Implements RSA decryption with Chinese Remainder Theorem (CRT) optimization

use crate::error::{RsaError, RsaResult};

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPrivateKey;

/// Decrypt a ciphertext integer: m = c^d mod n.
///
/// The ciphertext must satisfy 0 <= c < n, which always holds for
/// values produced by `encrypt` under the same modulus. Internally the
/// exponentiation runs through the CRT path; the result is identical to
/// plain c^d mod n.
pub fn decrypt(c: &RsaBigInt, private_key: &RsaPrivateKey) -> RsaResult<RsaBigInt> {
    if *c >= private_key.n {
        return Err(RsaError::ValueOutOfRange {
            value_bits: c.bits(),
            modulus_bits: private_key.n.bits(),
        });
    }

    Ok(decrypt_crt(c, private_key))
}

/// Decrypt using the Chinese Remainder Theorem.
/// Faster than a single full-width exponentiation because both
/// half-size exponentiations work modulo a single prime.
fn decrypt_crt(c: &RsaBigInt, key: &RsaPrivateKey) -> RsaBigInt {
    // m1 = c^d_p mod p
    let m1 = mod_pow(c, &key.d_p, &key.p);

    // m2 = c^d_q mod q
    let m2 = mod_pow(c, &key.d_q, &key.q);

    // h = (m1 - m2) * q_inv mod p; keygen guarantees p > q so the
    // borrow case only needs one addition of p
    let mut h = if m1 >= m2 {
        m1 - &m2
    } else {
        m1 + &key.p - &m2
    };
    h = (h * &key.q_inv) % &key.p;

    // m = m2 + q * h
    m2 + &key.q * h
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::encrypt::encrypt;
    use crate::rsa::keygen::{generate_keypair, RsaKeyPair};

    fn roundtrip(keypair: &RsaKeyPair, m: &RsaBigInt) {
        let c = encrypt(m, &keypair.public_key).unwrap();
        let decrypted = decrypt(&c, &keypair.private_key).unwrap();
        assert_eq!(&decrypted, m);
    }

    #[test]
    fn test_roundtrip_various_values() {
        let keypair = generate_keypair(128).unwrap();

        for m in [0u64, 1, 2, 42, 255, 65537, u64::MAX] {
            roundtrip(&keypair, &from_u64(m));
        }
    }

    #[test]
    fn test_roundtrip_near_modulus() {
        let keypair = generate_keypair(96).unwrap();
        let m = &keypair.public_key.n - 1u8;
        roundtrip(&keypair, &m);
    }

    #[test]
    fn test_crt_matches_plain_exponentiation() {
        let keypair = generate_keypair(96).unwrap();
        let private = &keypair.private_key;
        let c = from_u64(987_654_321);

        let via_crt = decrypt(&c, private).unwrap();
        let plain = mod_pow(&c, &private.d, &private.n);
        assert_eq!(via_crt, plain);
    }

    #[test]
    fn test_decrypt_rejects_oversized_ciphertext() {
        let keypair = generate_keypair(64).unwrap();
        let c = keypair.private_key.n.clone() + 1u8;

        let result = decrypt(&c, &keypair.private_key);
        assert!(matches!(result, Err(RsaError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_decrypt_wrong_key_garbles() {
        let keypair1 = generate_keypair(128).unwrap();
        let keypair2 = generate_keypair(128).unwrap();
        let m = from_u64(42);

        let c = encrypt(&m, &keypair1.public_key).unwrap();
        // A foreign key still decrypts without error, but to garbage
        if c < keypair2.private_key.n {
            let decrypted = decrypt(&c, &keypair2.private_key).unwrap();
            assert_ne!(decrypted, m);
        }
    }
}
