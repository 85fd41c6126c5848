// RSA Encryption Implementation
// Textbook RSA on raw integers: no padding, deterministic

use crate::error::{RsaError, RsaResult};

use super::bigint::{mod_pow, RsaBigInt};
use super::keygen::RsaPublicKey;

/// Encrypt a plaintext integer: c = m^e mod n.
///
/// The plaintext must satisfy 0 <= m < n; larger values would wrap
/// modulo n and lose information, so they are rejected outright.
/// Encryption is deterministic: the same m under the same key always
/// yields the same ciphertext.
pub fn encrypt(m: &RsaBigInt, public_key: &RsaPublicKey) -> RsaResult<RsaBigInt> {
    if *m >= public_key.n {
        return Err(RsaError::ValueOutOfRange {
            value_bits: m.bits(),
            modulus_bits: public_key.n.bits(),
        });
    }

    Ok(mod_pow(m, &public_key.e, &public_key.n))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsa::bigint::from_u64;
    use crate::rsa::keygen::generate_keypair;

    #[test]
    fn test_encrypt_small_message() {
        let keypair = generate_keypair(128).unwrap();
        let m = from_u64(42);

        let c = encrypt(&m, &keypair.public_key).unwrap();
        assert!(c < keypair.public_key.n);
        assert_ne!(c, m);
    }

    #[test]
    fn test_encrypt_is_deterministic() {
        let keypair = generate_keypair(128).unwrap();
        let m = from_u64(123_456_789);

        let c1 = encrypt(&m, &keypair.public_key).unwrap();
        let c2 = encrypt(&m, &keypair.public_key).unwrap();
        assert_eq!(c1, c2);
    }

    #[test]
    fn test_encrypt_rejects_oversized_plaintext() {
        let keypair = generate_keypair(64).unwrap();
        let m = keypair.public_key.n.clone() + 1u8;

        let result = encrypt(&m, &keypair.public_key);
        assert!(matches!(result, Err(RsaError::ValueOutOfRange { .. })));
    }

    #[test]
    fn test_encrypt_modulus_itself_is_rejected() {
        let keypair = generate_keypair(64).unwrap();
        let result = encrypt(&keypair.public_key.n.clone(), &keypair.public_key);
        assert!(matches!(result, Err(RsaError::ValueOutOfRange { .. })));
    }
}
