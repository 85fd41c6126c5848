// RSA primitive engine: probabilistic primality testing, key pair
// generation, integer encryption/decryption, and message signing.
//
// Everything operates on raw arbitrary-precision integers and key
// tuples; there is no padding, no key encoding, and no persistence.
// The surrounding application owns all state between calls.

pub mod error;
pub mod rsa;

pub use error::{RsaError, RsaResult};
pub use rsa::{
    decrypt, encrypt, generate_default_keypair, generate_keypair, message_digest, sign, verify,
    RsaKeyPair, RsaPrivateKey, RsaPublicKey,
};

#[cfg(test)]
mod tests {
    use super::*;
    use num_bigint::BigUint;

    // End-to-end exercise at the production key size: 512-bit primes,
    // one encrypt/decrypt round-trip, one sign/verify pass, and a
    // cross-key rejection.
    #[test]
    fn test_full_scenario_at_default_key_size() {
        let keypair = generate_default_keypair().unwrap();
        assert_eq!(keypair.prime_bits, 512);
        assert!(keypair.modulus_bits() >= 1023);

        let m = BigUint::from(42u8);
        let c = keypair.public_key.encrypt(&m).unwrap();
        assert_eq!(keypair.private_key.decrypt(&c).unwrap(), m);

        let signature = keypair.private_key.sign(b"hello");
        assert!(keypair.public_key.verify(b"hello", &signature));

        let other = generate_keypair(512).unwrap();
        assert!(!other.public_key.verify(b"hello", &signature));
    }
}
