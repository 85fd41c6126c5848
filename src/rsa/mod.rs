// RSA Module - Main module file
// Exports all RSA-related functionality

pub mod bigint;
pub mod keygen;
pub mod encrypt;
pub mod decrypt;
pub mod signature;

pub use keygen::{
    generate_default_keypair, generate_keypair, RsaKeyPair, RsaPrivateKey, RsaPublicKey,
    DEFAULT_PRIME_BITS,
};
pub use encrypt::encrypt;
pub use decrypt::decrypt;
pub use signature::{message_digest, sign, verify};
