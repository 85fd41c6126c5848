// Error types for the RSA engine

use thiserror::Error;

/// Errors that can occur inside the RSA engine
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RsaError {
    /// gcd(e, phi) != 1 when computing the private exponent. Key generation
    /// always selects e coprime with phi first, so hitting this is an
    /// internal invariant violation, not a caller mistake.
    #[error("public exponent is not invertible modulo the totient")]
    NonInvertibleExponent,

    /// An encrypt/decrypt operand was >= the modulus. Textbook RSA would
    /// silently wrap such a value and lose information.
    #[error("operand of {value_bits} bits is out of range for a {modulus_bits}-bit modulus")]
    ValueOutOfRange {
        value_bits: u64,
        modulus_bits: u64,
    },

    /// Requested prime size below the supported minimum.
    #[error("prime bit length {bits} is too small, minimum is {min}")]
    PrimeBitsTooSmall { bits: u64, min: u64 },
}

/// Result type for RSA engine operations
pub type RsaResult<T> = Result<T, RsaError>;
