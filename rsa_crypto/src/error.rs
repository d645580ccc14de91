use num_bigint::BigUint;
use thiserror::Error;

/// Ошибки генерации ключей, шифрования и атаки
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RsaError {
    #[error("modulus must be positive")]
    ZeroModulus,

    #[error("message {message} is out of range for modulus {modulus}")]
    MessageOutOfRange { message: BigUint, modulus: BigUint },

    #[error("ciphertext {ciphertext} is out of range for modulus {modulus}")]
    CiphertextOutOfRange {
        ciphertext: BigUint,
        modulus: BigUint,
    },

    #[error("invalid prime range [{lower}, {upper}]")]
    InvalidRange { lower: BigUint, upper: BigUint },

    #[error("p = {p} and q = {q} must be distinct primes")]
    InvalidPrimes { p: BigUint, q: BigUint },

    #[error("no pair of distinct primes found after {attempts} attempts")]
    NoPrimeFound { attempts: u32 },

    #[error("no public exponent coprime to phi = {phi} in the admissible range")]
    NoExponentFound { phi: BigUint },

    #[error("public exponent {e} is out of range or not invertible modulo phi = {phi}")]
    InvalidExponent { e: BigUint, phi: BigUint },

    #[error("search bit width {bit_width} exceeds the limit of {max}")]
    BitWidthTooLarge { bit_width: u32, max: u32 },
}

pub type Result<T> = std::result::Result<T, RsaError>;
