use crate::error::{Result, RsaError};
use crate::number_theory::mod_pow;
use crate::rsa::keygen::{KeyGenConfig, PrivateKey, PublicKey, RsaKeyGenerator, RsaKeyPair};
use num_bigint::BigUint;
use num_traits::Zero;
use rand::thread_rng;

/// Шифрование: message^e mod n, требуется 0 <= message < n
pub fn encrypt(message: &BigUint, e: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(RsaError::ZeroModulus);
    }
    if message >= n {
        return Err(RsaError::MessageOutOfRange {
            message: message.clone(),
            modulus: n.clone(),
        });
    }
    Ok(mod_pow(message, e, n))
}

/// Расшифрование: ciphertext^d mod n
pub fn decrypt(ciphertext: &BigUint, d: &BigUint, n: &BigUint) -> Result<BigUint> {
    if n.is_zero() {
        return Err(RsaError::ZeroModulus);
    }
    if ciphertext >= n {
        return Err(RsaError::CiphertextOutOfRange {
            ciphertext: ciphertext.clone(),
            modulus: n.clone(),
        });
    }
    Ok(mod_pow(ciphertext, d, n))
}

pub struct RsaService {
    keypair: RsaKeyPair,
}

impl RsaService {
    pub fn new(keypair: RsaKeyPair) -> Self {
        Self { keypair }
    }

    /// Генерирует ключи с простыми из [lower, upper], используя `thread_rng`
    pub fn generate(lower: &BigUint, upper: &BigUint) -> Result<Self> {
        let generator = RsaKeyGenerator::new(KeyGenConfig::default());
        let keypair = generator.generate_keypair(lower, upper, &mut thread_rng())?;
        Ok(Self { keypair })
    }

    pub fn encrypt(&self, m: &BigUint) -> Result<BigUint> {
        let key = self.keypair.public_key();
        encrypt(m, key.e(), key.n())
    }

    pub fn decrypt(&self, ciphertext: &BigUint) -> Result<BigUint> {
        let key = self.keypair.private_key();
        decrypt(ciphertext, key.d(), key.n())
    }

    pub fn public_key(&self) -> &PublicKey {
        self.keypair.public_key()
    }

    pub fn private_key(&self) -> &PrivateKey {
        self.keypair.private_key()
    }

    pub fn keypair(&self) -> &RsaKeyPair {
        &self.keypair
    }
}
