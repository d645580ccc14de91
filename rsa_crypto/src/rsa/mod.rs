pub mod keygen;
pub mod rsa;

pub use keygen::{KeyGenConfig, PrivateKey, PublicKey, RsaKeyGenerator, RsaKeyPair, generate_keypair};
pub use rsa::{RsaService, decrypt, encrypt};
