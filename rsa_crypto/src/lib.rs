pub mod attacks;
pub mod error;
pub mod number_theory;
pub mod primality;
pub mod rsa;

pub use error::{Result, RsaError};
