pub mod small_message;

pub use small_message::{
    BreakerConfig, SearchStrategy, SmallMessageAttack, SmallMessageAttackResult,
    break_small_message, find_message, generate_ciphertexts,
};
