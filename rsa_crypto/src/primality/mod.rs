pub(crate) mod miller_rabin;
pub use miller_rabin::{MillerRabinTest, decompose, is_prime_fixed_bases, witness_test};

use num_bigint::BigUint;
use rand::{Rng, RngCore};

/// Число раундов по умолчанию: вероятность ошибки не больше 4^-64
pub const DEFAULT_ROUNDS: u32 = 64;

/// Интерфейс для вероятностного теста простоты.
/// Использует шаблонный метод: фиксированный public API, переопределяется одна итерация.
pub trait PrimalityTest {
    /// Возвращает true, только если n прошло все `rounds` итераций
    fn is_probably_prime(&self, n: &BigUint, rounds: u32, rng: &mut dyn RngCore) -> bool {
        for _ in 0..rounds.max(1) {
            if !self.run_iteration(n, rng) {
                return false;
            }
        }
        true
    }

    /// Одна итерация теста со свидетелем из `rng`
    fn run_iteration(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool;
}

/// Тест Миллера–Рабина с `DEFAULT_ROUNDS` раундами
pub fn is_probable_prime<R: Rng>(n: &BigUint, rng: &mut R) -> bool {
    MillerRabinTest.is_probably_prime(n, DEFAULT_ROUNDS, rng)
}
