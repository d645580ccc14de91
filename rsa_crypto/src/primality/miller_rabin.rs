use crate::number_theory::mod_pow;
use crate::primality::PrimalityTest;
use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::RngCore;

/// Структура, реализующая тест Миллера–Рабина
pub struct MillerRabinTest;

/// Основания, при которых проверка детерминирована для n < 3.3 * 10^24
const FIXED_BASES: [u32; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Раскладывает n - 1 = d * 2^s с нечётным d, возвращает (s, d).
///
/// # Panics
///
/// Паникует, если `n < 2`.
pub fn decompose(n: &BigUint) -> (u64, BigUint) {
    assert!(*n >= BigUint::from(2u8), "n must be at least 2");
    let n_minus_one = n - 1u32;
    let s = n_minus_one.trailing_zeros().unwrap_or(0);
    let d = n_minus_one >> s;
    (s, d)
}

/// Один раунд для свидетеля a: true, если n вероятно простое
///
/// # Panics
///
/// Паникует, если `n < 2`.
pub fn witness_test(a: &BigUint, s: u64, d: &BigUint, n: &BigUint) -> bool {
    assert!(*n >= BigUint::from(2u8), "n must be at least 2");
    let n_minus_one = n - 1u32;
    let mut x = mod_pow(a, d, n);

    if x.is_one() {
        return true;
    }

    for _ in 0..s.saturating_sub(1) {
        if x == n_minus_one {
            return true;
        }
        x = &x * &x % n;
    }

    x == n_minus_one
}

/// Тест Миллера–Рабина по фиксированным основаниям, без случайности.
/// Точен для n < 3.3 * 10^24, для больших n остаётся вероятностным.
pub fn is_prime_fixed_bases(n: &BigUint) -> bool {
    let two = BigUint::from(2u8);
    if *n < two {
        return false;
    }
    if *n == two {
        return true;
    }
    if n.is_even() {
        return false;
    }

    let (s, d) = decompose(n);
    FIXED_BASES.iter().all(|&base| {
        let a = BigUint::from(base) % n;
        // основание кратно n только если n само одно из оснований
        a.is_zero() || witness_test(&a, s, &d, n)
    })
}

impl PrimalityTest for MillerRabinTest {
    fn run_iteration(&self, n: &BigUint, rng: &mut dyn RngCore) -> bool {
        let two = BigUint::from(2u8);

        if *n < two {
            return false;
        }
        if *n == two {
            return true;
        }
        if n.is_even() {
            return false;
        }

        let (s, d) = decompose(n);
        // свидетель a ∈ [1, n-1]
        let a = rng.gen_biguint_range(&BigUint::one(), n);
        witness_test(&a, s, &d, n)
    }
}
