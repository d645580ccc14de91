use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

/// НОД двух неотрицательных чисел, gcd(0, 0) = 0
pub fn gcd(a: &BigUint, b: &BigUint) -> BigUint {
    let mut a = a.clone();
    let mut b = b.clone();
    while !b.is_zero() {
        let r = a % &b;
        a = b;
        b = r;
    }
    a
}

/// НОД знаковых чисел, результат всегда неотрицательный
pub fn gcd_signed(a: &BigInt, b: &BigInt) -> BigUint {
    gcd(a.magnitude(), b.magnitude())
}

/// Возвращает (x, y, g) такие что: ux + vy = g = gcd(|u|, |v|)
pub fn extended_gcd(u: &BigInt, v: &BigInt) -> (BigInt, BigInt, BigInt) {
    let (mut old_r, mut r) = (u.abs(), v.abs());
    let (mut old_s, mut s) = (BigInt::one(), BigInt::zero());
    let (mut old_t, mut t) = (BigInt::zero(), BigInt::one());

    while !r.is_zero() {
        let q = &old_r / &r;

        let tmp_r = old_r - &q * &r;
        old_r = r;
        r = tmp_r;

        let tmp_s = old_s - &q * &s;
        old_s = s;
        s = tmp_s;

        let tmp_t = old_t - &q * &t;
        old_t = t;
        t = tmp_t;
    }

    // коэффициенты найдены для |u| и |v|
    if u.is_negative() {
        old_s = -old_s;
    }
    if v.is_negative() {
        old_t = -old_t;
    }

    (old_s, old_t, old_r)
}

/// Обратный элемент a по модулю m в диапазоне [0, m), если gcd(a, m) = 1
pub fn mod_inverse(a: &BigUint, m: &BigUint) -> Option<BigUint> {
    if m.is_zero() {
        return None;
    }

    let m_int = BigInt::from(m.clone());
    let (x, _, g) = extended_gcd(&BigInt::from(a.clone()), &m_int);
    if !g.is_one() {
        return None;
    }

    x.mod_floor(&m_int).to_biguint()
}

/// Возведение в степень по модулю: base^exp mod modulus.
///
/// Биты показателя обрабатываются от старшего к младшему: на каждом шаге
/// аккумулятор возводится в квадрат и, если бит равен 1, умножается на base.
///
/// # Panics
///
/// Паникует, если `modulus` равен нулю.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    assert!(!modulus.is_zero(), "modulus must be positive");

    let base = base % modulus;
    let mut result = BigUint::one() % modulus;

    for i in (0..exponent.bits()).rev() {
        result = &result * &result % modulus;
        if exponent.bit(i) {
            result = result * &base % modulus;
        }
    }
    result
}

/// ⌈log₂ n⌉, для n <= 1 равен 0
pub fn ceil_log2(n: &BigUint) -> u64 {
    if *n <= BigUint::one() {
        return 0;
    }
    (n - 1u32).bits()
}
