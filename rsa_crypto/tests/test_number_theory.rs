use num_bigint::{BigInt, BigUint};
use num_traits::{FromPrimitive, One, Zero};
use quickcheck::quickcheck;
use rsa_crypto::number_theory::*;

fn brute_force_pow(x: u64, c: u64, n: u64) -> u64 {
    let mut acc = 1 % n;
    for _ in 0..c {
        acc = acc * x % n;
    }
    acc
}

#[test]
fn test_gcd_basic() {
    let a = BigUint::from_u32(48).unwrap();
    let b = BigUint::from_u32(18).unwrap();
    let result = gcd(&a, &b);
    assert_eq!(result, BigUint::from_u32(6).unwrap());
}

#[test]
fn test_gcd_coprime() {
    let a = BigUint::from_u32(17).unwrap();
    let b = BigUint::from_u32(31).unwrap();
    assert_eq!(gcd(&a, &b), BigUint::one());
}

#[test]
fn test_gcd_zero() {
    let a = BigUint::zero();
    let b = BigUint::from_u32(42).unwrap();
    assert_eq!(gcd(&a, &b), b);
    assert_eq!(gcd(&b, &a), b);
    assert_eq!(gcd(&a, &a), BigUint::zero());
}

#[test]
fn test_gcd_signed_is_non_negative() {
    let a = BigInt::from(-48);
    let b = BigInt::from(18);
    assert_eq!(gcd_signed(&a, &b), BigUint::from(6u32));
    assert_eq!(gcd_signed(&a, &-b), BigUint::from(6u32));
    assert_eq!(gcd_signed(&BigInt::zero(), &BigInt::zero()), BigUint::zero());
}

#[test]
fn test_extended_gcd_basic() {
    let a = BigInt::from(240);
    let b = BigInt::from(46);
    let (x, y, g) = extended_gcd(&a, &b);
    assert_eq!(g, BigInt::from(2));
    assert_eq!(&a * &x + &b * &y, g);
}

#[test]
fn test_extended_gcd_coprime() {
    let a = BigInt::from(30);
    let b = BigInt::from(17);
    let (x, y, g) = extended_gcd(&a, &b);
    assert_eq!(g, BigInt::one());
    assert_eq!(&a * &x + &b * &y, g);
}

#[test]
fn test_extended_gcd_zero_case() {
    let a = BigInt::zero();
    let b = BigInt::from(42);
    let (x, y, g) = extended_gcd(&a, &b);
    assert_eq!(g, b);
    assert_eq!(x, BigInt::zero());
    assert_eq!(y, BigInt::one());
}

#[test]
fn test_extended_gcd_both_zero() {
    let (x, y, g) = extended_gcd(&BigInt::zero(), &BigInt::zero());
    assert_eq!(g, BigInt::zero());
    assert_eq!(x * BigInt::zero() + y * BigInt::zero(), g);
}

#[test]
fn test_extended_gcd_negative_inputs() {
    for (u, v) in [(-240, 46), (240, -46), (-240, -46), (-7, 0)] {
        let (u, v) = (BigInt::from(u), BigInt::from(v));
        let (x, y, g) = extended_gcd(&u, &v);
        assert!(g >= BigInt::zero(), "gcd must be non-negative for ({}, {})", u, v);
        assert_eq!(&u * &x + &v * &y, g);
    }
}

#[test]
fn test_mod_pow_small() {
    let base = BigUint::from_u32(4).unwrap();
    let exp = BigUint::from_u32(13).unwrap();
    let modulus = BigUint::from_u32(497).unwrap();
    let result = mod_pow(&base, &exp, &modulus);
    assert_eq!(result, BigUint::from_u32(445).unwrap());
}

#[test]
fn test_mod_pow_zero_exponent() {
    let base = BigUint::from_u32(42).unwrap();
    let modulus = BigUint::from_u32(5).unwrap();
    let result = mod_pow(&base, &BigUint::zero(), &modulus);
    assert_eq!(result, BigUint::one());
}

#[test]
fn test_mod_pow_zero_base() {
    let modulus = BigUint::from_u32(11).unwrap();
    for c in 1u32..10 {
        assert_eq!(mod_pow(&BigUint::zero(), &BigUint::from(c), &modulus), BigUint::zero());
    }
}

#[test]
fn test_mod_pow_large_exponent() {
    let base = BigUint::from_u32(2).unwrap();
    let exp = BigUint::from_u32(1000).unwrap();
    let modulus = BigUint::from_u32(1009).unwrap();
    let result = mod_pow(&base, &exp, &modulus);
    assert_eq!(result, base.modpow(&exp, &modulus));
}

#[test]
fn test_mod_pow_matches_brute_force() {
    for n in 2u64..40 {
        for x in 0u64..n + 3 {
            for c in 0u64..20 {
                let expected = brute_force_pow(x, c, n);
                let result = mod_pow(&BigUint::from(x), &BigUint::from(c), &BigUint::from(n));
                assert_eq!(result, BigUint::from(expected), "{}^{} mod {}", x, c, n);
            }
        }
    }
}

#[test]
fn test_mod_pow_beyond_machine_word() {
    let modulus = BigUint::parse_bytes(b"340282366920938463463374607431768211507", 10).unwrap();
    let base = BigUint::parse_bytes(b"123456789012345678901234567890", 10).unwrap();
    let exp = BigUint::parse_bytes(b"98765432109876543210", 10).unwrap();
    assert_eq!(mod_pow(&base, &exp, &modulus), base.modpow(&exp, &modulus));
}

#[test]
fn test_mod_inverse_small() {
    let inv = mod_inverse(&BigUint::from(17u32), &BigUint::from(3120u32)).unwrap();
    assert_eq!(inv, BigUint::from(2753u32));
}

#[test]
fn test_mod_inverse_all_residues() {
    for m in 2u32..60 {
        let modulus = BigUint::from(m);
        for a in 0u32..m {
            let a = BigUint::from(a);
            match mod_inverse(&a, &modulus) {
                Some(inv) => {
                    assert!(gcd(&a, &modulus).is_one());
                    assert!(inv < modulus);
                    assert_eq!(&a * &inv % &modulus, BigUint::one());
                }
                None => assert!(!gcd(&a, &modulus).is_one(), "inverse of {} mod {} missed", a, m),
            }
        }
    }
}

#[test]
fn test_mod_inverse_absent() {
    assert_eq!(mod_inverse(&BigUint::from(6u32), &BigUint::from(9u32)), None);
    assert_eq!(mod_inverse(&BigUint::zero(), &BigUint::from(9u32)), None);
    assert_eq!(mod_inverse(&BigUint::from(3u32), &BigUint::zero()), None);
}

quickcheck! {
    fn prop_mod_pow_agrees_with_num_bigint(x: u64, c: u32, n: u64) -> bool {
        if n == 0 { return true; }
        let (x, c, n) = (BigUint::from(x), BigUint::from(c), BigUint::from(n));
        mod_pow(&x, &c, &n) == x.modpow(&c, &n)
    }

    fn prop_bezout_identity(u: i64, v: i64) -> bool {
        let (u, v) = (BigInt::from(u), BigInt::from(v));
        let (x, y, g) = extended_gcd(&u, &v);
        &u * &x + &v * &y == g && g == BigInt::from(gcd_signed(&u, &v))
    }

    fn prop_mod_inverse_is_inverse(a: u64, m: u64) -> bool {
        if m < 2 { return true; }
        let (a, m) = (BigUint::from(a), BigUint::from(m));
        match mod_inverse(&a, &m) {
            Some(inv) => &a * inv % &m == BigUint::one(),
            None => !gcd(&a, &m).is_one(),
        }
    }
}
