use crate::error::{Result, RsaError};
use crate::number_theory::{ceil_log2, gcd, mod_inverse};
use crate::primality::{DEFAULT_ROUNDS, MillerRabinTest, PrimalityTest, is_prime_fixed_bases};
use log::{debug, trace};
use num_bigint::{BigUint, RandBigInt};
use num_traits::One;
use rand::Rng;

/// Открытый ключ (e, n)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PublicKey {
    e: BigUint,
    n: BigUint,
}

impl PublicKey {
    pub fn new(e: BigUint, n: BigUint) -> Self {
        Self { e, n }
    }

    pub fn e(&self) -> &BigUint {
        &self.e
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

/// Закрытый ключ (d, n)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PrivateKey {
    d: BigUint,
    n: BigUint,
}

impl PrivateKey {
    pub fn new(d: BigUint, n: BigUint) -> Self {
        Self { d, n }
    }

    pub fn d(&self) -> &BigUint {
        &self.d
    }

    pub fn n(&self) -> &BigUint {
        &self.n
    }
}

/// Пара ключей RSA вместе с простыми, из которых она построена
#[derive(Clone, Debug)]
pub struct RsaKeyPair {
    public: PublicKey,
    private: PrivateKey,
    #[doc(hidden)]
    pub(crate) p: BigUint,
    #[doc(hidden)]
    pub(crate) q: BigUint,
}

impl RsaKeyPair {
    /// Собирает пару ключей из известных простых p, q и показателя e.
    /// p и q должны быть различными простыми, e должен лежать в (⌈log₂ n⌉, φ)
    /// и быть взаимно простым с φ = (p-1)(q-1).
    pub fn from_primes(p: BigUint, q: BigUint, e: BigUint) -> Result<Self> {
        if p == q || !is_prime_fixed_bases(&p) || !is_prime_fixed_bases(&q) {
            return Err(RsaError::InvalidPrimes { p, q });
        }

        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);

        if e <= BigUint::from(ceil_log2(&n)) || e >= phi {
            return Err(RsaError::InvalidExponent { e, phi });
        }
        let Some(d) = mod_inverse(&e, &phi) else {
            return Err(RsaError::InvalidExponent { e, phi });
        };

        Ok(Self {
            public: PublicKey::new(e, n.clone()),
            private: PrivateKey::new(d, n),
            p,
            q,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    pub fn into_parts(self) -> (PublicKey, PrivateKey) {
        (self.public, self.private)
    }

    /// φ(n) = (p-1)(q-1)
    pub fn phi(&self) -> BigUint {
        (&self.p - 1u32) * (&self.q - 1u32)
    }

    #[doc(hidden)]
    pub fn get_p(&self) -> &BigUint {
        &self.p
    }

    #[doc(hidden)]
    pub fn get_q(&self) -> &BigUint {
        &self.q
    }
}

/// Параметры генерации ключей
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyGenConfig {
    /// Число раундов Миллера–Рабина на кандидата
    pub rounds: u32,
    /// Предел попыток выборки простых и показателя
    pub max_attempts: u32,
}

impl Default for KeyGenConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            max_attempts: 100_000,
        }
    }
}

/// Сервис генерации ключей RSA
#[derive(Clone, Debug, Default)]
pub struct RsaKeyGenerator {
    config: KeyGenConfig,
}

impl RsaKeyGenerator {
    pub fn new(config: KeyGenConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &KeyGenConfig {
        &self.config
    }

    /// Генерация пары ключей с простыми p ≠ q из [lower, upper]
    pub fn generate_keypair<R: Rng>(
        &self,
        lower: &BigUint,
        upper: &BigUint,
        rng: &mut R,
    ) -> Result<RsaKeyPair> {
        if *lower < BigUint::from(2u8) || lower > upper {
            return Err(RsaError::InvalidRange {
                lower: lower.clone(),
                upper: upper.clone(),
            });
        }

        let (p, q) = self.sample_primes(&MillerRabinTest, lower, upper, rng)?;
        let n = &p * &q;
        let phi = (&p - 1u32) * (&q - 1u32);
        let e = self.choose_exponent(&n, &phi, rng)?;
        debug!("chose public exponent e = {} for n = {}", e, n);

        RsaKeyPair::from_primes(p, q, e)
    }

    /// Выбирает p и q независимо; прошедший тест кандидат больше не перепроверяется
    fn sample_primes<R: Rng>(
        &self,
        test: &dyn PrimalityTest,
        lower: &BigUint,
        upper: &BigUint,
        rng: &mut R,
    ) -> Result<(BigUint, BigUint)> {
        let bound = upper + 1u32;
        let mut p: Option<BigUint> = None;
        let mut q: Option<BigUint> = None;

        for attempt in 1..=self.config.max_attempts {
            if p.is_none() {
                let candidate = rng.gen_biguint_range(lower, &bound);
                if test.is_probably_prime(&candidate, self.config.rounds, &mut *rng) {
                    trace!("accepted p = {}", candidate);
                    p = Some(candidate);
                }
            }
            if q.is_none() {
                let candidate = rng.gen_biguint_range(lower, &bound);
                if test.is_probably_prime(&candidate, self.config.rounds, &mut *rng) {
                    trace!("accepted q = {}", candidate);
                    q = Some(candidate);
                }
            }

            if p.is_some() && p == q {
                q = None;
                continue;
            }
            if let (Some(p), Some(q)) = (&p, &q) {
                debug!("found primes p = {}, q = {} after {} attempts", p, q, attempt);
                return Ok((p.clone(), q.clone()));
            }
        }

        Err(RsaError::NoPrimeFound {
            attempts: self.config.max_attempts,
        })
    }

    /// e выбирается равномерно из (⌈log₂ n⌉, φ) до тех пор, пока gcd(e, φ) ≠ 1
    fn choose_exponent<R: Rng>(&self, n: &BigUint, phi: &BigUint, rng: &mut R) -> Result<BigUint> {
        let low = BigUint::from(ceil_log2(n) + 1);
        if low >= *phi {
            return Err(RsaError::NoExponentFound { phi: phi.clone() });
        }

        for _ in 0..self.config.max_attempts {
            let e = rng.gen_biguint_range(&low, phi);
            if gcd(&e, phi).is_one() {
                return Ok(e);
            }
        }

        Err(RsaError::NoExponentFound { phi: phi.clone() })
    }
}

/// Генерация пары ключей с настройками по умолчанию
pub fn generate_keypair<R: Rng>(
    lower: &BigUint,
    upper: &BigUint,
    rng: &mut R,
) -> Result<(PublicKey, PrivateKey)> {
    RsaKeyGenerator::default()
        .generate_keypair(lower, upper, rng)
        .map(RsaKeyPair::into_parts)
}
