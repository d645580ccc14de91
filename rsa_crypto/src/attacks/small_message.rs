use crate::error::{Result, RsaError};
use crate::number_theory::{mod_inverse, mod_pow};
use crate::rsa::keygen::PublicKey;
use log::{debug, info};
use num_bigint::BigUint;
use num_traits::Zero;
use rayon::prelude::*;
use std::collections::HashMap;

/// Предел ширины поиска по умолчанию: таблица из 2^24 шифротекстов
pub const DEFAULT_MAX_BIT_WIDTH: u32 = 24;

/// Способ поиска коллизии E(i) * E(j) = c
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStrategy {
    /// Вложенный перебор по i и j, O(r²)
    Nested,
    /// Перебор по i с поиском j в хеш-таблице, O(r)
    #[default]
    Indexed,
    /// Как `Indexed`, но таблица и перебор по i параллельны (rayon)
    Parallel,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakerConfig {
    pub strategy: SearchStrategy,
    pub max_bit_width: u32,
}

impl Default for BreakerConfig {
    fn default() -> Self {
        Self {
            strategy: SearchStrategy::default(),
            max_bit_width: DEFAULT_MAX_BIT_WIDTH,
        }
    }
}

/// Результат атаки: открытый текст и пара (i, j), на которой найдена коллизия
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmallMessageAttackResult {
    pub plaintext: BigUint,
    pub i: usize,
    pub j: usize,
}

impl SmallMessageAttackResult {
    fn new(i: usize, j: usize, n: &BigUint) -> Self {
        let plaintext = BigUint::from(i) * BigUint::from(j) % n;
        Self { plaintext, i, j }
    }
}

/// Таблица table[k] = k^e mod n для k из [0, r), table[0] = 0.
///
/// # Panics
///
/// Паникует, если `n` равен нулю.
pub fn generate_ciphertexts(e: &BigUint, n: &BigUint, r: usize) -> Vec<BigUint> {
    (0..r).map(|k| table_entry(k, e, n)).collect()
}

/// Параллельный вариант `generate_ciphertexts` с тем же порядком элементов
pub fn generate_ciphertexts_parallel(e: &BigUint, n: &BigUint, r: usize) -> Vec<BigUint> {
    (0..r).into_par_iter().map(|k| table_entry(k, e, n)).collect()
}

fn table_entry(k: usize, e: &BigUint, n: &BigUint) -> BigUint {
    if k == 0 {
        return BigUint::zero();
    }
    mod_pow(&BigUint::from(k), e, n)
}

/// Ищет наименьшее i, затем наименьшее j из [1, r), для которых
/// table[j] = ciphertext * table[i]⁻¹ mod n. Ответ: i * j mod n.
pub fn find_message(
    table: &[BigUint],
    ciphertext: &BigUint,
    n: &BigUint,
    strategy: SearchStrategy,
) -> Option<SmallMessageAttackResult> {
    match strategy {
        SearchStrategy::Nested => scan_nested(table, ciphertext, n),
        SearchStrategy::Indexed => scan_indexed(table, ciphertext, n),
        SearchStrategy::Parallel => scan_parallel(table, ciphertext, n),
    }
}

/// Значение, которое должен принять table[j] для данного i
fn target_for(table: &[BigUint], i: usize, ciphertext: &BigUint, n: &BigUint) -> Option<BigUint> {
    let inv = mod_inverse(&table[i], n)?;
    Some(ciphertext * inv % n)
}

fn scan_nested(
    table: &[BigUint],
    ciphertext: &BigUint,
    n: &BigUint,
) -> Option<SmallMessageAttackResult> {
    for i in 1..table.len() {
        let Some(target) = target_for(table, i, ciphertext, n) else {
            continue;
        };
        for j in 1..table.len() {
            if table[j] == target {
                return Some(SmallMessageAttackResult::new(i, j, n));
            }
        }
    }
    None
}

/// Значение шифротекста -> наименьший индекс j >= 1 с этим значением
fn index_table(table: &[BigUint]) -> HashMap<&BigUint, usize> {
    let mut index = HashMap::with_capacity(table.len());
    for (j, value) in table.iter().enumerate().skip(1) {
        index.entry(value).or_insert(j);
    }
    index
}

fn scan_indexed(
    table: &[BigUint],
    ciphertext: &BigUint,
    n: &BigUint,
) -> Option<SmallMessageAttackResult> {
    let index = index_table(table);
    (1..table.len()).find_map(|i| {
        let target = target_for(table, i, ciphertext, n)?;
        index
            .get(&target)
            .map(|&j| SmallMessageAttackResult::new(i, j, n))
    })
}

fn scan_parallel(
    table: &[BigUint],
    ciphertext: &BigUint,
    n: &BigUint,
) -> Option<SmallMessageAttackResult> {
    let index = index_table(table);
    // find_map_first возвращает совпадение с наименьшим i
    (1..table.len()).into_par_iter().find_map_first(|i| {
        let target = target_for(table, i, ciphertext, n)?;
        index
            .get(&target)
            .map(|&j| SmallMessageAttackResult::new(i, j, n))
    })
}

/// Атака на RSA для коротких сообщений через мультипликативность шифрования
#[derive(Clone, Debug, Default)]
pub struct SmallMessageAttack {
    config: BreakerConfig,
}

impl SmallMessageAttack {
    pub fn new(config: BreakerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &BreakerConfig {
        &self.config
    }

    /// Ищет открытый текст вида i * j mod n, где 1 <= i, j < 2^bit_width.
    /// `Ok(None)` означает, что коллизия в пределах ширины поиска не найдена.
    pub fn attack(
        &self,
        public: &PublicKey,
        ciphertext: &BigUint,
        bit_width: u32,
    ) -> Result<Option<SmallMessageAttackResult>> {
        let (e, n) = (public.e(), public.n());
        if n.is_zero() {
            return Err(RsaError::ZeroModulus);
        }
        if ciphertext >= n {
            return Err(RsaError::CiphertextOutOfRange {
                ciphertext: ciphertext.clone(),
                modulus: n.clone(),
            });
        }

        let max = self.config.max_bit_width.min(usize::BITS - 1);
        if bit_width > max {
            return Err(RsaError::BitWidthTooLarge { bit_width, max });
        }
        let r = 1usize << bit_width;

        let table = match self.config.strategy {
            SearchStrategy::Parallel => generate_ciphertexts_parallel(e, n, r),
            SearchStrategy::Nested | SearchStrategy::Indexed => generate_ciphertexts(e, n, r),
        };
        let found = find_message(&table, ciphertext, n, self.config.strategy);

        match &found {
            Some(hit) => info!(
                "recovered plaintext {} from ciphertext {} (i = {}, j = {})",
                hit.plaintext, ciphertext, hit.i, hit.j
            ),
            None => debug!("no collision for ciphertext {} with r = {}", ciphertext, r),
        }
        Ok(found)
    }
}

/// Атака с настройками по умолчанию, r = 2^bit_width
pub fn break_small_message(
    e: &BigUint,
    n: &BigUint,
    ciphertext: &BigUint,
    bit_width: u32,
) -> Result<Option<BigUint>> {
    let public = PublicKey::new(e.clone(), n.clone());
    let found = SmallMessageAttack::default().attack(&public, ciphertext, bit_width)?;
    Ok(found.map(|hit| hit.plaintext))
}
