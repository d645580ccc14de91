use num_bigint::BigUint;
use rand::thread_rng;

use rsa_crypto::attacks::{SearchStrategy, BreakerConfig, SmallMessageAttack};
use rsa_crypto::rsa::{KeyGenConfig, RsaKeyGenerator, RsaService};

fn main() -> Result<(), rsa_crypto::RsaError> {
    // 1) Генерация ключей: простые из [1000, 5000]
    let generator = RsaKeyGenerator::new(KeyGenConfig::default());
    let keypair = generator.generate_keypair(
        &BigUint::from(1_000u32),
        &BigUint::from(5_000u32),
        &mut thread_rng(),
    )?;
    let rsa = RsaService::new(keypair);

    let public = rsa.public_key().clone();
    println!(
        "Сгенерирован ключ:\n  n = {}\n  e = {}\n  d = {}",
        public.n(),
        public.e(),
        rsa.private_key().d()
    );

    // 2) Шифрование/дешифрование через методы RsaService
    let msg = BigUint::from(42u32 * 97);
    let c = rsa.encrypt(&msg)?;
    let m = rsa.decrypt(&c)?;
    assert_eq!(m, msg);
    println!("Шифрование→дешифрование успешно: {msg} → {c} → {m}");

    // 3) Атака на короткие сообщения: только открытый ключ и шифротекст
    let attack = SmallMessageAttack::new(BreakerConfig {
        strategy: SearchStrategy::Parallel,
        ..BreakerConfig::default()
    });
    match attack.attack(&public, &c, 8)? {
        Some(res) => println!(
            "SmallMessageAttack Succeeded: m = {} = {} * {} mod n",
            res.plaintext, res.i, res.j
        ),
        None => println!("SmallMessageAttack failed (сообщение вне ширины поиска)"),
    }

    Ok(())
}
