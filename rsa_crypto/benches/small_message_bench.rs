use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use num_bigint::BigUint;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rsa_crypto::attacks::small_message::{BreakerConfig, SearchStrategy, SmallMessageAttack};
use rsa_crypto::rsa::keygen::RsaKeyGenerator;
use rsa_crypto::rsa::rsa::encrypt;

fn bench_small_message_attack(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0xC0FFEE);
    let keypair = RsaKeyGenerator::default()
        .generate_keypair(&BigUint::from(1u32 << 15), &BigUint::from(1u32 << 16), &mut rng)
        .unwrap();
    let key = keypair.public_key().clone();

    // два символа по 8 бит
    let message = BigUint::from(0x4869u32);
    let ciphertext = encrypt(&message, key.e(), key.n()).unwrap();

    let mut group = c.benchmark_group("Small message attack");
    group.sample_size(10);

    for (strategy, bits) in [
        (SearchStrategy::Nested, 8u32),
        (SearchStrategy::Indexed, 8),
        (SearchStrategy::Indexed, 12),
        (SearchStrategy::Parallel, 12),
    ] {
        let attack = SmallMessageAttack::new(BreakerConfig {
            strategy,
            ..BreakerConfig::default()
        });
        group.bench_with_input(
            BenchmarkId::new(format!("{:?}", strategy), bits),
            &bits,
            |b, &bits| b.iter(|| attack.attack(&key, &ciphertext, bits).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_small_message_attack);
criterion_main!(benches);
