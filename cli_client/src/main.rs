mod codec;

use std::io::{self, BufRead};
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use num_bigint::BigUint;
use rand::thread_rng;

use rsa_crypto::attacks::{BreakerConfig, SearchStrategy, SmallMessageAttack};
use rsa_crypto::primality::DEFAULT_ROUNDS;
use rsa_crypto::rsa::{KeyGenConfig, PublicKey, RsaKeyGenerator, decrypt, encrypt};

#[derive(Parser)]
#[command(name = "rsa_cli", about = "RSA key generation, encryption and small-message breaking")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a key pair from primes drawn in [lower, upper]
    Keygen {
        lower: BigUint,
        upper: BigUint,
        /// Miller-Rabin rounds per candidate
        #[arg(long, default_value_t = DEFAULT_ROUNDS)]
        rounds: u32,
        /// Sampling attempts before giving up
        #[arg(long, default_value_t = 100_000)]
        max_attempts: u32,
    },
    /// Encrypt text with the public key (e, n), one ciphertext per line
    Encrypt { e: BigUint, n: BigUint, text: String },
    /// Decrypt ciphertexts read from stdin with the private key (d, n)
    Decrypt { d: BigUint, n: BigUint },
    /// Recover text from ciphertexts on stdin using only the public key
    Break {
        e: BigUint,
        n: BigUint,
        /// Search width in bits, r = 2^bits
        bits: u32,
        #[arg(long, value_enum, default_value_t = StrategyArg::Indexed)]
        strategy: StrategyArg,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Nested,
    Indexed,
    Parallel,
}

impl From<StrategyArg> for SearchStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Nested => SearchStrategy::Nested,
            StrategyArg::Indexed => SearchStrategy::Indexed,
            StrategyArg::Parallel => SearchStrategy::Parallel,
        }
    }
}

fn read_ciphertexts() -> Result<Vec<BigUint>, Box<dyn std::error::Error>> {
    let mut ciphertexts = Vec::new();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        ciphertexts.push(line.parse::<BigUint>()?);
    }
    Ok(ciphertexts)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Keygen {
            lower,
            upper,
            rounds,
            max_attempts,
        } => {
            let generator = RsaKeyGenerator::new(KeyGenConfig {
                rounds,
                max_attempts,
            });
            let keypair = generator.generate_keypair(&lower, &upper, &mut thread_rng())?;
            let (public, private) = keypair.into_parts();
            println!("Public Key (e, n)");
            println!("({}, {})", public.e(), public.n());
            println!("Private Key (d, n)");
            println!("({}, {})", private.d(), private.n());
        }
        Command::Encrypt { e, n, text } => {
            for block in codec::encode_text(&text)? {
                println!("{}", encrypt(&block, &e, &n)?);
            }
        }
        Command::Decrypt { d, n } => {
            let blocks = read_ciphertexts()?
                .iter()
                .map(|c| decrypt(c, &d, &n))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", codec::decode_blocks(&blocks)?);
        }
        Command::Break {
            e,
            n,
            bits,
            strategy,
        } => {
            println!("Public Key");
            println!("{} {}", e, n);

            let public = PublicKey::new(e, n);
            let attack = SmallMessageAttack::new(BreakerConfig {
                strategy: strategy.into(),
                ..BreakerConfig::default()
            });

            let tick = Instant::now();
            let mut found = Vec::new();
            for ciphertext in read_ciphertexts()? {
                match attack.attack(&public, &ciphertext, bits)? {
                    Some(hit) => found.push(hit.plaintext),
                    None => log::warn!("ciphertext {} not broken", ciphertext),
                }
            }
            let elapsed = tick.elapsed();
            log::info!("search finished in {:?}", elapsed);

            println!("Time taken: {:.2} seconds.", elapsed.as_secs_f64());
            println!("Found message: {}", codec::decode_blocks(&found)?);
        }
    }

    Ok(())
}
