//! Command-line interface for the AES mode drivers.

#![forbid(unsafe_code)]

mod kat;
mod telemetry;

use std::fs;
use std::path::{Path, PathBuf};

use aes_modes::{
    cbc_decrypt, cbc_encrypt, ctr_xcrypt, ecb_decrypt, ecb_encrypt, Block, Context, Key,
    BLOCK_LEN,
};
use anyhow::{bail, Context as _, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rand::{CryptoRng, RngCore, SeedableRng};
use rand_chacha::ChaCha20Rng;
use tracing::{debug, info, warn};
use zeroize::Zeroizing;

/// AES file encryption CLI.
#[derive(Parser)]
#[command(
    name = "cyfn",
    version,
    author,
    about = "AES-128/192/256 in ECB, CBC and CTR modes"
)]
struct Cli {
    /// Log filter used when `RUST_LOG` is unset.
    #[arg(long, env = "CYFN_LOG", default_value = "warn", global = true)]
    log_level: String,
    /// Emit logs as JSON lines.
    #[arg(long, default_value_t = false, global = true)]
    log_json: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file.
    Enc(CryptArgs),
    /// Decrypt a file. For CTR this is the same operation as `enc`.
    Dec(CryptArgs),
    /// Run the built-in NIST known-answer vectors.
    Check,
    /// Generate a key and IV, then round-trip random data through every mode.
    Demo {
        /// Optional RNG seed for reproducibility.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[derive(Args)]
struct CryptArgs {
    /// Mode of operation.
    #[arg(long, value_enum)]
    mode: Mode,
    /// AES key as 32, 48 or 64 hex characters; the length picks the variant.
    #[arg(long, env = "CYFN_KEY_HEX", hide_env_values = true, value_name = "HEX")]
    key_hex: String,
    /// IV or initial counter as 32 hex characters (required for cbc and ctr).
    #[arg(long, env = "CYFN_IV_HEX", hide_env_values = true, value_name = "HEX")]
    iv_hex: Option<String>,
    /// Input file. ECB and CBC need a multiple of 16 bytes.
    #[arg(long, value_name = "FILE")]
    input: PathBuf,
    /// Output path.
    #[arg(long, value_name = "FILE")]
    output: PathBuf,
}

/// Block cipher mode of operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Mode {
    Ecb,
    Cbc,
    Ctr,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    Encrypt,
    Decrypt,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level, cli.log_json)?;
    match cli.command {
        Commands::Enc(args) => cmd_crypt(&args, Direction::Encrypt),
        Commands::Dec(args) => cmd_crypt(&args, Direction::Decrypt),
        Commands::Check => cmd_check(),
        Commands::Demo { seed } => cmd_demo(seed),
    }
}

fn cmd_crypt(args: &CryptArgs, direction: Direction) -> Result<()> {
    let key = parse_key_hex(&args.key_hex)?;
    let iv = args.iv_hex.as_deref().map(parse_iv_hex).transpose()?;
    crypt_file(args.mode, direction, key, iv, &args.input, &args.output)
}

fn crypt_file(
    mode: Mode,
    direction: Direction,
    key: Key,
    iv: Option<Block>,
    input: &Path,
    output: &Path,
) -> Result<()> {
    let mut data = Zeroizing::new(
        fs::read(input).with_context(|| format!("read {}", input.display()))?,
    );
    info!(
        ?mode,
        ?direction,
        key_size = ?key.size(),
        bytes = data.len(),
        input = %input.display(),
        "processing file"
    );
    apply(mode, direction, key, iv, &mut data)?;
    fs::write(output, data.as_slice()).with_context(|| format!("write {}", output.display()))?;
    info!(output = %output.display(), "wrote result");
    Ok(())
}

/// Validates the caller-side preconditions the engine leaves unchecked, then
/// runs the selected mode over `data` in place.
fn apply(
    mode: Mode,
    direction: Direction,
    key: Key,
    iv: Option<Block>,
    data: &mut [u8],
) -> Result<()> {
    if matches!(mode, Mode::Ecb | Mode::Cbc) && data.len() % BLOCK_LEN != 0 {
        bail!(
            "{mode:?} input length must be a multiple of {BLOCK_LEN} bytes, got {}",
            data.len()
        );
    }

    match mode {
        Mode::Ecb => {
            if iv.is_some() {
                warn!("ignoring IV in ECB mode");
            }
            let ctx = Context::new(key);
            for chunk in data.chunks_exact_mut(BLOCK_LEN) {
                let mut block: Block = [0u8; BLOCK_LEN];
                block.copy_from_slice(chunk);
                match direction {
                    Direction::Encrypt => ecb_encrypt(&ctx, &mut block),
                    Direction::Decrypt => ecb_decrypt(&ctx, &mut block),
                }
                chunk.copy_from_slice(&block);
            }
        }
        Mode::Cbc | Mode::Ctr => {
            let Some(iv) = iv else {
                bail!("{mode:?} mode requires --iv-hex");
            };
            let mut ctx = Context::with_iv(key, iv);
            match (mode, direction) {
                (Mode::Cbc, Direction::Encrypt) => cbc_encrypt(&mut ctx, data),
                (Mode::Cbc, Direction::Decrypt) => cbc_decrypt(&mut ctx, data),
                _ => ctr_xcrypt(&mut ctx, data),
            }
        }
    }
    debug!(?mode, ?direction, bytes = data.len(), "mode applied");
    Ok(())
}

fn cmd_check() -> Result<()> {
    let mut failures = 0usize;
    for outcome in kat::run_all() {
        if outcome.passed {
            info!(vector = outcome.name, "pass");
            println!("ok   {}", outcome.name);
        } else {
            warn!(vector = outcome.name, "FAIL");
            println!("FAIL {}", outcome.name);
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} known-answer vector(s) failed");
    }
    Ok(())
}

fn cmd_demo(seed: Option<u64>) -> Result<()> {
    let mut rng = seeded_rng(seed);
    let mut key_bytes = Zeroizing::new([0u8; 32]);
    let mut iv = [0u8; BLOCK_LEN];
    rng.fill_bytes(&mut key_bytes[..]);
    rng.fill_bytes(&mut iv);
    let key = Key::from(*key_bytes);

    let mut plaintext = [0u8; 64];
    rng.fill_bytes(&mut plaintext);

    println!("demo key: {}", hex::encode(&key_bytes[..]));
    println!("iv: {}", hex::encode(iv));
    println!("plaintext: {}", hex::encode(plaintext));

    for mode in [Mode::Ecb, Mode::Cbc, Mode::Ctr] {
        let mut buf = plaintext;
        apply(mode, Direction::Encrypt, key, Some(iv), &mut buf)?;
        let ciphertext_hex = hex::encode(buf);
        apply(mode, Direction::Decrypt, key, Some(iv), &mut buf)?;
        println!("{mode:?} ciphertext: {ciphertext_hex}");
        if buf != plaintext {
            bail!("{mode:?} demo roundtrip failed");
        }
    }
    Ok(())
}

fn parse_key_hex(hex_str: &str) -> Result<Key> {
    let bytes = Zeroizing::new(hex::decode(hex_str.trim()).context("decode key hex")?);
    Key::try_from(bytes.as_slice()).context("AES key must be 32, 48 or 64 hex characters")
}

fn parse_iv_hex(hex_str: &str) -> Result<Block> {
    let bytes = hex::decode(hex_str.trim()).context("decode IV hex")?;
    let Ok(iv) = Block::try_from(bytes.as_slice()) else {
        bail!("IV must be {BLOCK_LEN} bytes (32 hex characters)");
    };
    Ok(iv)
}

fn seeded_rng(seed: Option<u64>) -> impl RngCore + CryptoRng {
    match seed {
        Some(value) => {
            let mut seed_bytes = [0u8; 32];
            seed_bytes[..8].copy_from_slice(&value.to_le_bytes());
            ChaCha20Rng::from_seed(seed_bytes)
        }
        None => {
            let mut seed_bytes = [0u8; 32];
            rand::rngs::OsRng.fill_bytes(&mut seed_bytes);
            ChaCha20Rng::from_seed(seed_bytes)
        }
    }
}
