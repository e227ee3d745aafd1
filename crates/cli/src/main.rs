mod config;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::cmp::Ordering;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid4::Uuid;

use config::{CliConfig, SEED_ENV_VAR};

#[derive(Parser)]
#[command(name = "uuid4")]
#[command(about = "Generate, inspect and compare version-4 UUIDs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate random UUIDs, one per line
    Generate {
        /// Number of UUIDs to print
        #[arg(long, short = 'n', default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,
        /// Seed for a reproducible sequence (overrides UUID4_SEED)
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Decode a UUID string and show its bytes, version and variant
    Parse {
        /// Canonical UUID string (xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)
        uuid: String,
    },
    /// Compare two UUIDs byte-wise and print <, > or =
    Compare {
        /// Left-hand UUID
        left: String,
        /// Right-hand UUID
        right: String,
    },
}

/// Entry point for the `uuid4` tool.
///
/// Results go to stdout; logs go to stderr.
///
/// # Environment Variables
/// - `UUID4_SEED`: default seed for `generate` (unset: operating system RNG)
/// - `RUST_LOG`: log filter (default directive: `uuid4=info`)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env().add_directive("uuid4=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut out = std::io::stdout().lock();

    match cli.command {
        Commands::Generate { count, seed } => {
            let config = CliConfig::resolve(seed, std::env::var(SEED_ENV_VAR).ok())?;
            let mut provider = config.provider();
            for _ in 0..count {
                let uuid = Uuid::new_v4_with(provider.as_mut())
                    .context("failed to generate UUID")?;
                writeln!(out, "{}", uuid.to_string_with(provider.as_ref()))?;
            }
        }
        Commands::Parse { uuid } => {
            let parsed = Uuid::parse(&uuid).context("failed to parse UUID")?;
            for line in describe(&parsed) {
                writeln!(out, "{}", line)?;
            }
        }
        Commands::Compare { left, right } => {
            let left = Uuid::parse(&left).context("failed to parse left UUID")?;
            let right = Uuid::parse(&right).context("failed to parse right UUID")?;
            writeln!(out, "{}", ordering_symbol(left.cmp(&right)))?;
        }
    }

    Ok(())
}

/// Human readable breakdown of a parsed UUID.
fn describe(uuid: &Uuid) -> Vec<String> {
    let hex: Vec<String> = uuid
        .as_bytes()
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect();

    vec![
        format!("uuid:    {}", uuid),
        format!("bytes:   [{}]", hex.join(", ")),
        format!("version: {}", uuid.version()),
        format!(
            "variant: {}",
            if uuid.is_rfc4122_variant() { "RFC 4122" } else { "other" }
        ),
    ]
}

fn ordering_symbol(ordering: Ordering) -> &'static str {
    match ordering {
        Ordering::Less => "<",
        Ordering::Greater => ">",
        Ordering::Equal => "=",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from(["uuid4", "generate"]).unwrap();

        match cli.command {
            Commands::Generate { count, seed } => {
                assert_eq!(count, 1);
                assert_eq!(seed, None);
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_parse_generate_with_count_and_seed() {
        let cli = Cli::try_parse_from(["uuid4", "generate", "-n", "5", "--seed", "42"]).unwrap();

        match cli.command {
            Commands::Generate { count, seed } => {
                assert_eq!(count, 5);
                assert_eq!(seed, Some(42));
            }
            _ => panic!("Expected generate command"),
        }
    }

    #[test]
    fn test_parse_generate_rejects_zero_count() {
        assert!(Cli::try_parse_from(["uuid4", "generate", "--count", "0"]).is_err());
    }

    #[test]
    fn test_parse_requires_subcommand() {
        assert!(Cli::try_parse_from(["uuid4"]).is_err());
    }

    #[test]
    fn test_parse_compare_arguments() {
        let cli = Cli::try_parse_from(["uuid4", "compare", SAMPLE, SAMPLE]).unwrap();

        match cli.command {
            Commands::Compare { left, right } => {
                assert_eq!(left, SAMPLE);
                assert_eq!(right, SAMPLE);
            }
            _ => panic!("Expected compare command"),
        }
    }

    #[test]
    fn test_describe_known_uuid() {
        let uuid = Uuid::parse(SAMPLE).unwrap();
        let lines = describe(&uuid);

        assert_eq!(lines[0], format!("uuid:    {}", SAMPLE));
        assert_eq!(
            lines[1],
            "bytes:   [55, 0e, 84, 00, e2, 9b, 41, d4, a7, 16, 44, 66, 55, 44, 00, 00]"
        );
        assert_eq!(lines[2], "version: 4");
        assert_eq!(lines[3], "variant: RFC 4122");
    }

    #[test]
    fn test_describe_nil_uuid() {
        let lines = describe(&Uuid::nil());

        assert_eq!(lines[2], "version: 0");
        assert_eq!(lines[3], "variant: other");
    }

    #[test]
    fn test_ordering_symbol() {
        let low = Uuid::parse("00000000-0000-0000-0000-000000000001").unwrap();
        let high = Uuid::parse("ff000000-0000-0000-0000-000000000000").unwrap();

        assert_eq!(ordering_symbol(low.cmp(&high)), "<");
        assert_eq!(ordering_symbol(high.cmp(&low)), ">");
        assert_eq!(ordering_symbol(low.cmp(&low)), "=");
    }
}
