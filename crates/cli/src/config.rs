//! CLI runtime configuration.
//!
//! Resolved once in `main` from command-line flags and the process environment, then passed
//! into the command handlers. Handlers never read environment variables themselves.

use anyhow::Context;
use uuid4::{SeededProvider, SystemProvider, UuidProvider};

/// Environment variable holding a default seed for `generate`.
pub const SEED_ENV_VAR: &str = "UUID4_SEED";

/// Configuration resolved at startup.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CliConfig {
    seed: Option<u64>,
}

impl CliConfig {
    /// Resolve configuration. A `--seed` flag takes precedence over `UUID4_SEED`.
    ///
    /// `seed_env` is the raw value of `UUID4_SEED`, if set. Blank values are treated as unset.
    pub fn resolve(seed_flag: Option<u64>, seed_env: Option<String>) -> anyhow::Result<Self> {
        let seed = match (seed_flag, seed_env) {
            (Some(seed), _) => Some(seed),
            (None, Some(raw)) if !raw.trim().is_empty() => {
                let seed = raw.trim().parse::<u64>().with_context(|| {
                    format!("{} must be an unsigned integer, got '{}'", SEED_ENV_VAR, raw)
                })?;
                Some(seed)
            }
            _ => None,
        };

        Ok(Self { seed })
    }

    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Build the provider for this configuration: seeded if a seed was given, otherwise the
    /// operating system RNG.
    pub fn provider(&self) -> Box<dyn UuidProvider> {
        match self.seed {
            Some(seed) => {
                tracing::info!("generating from seed {}; output is reproducible", seed);
                Box::new(SeededProvider::new(seed))
            }
            None => Box::new(SystemProvider),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid4::Uuid;

    #[test]
    fn test_resolve_without_seed() {
        let config = CliConfig::resolve(None, None).unwrap();

        assert_eq!(config.seed(), None);
        assert_eq!(config, CliConfig::default());
    }

    #[test]
    fn test_resolve_flag_overrides_env() {
        let config = CliConfig::resolve(Some(7), Some("9".into())).unwrap();

        assert_eq!(config.seed(), Some(7));
    }

    #[test]
    fn test_resolve_from_env() {
        let config = CliConfig::resolve(None, Some(" 123 ".into())).unwrap();

        assert_eq!(config.seed(), Some(123));
    }

    #[test]
    fn test_resolve_blank_env_is_unset() {
        let config = CliConfig::resolve(None, Some("   ".into())).unwrap();

        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_resolve_rejects_invalid_env() {
        let result = CliConfig::resolve(None, Some("abc".into()));

        let err = result.unwrap_err().to_string();
        assert!(err.contains(SEED_ENV_VAR), "{}", err);
    }

    #[test]
    fn test_seeded_provider_is_reproducible() {
        let config = CliConfig::resolve(Some(42), None).unwrap();
        let mut first = config.provider();
        let mut second = config.provider();

        let a = Uuid::new_v4_with(first.as_mut()).unwrap();
        let b = Uuid::new_v4_with(second.as_mut()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_system_provider_generates_v4() {
        let mut provider = CliConfig::default().provider();
        let uuid = Uuid::new_v4_with(provider.as_mut()).unwrap();

        assert_eq!(uuid.version(), 4);
        assert!(uuid.is_rfc4122_variant());
    }
}
