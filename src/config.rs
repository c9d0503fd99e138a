//! Seeding configuration.
//!
//! Loads from environment variables or a TOML document. An explicit seed
//! always takes precedence over the non-deterministic source.

use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::Rng;
use serde::Deserialize;

use crate::error::ConfigError;

/// Environment variable holding an explicit seed.
pub const SEED_ENV: &str = "VARIATE_SEED";
/// Environment variable selecting the default seed source.
pub const SEED_SOURCE_ENV: &str = "VARIATE_SEED_SOURCE";

/// Where a seed comes from when none is given explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedSource {
    /// OS-backed entropy via the thread-local generator.
    #[default]
    Entropy,
    /// Wall-clock nanoseconds since the Unix epoch.
    Clock,
}

impl SeedSource {
    /// Produce a fresh seed from this source.
    pub fn draw(self) -> u64 {
        match self {
            SeedSource::Entropy => rand::rng().random(),
            SeedSource::Clock => SystemTime::now()
                .duration_since(UNIX_EPOCH)
                // Truncation keeps the fast-moving low bits.
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeedSource::Entropy => "entropy",
            SeedSource::Clock => "clock",
        }
    }
}

impl FromStr for SeedSource {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "entropy" | "os" => Ok(SeedSource::Entropy),
            "clock" | "time" => Ok(SeedSource::Clock),
            _ => Err(ConfigError::InvalidSource(s.to_string())),
        }
    }
}

impl std::fmt::Display for SeedSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a [`Random`](crate::Random) picks its seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// Fixed seed; `None` falls back to `source`.
    pub seed: Option<u64>,
    /// Source consulted when `seed` is unset.
    pub source: SeedSource,
}

impl SeedConfig {
    /// Configuration with a fixed seed.
    pub fn fixed(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Self::default()
        }
    }

    /// Load configuration from `VARIATE_SEED` and `VARIATE_SEED_SOURCE`.
    ///
    /// Unset variables keep their defaults; empty values are treated as unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from a TOML document such as
    /// `seed = 42` or `source = "clock"`.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(seed) = lookup(SEED_ENV).filter(|v| !v.trim().is_empty()) {
            config.seed = Some(
                seed.trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidSeed(seed.clone()))?,
            );
        }

        if let Some(source) = lookup(SEED_SOURCE_ENV).filter(|v| !v.trim().is_empty()) {
            config.source = SeedSource::from_str(&source)?;
        }

        Ok(config)
    }

    /// The seed to use: the fixed one, or a fresh draw from `source`.
    pub fn resolve(&self) -> u64 {
        self.seed.unwrap_or_else(|| self.source.draw())
    }
}
