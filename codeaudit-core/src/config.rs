//! Auditor configuration
//!
//! An [`AuditorConfig`] is built once at process start (from the environment
//! or a TOML file) and threaded through by reference; there is no process
//! global. The scoring weights used by overall-score reconciliation live here
//! as well.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::ScoreSet;
use crate::{Error, Result};

/// Default chat-completions endpoint base.
pub const DEFAULT_API_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model requested for analyses.
pub const DEFAULT_MODEL: &str = "gpt-4o";

const DEFAULT_MAX_TOKENS: u32 = 4000;
const DEFAULT_TEMPERATURE: f32 = 0.1;

/// Per-axis weights for overall-score reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    pub quality: f64,
    pub security: f64,
    pub performance: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            quality: 0.40,
            security: 0.35,
            performance: 0.25,
        }
    }
}

impl ScoreWeights {
    /// Weighted sum of the three axis scores.
    #[must_use]
    pub fn weighted_sum(&self, scores: ScoreSet) -> f64 {
        f64::from(scores.quality) * self.quality
            + f64::from(scores.security) * self.security
            + f64::from(scores.performance) * self.performance
    }

    /// Weights must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("quality", self.quality),
            ("security", self.security),
            ("performance", self.performance),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::Config(format!(
                    "invalid {name} weight: {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration for the auditor and its API client.
#[derive(Debug, Clone)]
pub struct AuditorConfig {
    /// API key sent as the bearer token
    pub api_key: String,
    /// Base URL of the chat-completions endpoint
    pub api_base_url: String,
    /// Model requested for analyses
    pub model: String,
    /// Maximum tokens the model may generate
    pub max_tokens: u32,
    /// Sampling temperature
    pub temperature: f32,
    /// Weights for overall-score reconciliation
    pub weights: ScoreWeights,
}

/// On-disk shape of a TOML configuration file; every field optional except
/// the key, which may instead come from the environment.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
    api_base_url: Option<String>,
    model: Option<String>,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    weights: Option<ScoreWeights>,
}

impl AuditorConfig {
    /// Configuration with defaults for everything but the API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            weights: ScoreWeights::default(),
        }
    }

    /// Build configuration from environment variables.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_MODEL`, `OPENAI_BASE_URL`,
    /// `MAX_TOKENS` and `TEMPERATURE` override the defaults when set.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
            Error::Config("OPENAI_API_KEY environment variable is required".to_string())
        })?;

        let mut config = Self::new(api_key);
        if let Ok(model) = std::env::var("OPENAI_MODEL") {
            config.model = model;
        }
        if let Ok(base_url) = std::env::var("OPENAI_BASE_URL") {
            config.api_base_url = base_url;
        }
        if let Ok(raw) = std::env::var("MAX_TOKENS") {
            config.max_tokens = raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid MAX_TOKENS value: {raw}")))?;
        }
        if let Ok(raw) = std::env::var("TEMPERATURE") {
            config.temperature = raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid TEMPERATURE value: {raw}")))?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Build configuration from a TOML file.
    ///
    /// A missing `api_key` entry falls back to the `OPENAI_API_KEY`
    /// environment variable.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&content)
            .map_err(|err| Error::Config(format!("failed to parse {}: {err}", path.display())))?;

        let api_key = match file.api_key {
            Some(key) => key,
            None => std::env::var("OPENAI_API_KEY").map_err(|_| {
                Error::Config(format!(
                    "no api_key in {} and OPENAI_API_KEY is not set",
                    path.display()
                ))
            })?,
        };

        let mut config = Self::new(api_key);
        if let Some(base_url) = file.api_base_url {
            config.api_base_url = base_url;
        }
        if let Some(model) = file.model {
            config.model = model;
        }
        if let Some(max_tokens) = file.max_tokens {
            config.max_tokens = max_tokens;
        }
        if let Some(temperature) = file.temperature {
            config.temperature = temperature;
        }
        if let Some(weights) = file.weights {
            config.weights = weights;
        }

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.api_key.is_empty() {
            return Err(Error::Config("API key must not be empty".to_string()));
        }
        if self.max_tokens == 0 {
            return Err(Error::Config("max_tokens must be positive".to_string()));
        }
        self.weights.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AuditorConfig::new("sk-test");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 4000);
        assert_eq!(config.weights, ScoreWeights::default());
    }

    #[test]
    fn test_weighted_sum() {
        let scores = ScoreSet {
            quality: 8,
            security: 6,
            performance: 4,
        };
        let sum = ScoreWeights::default().weighted_sum(scores);
        assert!((sum - 6.3).abs() < 1e-9);
    }

    #[test]
    fn test_weight_validation() {
        let weights = ScoreWeights {
            quality: -0.1,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());

        let weights = ScoreWeights {
            security: f64::NAN,
            ..ScoreWeights::default()
        };
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
api_key = "sk-from-file"
model = "gpt-4-turbo"
max_tokens = 2000

[weights]
quality = 0.5
security = 0.3
performance = 0.2
"#
        )
        .unwrap();

        let config = AuditorConfig::from_file(file.path()).unwrap();
        assert_eq!(config.api_key, "sk-from-file");
        assert_eq!(config.model, "gpt-4-turbo");
        assert_eq!(config.max_tokens, 2000);
        assert_eq!(config.temperature, DEFAULT_TEMPERATURE);
        assert!((config.weights.quality - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_from_file_rejects_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_key = ").unwrap();

        assert!(matches!(
            AuditorConfig::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    // Environment-variable assertions live in a single test so parallel
    // test threads never observe each other's mutations.
    #[test]
    fn test_from_env() {
        std::env::remove_var("OPENAI_API_KEY");
        assert!(matches!(AuditorConfig::from_env(), Err(Error::Config(_))));

        std::env::set_var("OPENAI_API_KEY", "sk-env");
        std::env::set_var("OPENAI_MODEL", "gpt-3.5-turbo");
        std::env::set_var("MAX_TOKENS", "1500");
        std::env::set_var("TEMPERATURE", "0.7");

        let config = AuditorConfig::from_env().unwrap();
        assert_eq!(config.api_key, "sk-env");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 1500);
        assert!((config.temperature - 0.7).abs() < 1e-6);

        std::env::set_var("MAX_TOKENS", "lots");
        assert!(matches!(AuditorConfig::from_env(), Err(Error::Config(_))));

        for var in ["OPENAI_API_KEY", "OPENAI_MODEL", "MAX_TOKENS", "TEMPERATURE"] {
            std::env::remove_var(var);
        }
    }
}
