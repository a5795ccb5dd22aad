//! Generator configuration.
//!
//! Points the generator at an OpenAI-compatible endpoint. Defaults target the
//! public OpenAI API; override via environment variables or the builder for
//! other providers and for testing.

use crate::GenerationError;
use url::Url;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-3.5-turbo";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for an OpenAI-compatible chat completions endpoint.
///
/// Custom `Debug` implementation redacts the `api_key` field
/// to prevent credential leakage in log output.
#[derive(Clone)]
pub struct GeneratorConfig {
    /// Base URL of the API, e.g. `https://api.openai.com/v1`.
    pub base_url: Url,
    /// Bearer token for API authentication.
    pub api_key: String,
    /// Model identifier.
    pub model: String,
    /// Sampling temperature; 0 for the most deterministic output.
    pub temperature: f32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl std::fmt::Debug for GeneratorConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"[REDACTED]")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl GeneratorConfig {
    /// Creates a new builder for `GeneratorConfig`.
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Variables:
    /// - `OPENAI_API_KEY` (required)
    /// - `OPENAI_BASE_URL` (default: `https://api.openai.com/v1`)
    /// - `OPENAI_MODEL` (default: `gpt-3.5-turbo`)
    /// - `OPENAI_TEMPERATURE` (default: 0)
    /// - `OPENAI_TIMEOUT_SECS` (default: 30)
    pub fn from_env() -> Result<Self, GenerationError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Same variables and defaults as [`GeneratorConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, GenerationError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();

        if let Some(api_key) = lookup("OPENAI_API_KEY") {
            builder = builder.api_key(api_key);
        }
        if let Some(raw) = lookup("OPENAI_BASE_URL") {
            builder = builder.base_url(parse_url("OPENAI_BASE_URL", &raw)?);
        }
        if let Some(model) = lookup("OPENAI_MODEL") {
            builder = builder.model(model);
        }
        if let Some(raw) = lookup("OPENAI_TEMPERATURE") {
            builder = builder.temperature(parse_number("OPENAI_TEMPERATURE", &raw)?);
        }
        if let Some(raw) = lookup("OPENAI_TIMEOUT_SECS") {
            builder = builder.timeout_secs(parse_number("OPENAI_TIMEOUT_SECS", &raw)?);
        }

        builder.build()
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), GenerationError> {
        if self.api_key.trim().is_empty() {
            return Err(GenerationError::Config(
                "OPENAI_API_KEY is required".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(GenerationError::Config("model cannot be empty".to_string()));
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(GenerationError::Config(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }

        if self.timeout_secs == 0 {
            return Err(GenerationError::Config(
                "timeout_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

fn parse_url(var: &str, raw: &str) -> Result<Url, GenerationError> {
    Url::parse(raw).map_err(|e| GenerationError::Config(format!("invalid URL for {var}: {e}")))
}

fn parse_number<T>(var: &str, raw: &str) -> Result<T, GenerationError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| GenerationError::Config(format!("invalid value for {var}: {e}")))
}

/// Builder for `GeneratorConfig`.
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    base_url: Option<Url>,
    api_key: Option<String>,
    model: Option<String>,
    temperature: Option<f32>,
    timeout_secs: Option<u64>,
}

impl GeneratorConfigBuilder {
    /// Sets the API base URL.
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Sets the bearer token.
    pub fn api_key<S: Into<String>>(mut self, key: S) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Sets the model identifier.
    pub fn model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Sets the sampling temperature.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the request timeout.
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }

    /// Builds the `GeneratorConfig`.
    ///
    /// Returns an error if the API key is missing or a value is out of range.
    pub fn build(self) -> Result<GeneratorConfig, GenerationError> {
        let base_url = match self.base_url {
            Some(url) => url,
            None => parse_url("base_url", DEFAULT_BASE_URL)?,
        };

        let config = GeneratorConfig {
            base_url,
            api_key: self.api_key.ok_or_else(|| {
                GenerationError::Config("OPENAI_API_KEY is required".to_string())
            })?,
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: self.temperature.unwrap_or(0.0),
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| vars.get(var).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[("OPENAI_API_KEY", "sk-test")]))
            .unwrap();

        assert_eq!(config.base_url.as_str(), "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn test_overrides() {
        let config = GeneratorConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "http://localhost:11434/v1"),
            ("OPENAI_MODEL", "llama3"),
            ("OPENAI_TEMPERATURE", "0.7"),
            ("OPENAI_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();

        assert_eq!(config.base_url.as_str(), "http://localhost:11434/v1");
        assert_eq!(config.model, "llama3");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_missing_api_key() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[])).unwrap_err();
        assert!(matches!(err, GenerationError::Config(msg) if msg.contains("OPENAI_API_KEY")));
    }

    #[test]
    fn test_invalid_values() {
        let err = GeneratorConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_BASE_URL", "not a url"),
        ]))
        .unwrap_err();
        assert!(matches!(err, GenerationError::Config(msg) if msg.contains("OPENAI_BASE_URL")));

        let err = GeneratorConfig::from_lookup(lookup_from(&[
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_TIMEOUT_SECS", "soon"),
        ]))
        .unwrap_err();
        assert!(matches!(err, GenerationError::Config(msg) if msg.contains("OPENAI_TIMEOUT_SECS")));

        let err = GeneratorConfig::builder()
            .api_key("sk-test")
            .temperature(3.5)
            .build()
            .unwrap_err();
        assert!(matches!(err, GenerationError::Config(_)));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = GeneratorConfig::builder().api_key("sk-secret").build().unwrap();
        let debug = format!("{:?}", config);

        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("sk-secret"));
    }
}
