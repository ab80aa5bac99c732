//! Environment-driven assistant configuration.
//!
//! ```rust
//! use std::collections::HashMap;
//!
//! use flipbazzar::AssistantConfig;
//!
//! let env = HashMap::from([("API_KEY", "key-a, key-b"), ("FLIPBAZZAR_TEMPERATURE", "0.3")]);
//! let config = AssistantConfig::from_lookup(|key| env.get(key).map(|value| value.to_string()))
//!     .expect("config should parse");
//!
//! assert_eq!(config.credentials.len(), 2);
//! assert_eq!(config.temperature, 0.3);
//! ```

use std::str::FromStr;
use std::time::Duration;

use fbinventory::DEFAULT_SEARCH_LATENCY;
use fbprovider::{CredentialPool, ModelPool, ProviderError, SecretString};

pub const API_KEY_VAR: &str = "API_KEY";
pub const MODELS_VAR: &str = "FLIPBAZZAR_MODELS";
pub const TEMPERATURE_VAR: &str = "FLIPBAZZAR_TEMPERATURE";
pub const TIMEOUT_VAR: &str = "FLIPBAZZAR_TIMEOUT_SECS";
pub const GEMINI_BASE_URL_VAR: &str = "FLIPBAZZAR_GEMINI_BASE_URL";
pub const INVENTORY_LATENCY_VAR: &str = "FLIPBAZZAR_INVENTORY_LATENCY_MS";

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(90);

#[derive(Debug, Clone)]
pub struct AssistantConfig {
    pub credentials: CredentialPool,
    pub models: ModelPool,
    pub temperature: f32,
    pub timeout: Duration,
    pub gemini_base_url: Option<String>,
    pub inventory_latency: Duration,
}

impl AssistantConfig {
    pub fn new(credentials: CredentialPool) -> Self {
        Self {
            credentials,
            models: ModelPool::default(),
            temperature: fbchat::DEFAULT_TEMPERATURE,
            timeout: DEFAULT_TIMEOUT,
            gemini_base_url: None,
            inventory_latency: DEFAULT_SEARCH_LATENCY,
        }
    }

    pub fn from_api_keys(api_keys: &str) -> Self {
        Self::new(CredentialPool::parse(api_keys))
    }

    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. A missing or blank `API_KEY` yields an
    /// empty credential pool, which is reported when the assistant responds.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ProviderError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::from_api_keys(&read(API_KEY_VAR).unwrap_or_default());

        if let Some(models) = read(MODELS_VAR) {
            config.models = ModelPool::new(fbcommon::split_list(&models))?;
        }

        if let Some(value) = read(TEMPERATURE_VAR) {
            let temperature = parse_setting::<f32>(TEMPERATURE_VAR, &value)?;
            if !(0.0..=2.0).contains(&temperature) {
                return Err(ProviderError::configuration(format!(
                    "{TEMPERATURE_VAR} must be in the inclusive range 0.0..=2.0"
                )));
            }
            config.temperature = temperature;
        }

        if let Some(value) = read(TIMEOUT_VAR) {
            let seconds = parse_setting::<u64>(TIMEOUT_VAR, &value)?;
            if seconds == 0 {
                return Err(ProviderError::configuration(format!(
                    "{TIMEOUT_VAR} must be greater than zero"
                )));
            }
            config.timeout = Duration::from_secs(seconds);
        }

        config.gemini_base_url = read(GEMINI_BASE_URL_VAR);

        if let Some(value) = read(INVENTORY_LATENCY_VAR) {
            config.inventory_latency =
                Duration::from_millis(parse_setting::<u64>(INVENTORY_LATENCY_VAR, &value)?);
        }

        Ok(config)
    }

    pub fn with_credentials(mut self, credentials: Vec<SecretString>) -> Self {
        self.credentials = CredentialPool::new(credentials);
        self
    }

    pub fn with_models(mut self, models: ModelPool) -> Self {
        self.models = models;
        self
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_gemini_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.gemini_base_url = Some(base_url.into());
        self
    }

    pub fn with_inventory_latency(mut self, latency: Duration) -> Self {
        self.inventory_latency = latency;
        self
    }
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self::new(CredentialPool::default())
    }
}

fn parse_setting<T: FromStr>(key: &str, value: &str) -> Result<T, ProviderError> {
    value.parse::<T>().map_err(|_| {
        ProviderError::configuration(format!("{key} has an invalid value: '{value}'"))
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use fbprovider::ProviderErrorKind;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AssistantConfig, ProviderError> {
        let env = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();
        AssistantConfig::from_lookup(|key| env.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_settings_are_missing() {
        let config = config_from(&[]).expect("empty environment is valid");

        assert!(config.credentials.is_empty());
        assert_eq!(config.models, ModelPool::default());
        assert_eq!(config.temperature, 0.15);
        assert_eq!(config.timeout, Duration::from_secs(90));
        assert_eq!(config.gemini_base_url, None);
        assert_eq!(config.inventory_latency, Duration::from_millis(500));
    }

    #[test]
    fn all_settings_are_read() {
        let config = config_from(&[
            ("API_KEY", " key-a ,, key-b "),
            ("FLIPBAZZAR_MODELS", "gemini-a, gemini-b, gemini-c"),
            ("FLIPBAZZAR_TEMPERATURE", "0.4"),
            ("FLIPBAZZAR_TIMEOUT_SECS", "15"),
            ("FLIPBAZZAR_GEMINI_BASE_URL", "http://localhost:8080/v1beta"),
            ("FLIPBAZZAR_INVENTORY_LATENCY_MS", "0"),
        ])
        .expect("config should parse");

        assert_eq!(config.credentials.len(), 2);
        assert_eq!(
            config.credentials.get(1).map(SecretString::expose),
            Some("key-b")
        );
        assert_eq!(
            config.models.iter().collect::<Vec<_>>(),
            vec!["gemini-a", "gemini-b", "gemini-c"]
        );
        assert_eq!(config.temperature, 0.4);
        assert_eq!(config.timeout, Duration::from_secs(15));
        assert_eq!(
            config.gemini_base_url.as_deref(),
            Some("http://localhost:8080/v1beta")
        );
        assert_eq!(config.inventory_latency, Duration::ZERO);
    }

    #[test]
    fn invalid_values_are_configuration_errors() {
        let cases: [&[(&str, &str)]; 4] = [
            &[("FLIPBAZZAR_TEMPERATURE", "warm")],
            &[("FLIPBAZZAR_TEMPERATURE", "3.5")],
            &[("FLIPBAZZAR_TIMEOUT_SECS", "0")],
            &[("FLIPBAZZAR_MODELS", " , ")],
        ];

        for pairs in cases {
            let error = config_from(pairs).expect_err("invalid setting should fail");
            assert_eq!(error.kind, ProviderErrorKind::Configuration, "{pairs:?}");
        }
    }

    #[test]
    fn builder_setters_override_defaults() {
        let config = AssistantConfig::from_api_keys("key-a")
            .with_temperature(0.0)
            .with_timeout(Duration::from_secs(5))
            .with_inventory_latency(Duration::ZERO)
            .with_gemini_base_url("http://127.0.0.1:9/v1beta")
            .with_credentials(vec![SecretString::new("key-x"), SecretString::new(" ")]);

        assert_eq!(config.credentials.len(), 1);
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
