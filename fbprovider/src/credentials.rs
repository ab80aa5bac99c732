//! Redacted credential values and the credential/model pools used for rotation.
//!
//! ```rust
//! use fbprovider::{CredentialPool, ModelPool};
//!
//! let pool = CredentialPool::parse("key-a, key-b ,,");
//! assert_eq!(pool.len(), 2);
//! assert_eq!(format!("{:?}", pool.get(0).expect("first key")), "[REDACTED]");
//!
//! let models = ModelPool::default();
//! assert_eq!(models.len(), 2);
//! ```

use crate::ProviderError;

pub const DEFAULT_MODELS: [&str; 2] = ["gemini-3-flash-preview", "gemini-3-pro-preview"];

#[derive(PartialEq, Eq)]
pub struct SecretString {
    value: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    pub fn expose(&self) -> &str {
        self.value.as_str()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

impl Clone for SecretString {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Drop for SecretString {
    fn drop(&mut self) {
        unsafe {
            self.value.as_mut_vec().fill(0);
        }
    }
}

/// Ordered set of interchangeable API credentials.
///
/// An empty pool is representable so configuration problems can be reported at
/// request time instead of at startup.
#[derive(Debug, Clone, Default)]
pub struct CredentialPool {
    credentials: Vec<SecretString>,
}

impl CredentialPool {
    pub fn new(credentials: Vec<SecretString>) -> Self {
        Self {
            credentials: credentials
                .into_iter()
                .filter(|credential| !credential.expose().trim().is_empty())
                .collect(),
        }
    }

    /// Parses a comma-separated credential list, trimming entries and dropping blanks.
    pub fn parse(value: &str) -> Self {
        Self {
            credentials: fbcommon::split_list(value)
                .into_iter()
                .map(SecretString::new)
                .collect(),
        }
    }

    pub fn get(&self, index: usize) -> Option<&SecretString> {
        self.credentials.get(index)
    }

    pub fn len(&self) -> usize {
        self.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.credentials.is_empty()
    }
}

/// Ordered, non-empty set of model identifiers eligible for rotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPool {
    models: Vec<String>,
}

impl ModelPool {
    pub fn new<I, S>(models: I) -> Result<Self, ProviderError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let models = models
            .into_iter()
            .map(Into::into)
            .map(|model: String| model.trim().to_string())
            .filter(|model| !model.is_empty())
            .collect::<Vec<_>>();

        if models.is_empty() {
            return Err(ProviderError::configuration(
                "model pool must contain at least one model",
            ));
        }

        Ok(Self { models })
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.models.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.models.iter().map(String::as_str)
    }
}

impl Default for ModelPool {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(ToString::to_string).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ProviderErrorKind;

    #[test]
    fn secret_string_debug_is_redacted() {
        let secret = SecretString::new("AIza-secret");
        assert_eq!(format!("{secret:?}"), "[REDACTED]");
        assert_eq!(secret.expose(), "AIza-secret");
        assert_eq!(secret.clone().expose(), "AIza-secret");
    }

    #[test]
    fn credential_pool_parse_trims_and_skips_blank_entries() {
        let pool = CredentialPool::parse(" key-a ,key-b,  , ");
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(0).map(SecretString::expose), Some("key-a"));
        assert_eq!(pool.get(1).map(SecretString::expose), Some("key-b"));

        assert!(CredentialPool::parse("").is_empty());
        assert!(CredentialPool::parse(" , ").is_empty());
    }

    #[test]
    fn credential_pool_new_drops_blank_secrets() {
        let pool = CredentialPool::new(vec![SecretString::new("  "), SecretString::new("key")]);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn model_pool_rejects_empty_input() {
        let error = ModelPool::new(Vec::<String>::new()).expect_err("empty pool must fail");
        assert_eq!(error.kind, ProviderErrorKind::Configuration);

        let error = ModelPool::new(["  "]).expect_err("blank entries must fail");
        assert_eq!(error.kind, ProviderErrorKind::Configuration);
    }

    #[test]
    fn default_model_pool_keeps_declared_order() {
        let pool = ModelPool::default();
        let models = pool.iter().collect::<Vec<_>>();
        assert_eq!(models, vec!["gemini-3-flash-preview", "gemini-3-pro-preview"]);
    }
}
