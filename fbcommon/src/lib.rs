//! Shared utilities and small common values for workspace crates.
//!
//! ```rust
//! use fbcommon::{GenerationOptions, split_list};
//!
//! let options = GenerationOptions::default().with_temperature(0.15);
//! assert_eq!(options.temperature, Some(0.15));
//! assert_eq!(split_list(" a, ,b "), vec!["a".to_string(), "b".to_string()]);
//! ```

pub mod future {
    //! Shared async future aliases.
    //!
    //! ```rust
    //! use fbcommon::BoxFuture;
    //!
    //! fn str_len<'a>(value: &'a str) -> BoxFuture<'a, usize> {
    //!     Box::pin(async move { value.len() })
    //! }
    //!
    //! let _future = str_len("hello");
    //! ```

    use std::future::Future;
    use std::pin::Pin;

    pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;
}

pub mod context {
    //! Per-turn trace identifier.
    //!
    //! ```rust
    //! use fbcommon::TraceId;
    //!
    //! let trace = TraceId::from("turn-7");
    //! assert_eq!(trace.as_str(), "turn-7");
    //! assert_eq!(trace.to_string(), "turn-7");
    //! ```

    use std::fmt::{Display, Formatter};

    #[derive(Debug, Clone, PartialEq, Eq, Hash)]
    pub struct TraceId(String);

    impl TraceId {
        pub fn new(value: impl Into<String>) -> Self {
            Self(value.into())
        }

        pub fn as_str(&self) -> &str {
            self.0.as_str()
        }
    }

    impl Display for TraceId {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            f.write_str(&self.0)
        }
    }

    impl From<String> for TraceId {
        fn from(value: String) -> Self {
            Self(value)
        }
    }

    impl From<&str> for TraceId {
        fn from(value: &str) -> Self {
            Self(value.to_string())
        }
    }
}

pub mod model {
    //! Shared generation settings used by request types.
    //!
    //! ```rust
    //! use fbcommon::GenerationOptions;
    //!
    //! let options = GenerationOptions::default()
    //!     .with_temperature(0.2)
    //!     .with_max_tokens(128);
    //!
    //! assert_eq!(options.temperature, Some(0.2));
    //! assert_eq!(options.max_tokens, Some(128));
    //! ```

    #[derive(Debug, Clone, Copy, PartialEq, Default)]
    pub struct GenerationOptions {
        pub temperature: Option<f32>,
        pub max_tokens: Option<u32>,
    }

    impl GenerationOptions {
        pub fn with_temperature(mut self, temperature: f32) -> Self {
            self.temperature = Some(temperature);
            self
        }

        pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
            self.max_tokens = Some(max_tokens);
            self
        }
    }
}

pub mod text {
    //! Parsing helpers for delimited configuration values.

    /// Splits a comma-separated value, trimming entries and dropping blanks.
    pub fn split_list(value: &str) -> Vec<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}

pub use context::TraceId;
pub use future::BoxFuture;
pub use model::GenerationOptions;
pub use text::split_list;

#[cfg(test)]
mod tests {
    use super::{GenerationOptions, split_list};

    #[test]
    fn generation_options_builder_helpers_set_values() {
        let options = GenerationOptions::default()
            .with_temperature(0.3)
            .with_max_tokens(123);

        assert_eq!(options.temperature, Some(0.3));
        assert_eq!(options.max_tokens, Some(123));
    }

    #[test]
    fn split_list_trims_and_drops_blank_entries() {
        assert_eq!(
            split_list("key-a, key-b ,,  ,key-c"),
            vec!["key-a".to_string(), "key-b".to_string(), "key-c".to_string()]
        );
        assert!(split_list("").is_empty());
        assert!(split_list(" , ,").is_empty());
    }
}
