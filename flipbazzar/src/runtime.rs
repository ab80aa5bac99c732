//! Runtime wiring helpers for the assistant.

use std::sync::Arc;

use fbchat::ChatService;
use fbinventory::InMemoryInventory;
use fbobserve::{SafeChatHooks, SafeProviderHooks, TracingObservabilityHooks};
use fbprovider::{ModelProvider, ProviderError, Rotator};
use reqwest::Client;

use crate::AssistantConfig;

/// Builds the Gemini-backed assistant described by `config`.
pub fn build_assistant(config: AssistantConfig) -> Result<ChatService, ProviderError> {
    let provider = build_gemini_provider(&config)?;
    Ok(build_assistant_with(provider, config))
}

/// Wires any provider into a chat service with the bundled catalog and tracing hooks.
pub fn build_assistant_with(
    provider: Arc<dyn ModelProvider>,
    config: AssistantConfig,
) -> ChatService {
    let rotator = Arc::new(Rotator::new(config.credentials, config.models));
    let inventory =
        Arc::new(InMemoryInventory::bundled().with_latency(config.inventory_latency));

    ChatService::builder(provider, rotator, inventory)
        .provider_hooks(Arc::new(SafeProviderHooks::new(TracingObservabilityHooks)))
        .hooks(Arc::new(SafeChatHooks::new(TracingObservabilityHooks)))
        .temperature(config.temperature)
        .build()
}

pub fn build_gemini_provider(
    config: &AssistantConfig,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    let http = Client::builder()
        .timeout(config.timeout)
        .build()
        .map_err(|err| ProviderError::transport(err.to_string()))?;

    gemini_provider(http, config.gemini_base_url.as_deref())
}

#[cfg(feature = "provider-gemini")]
fn gemini_provider(
    http: Client,
    base_url: Option<&str>,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    use fbprovider::adapters::gemini::{GeminiHttpTransport, GeminiProvider};

    let mut transport = GeminiHttpTransport::new(http);
    if let Some(base_url) = base_url {
        transport = transport.with_base_url(base_url);
    }

    Ok(Arc::new(GeminiProvider::new(Arc::new(transport))))
}

#[cfg(not(feature = "provider-gemini"))]
fn gemini_provider(
    _http: Client,
    _base_url: Option<&str>,
) -> Result<Arc<dyn ModelProvider>, ProviderError> {
    Err(ProviderError::configuration(
        "provider-gemini feature is not enabled on flipbazzar",
    ))
}
