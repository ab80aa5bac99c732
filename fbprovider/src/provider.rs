use fbcommon::BoxFuture;

use crate::{ModelRequest, ModelResponse, ProviderError, ProviderId, SecretString};

pub type ProviderFuture<'a, T> = BoxFuture<'a, T>;

/// A completion backend addressed with a per-call credential.
///
/// The credential comes from the rotation slot chosen for the attempt, so a
/// provider never owns or caches API keys.
pub trait ModelProvider: Send + Sync {
    fn id(&self) -> ProviderId;

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
        credential: &'a SecretString,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>>;
}
