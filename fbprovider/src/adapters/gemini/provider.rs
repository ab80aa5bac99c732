//! Gemini provider implementation over transport and shared models.

use std::sync::Arc;

use crate::{
    Message, ModelProvider, ModelRequest, ModelResponse, ProviderError, ProviderFuture,
    ProviderId, Role, SecretString,
};

use super::transport::GeminiTransport;
use super::types::{GeminiContent, GeminiFunctionDeclaration, GeminiRequest};

#[derive(Clone)]
pub struct GeminiProvider {
    transport: Arc<dyn GeminiTransport>,
}

impl GeminiProvider {
    pub fn new(transport: Arc<dyn GeminiTransport>) -> Self {
        Self { transport }
    }

    pub(crate) fn build_gemini_request(
        &self,
        request: ModelRequest,
    ) -> Result<GeminiRequest, ProviderError> {
        let (system, conversation): (Vec<Message>, Vec<Message>) = request
            .messages
            .into_iter()
            .partition(|message| message.role == Role::System);

        let system_instruction = system
            .into_iter()
            .map(|message| message.content)
            .filter(|content| !content.trim().is_empty())
            .collect::<Vec<_>>();

        let contents = conversation
            .into_iter()
            .map(GeminiContent::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GeminiRequest {
            model: request.model,
            system_instruction: if system_instruction.is_empty() {
                None
            } else {
                Some(system_instruction.join("\n\n"))
            },
            contents,
            tools: request
                .tools
                .into_iter()
                .map(GeminiFunctionDeclaration::from)
                .collect(),
            temperature: request.options.temperature,
            max_output_tokens: request.options.max_tokens,
        })
    }
}

impl std::fmt::Debug for GeminiProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProvider")
            .field("transport", &self.transport)
            .finish()
    }
}

impl ModelProvider for GeminiProvider {
    fn id(&self) -> ProviderId {
        ProviderId::Gemini
    }

    fn complete<'a>(
        &'a self,
        request: ModelRequest,
        credential: &'a SecretString,
    ) -> ProviderFuture<'a, Result<ModelResponse, ProviderError>> {
        Box::pin(async move {
            request.validate()?;
            if credential.expose().trim().is_empty() {
                return Err(ProviderError::authentication("Gemini API key must not be empty"));
            }

            let gemini_request = self.build_gemini_request(request)?;
            let response = self
                .transport
                .complete(gemini_request, credential.expose())
                .await?;
            Ok(response.into_model_response())
        })
    }
}
