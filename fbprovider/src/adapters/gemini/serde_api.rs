//! Gemini `generateContent` payload serde models and conversion helpers.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ProviderError;

use super::types::{
    GeminiContent, GeminiFinishReason, GeminiFunctionDeclaration, GeminiPart, GeminiRequest,
    GeminiResponse, GeminiRole, GeminiUsage,
};

pub(crate) fn build_api_request(request: GeminiRequest) -> Result<GeminiApiRequest, ProviderError> {
    let contents = request
        .contents
        .into_iter()
        .filter(|content| !content.parts.is_empty())
        .map(GeminiApiContent::from)
        .collect::<Vec<_>>();

    if contents.is_empty() {
        return Err(ProviderError::invalid_request(
            "Gemini request requires at least one content entry",
        ));
    }

    let tools = if request.tools.is_empty() {
        None
    } else {
        Some(vec![GeminiApiTool {
            function_declarations: request
                .tools
                .into_iter()
                .map(GeminiApiFunctionDeclaration::try_from)
                .collect::<Result<Vec<_>, _>>()?,
        }])
    };

    let system_instruction = request.system_instruction.map(|text| GeminiApiContent {
        role: None,
        parts: vec![GeminiApiPart::text(text)],
    });

    let generation_config =
        if request.temperature.is_none() && request.max_output_tokens.is_none() {
            None
        } else {
            Some(GeminiApiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_output_tokens,
            })
        };

    Ok(GeminiApiRequest {
        contents,
        system_instruction,
        tools,
        generation_config,
    })
}

pub(crate) fn parse_finish_reason(value: Option<&str>) -> GeminiFinishReason {
    match value {
        Some("STOP") => GeminiFinishReason::Stop,
        Some("MAX_TOKENS") => GeminiFinishReason::MaxTokens,
        Some("SAFETY") | Some("RECITATION") | Some("BLOCKLIST") | Some("PROHIBITED_CONTENT") => {
            GeminiFinishReason::Safety
        }
        _ => GeminiFinishReason::Other,
    }
}

pub(crate) fn extract_error_message(body: &str) -> Option<String> {
    let parsed = serde_json::from_str::<GeminiApiErrorEnvelope>(body).ok()?;
    let message = parsed.error.message;
    match parsed.error.status {
        Some(status) if !status.is_empty() => Some(format!("{status}: {message}")),
        _ => Some(message),
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiErrorEnvelope {
    pub error: GeminiApiError,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GeminiApiError {
    pub message: String,
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiRequest {
    pub contents: Vec<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<GeminiApiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<GeminiApiTool>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiApiGenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub parts: Vec<GeminiApiPart>,
}

impl From<GeminiContent> for GeminiApiContent {
    fn from(value: GeminiContent) -> Self {
        Self {
            role: Some(value.role.as_str().to_string()),
            parts: value.parts.into_iter().map(GeminiApiPart::from).collect(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_call: Option<GeminiApiFunctionCall>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function_response: Option<GeminiApiFunctionResponse>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thought_signature: Option<String>,
}

impl GeminiApiPart {
    fn text(text: String) -> Self {
        Self {
            text: Some(text),
            ..Self::default()
        }
    }
}

impl From<GeminiPart> for GeminiApiPart {
    fn from(value: GeminiPart) -> Self {
        match value {
            GeminiPart::Text(text) => Self::text(text),
            GeminiPart::FunctionCall {
                name,
                args,
                thought_signature,
            } => Self {
                function_call: Some(GeminiApiFunctionCall {
                    name,
                    args: Some(args),
                }),
                thought_signature,
                ..Self::default()
            },
            GeminiPart::FunctionResponse { name, response } => Self {
                function_response: Some(GeminiApiFunctionResponse { name, response }),
                ..Self::default()
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiFunctionCall {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct GeminiApiFunctionResponse {
    pub name: String,
    pub response: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiTool {
    pub function_declarations: Vec<GeminiApiFunctionDeclaration>,
}

#[derive(Debug, Serialize)]
pub(crate) struct GeminiApiFunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: Value,
}

impl TryFrom<GeminiFunctionDeclaration> for GeminiApiFunctionDeclaration {
    type Error = ProviderError;

    fn try_from(value: GeminiFunctionDeclaration) -> Result<Self, Self::Error> {
        let parameters = serde_json::from_str::<Value>(&value.parameters).map_err(|_| {
            ProviderError::invalid_request("Gemini function parameters must be valid JSON")
        })?;

        Ok(Self {
            name: value.name,
            description: value.description,
            parameters,
        })
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiGenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiApiCandidate>,
    pub usage_metadata: Option<GeminiApiUsage>,
    pub model_version: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiCandidate {
    pub content: Option<GeminiApiContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GeminiApiUsage {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
}

impl GeminiApiResponse {
    /// Keeps the first candidate only; a response without one is an empty response.
    pub(crate) fn into_response(self, requested_model: String) -> Result<GeminiResponse, ProviderError> {
        let candidate = self.candidates.into_iter().next().ok_or_else(|| {
            ProviderError::empty_response("Gemini response did not include candidates")
        })?;

        let parts = candidate
            .content
            .map(|content| content.parts)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|part| {
                if let Some(call) = part.function_call {
                    return Some(GeminiPart::FunctionCall {
                        name: call.name,
                        args: call
                            .args
                            .unwrap_or_else(|| Value::Object(serde_json::Map::new())),
                        thought_signature: part.thought_signature,
                    });
                }

                part.text.map(GeminiPart::Text)
            })
            .collect::<Vec<_>>();

        let usage = self.usage_metadata.unwrap_or_default();

        Ok(GeminiResponse {
            model: self.model_version.unwrap_or(requested_model),
            content: GeminiContent {
                role: GeminiRole::Model,
                parts,
            },
            finish_reason: parse_finish_reason(candidate.finish_reason.as_deref()),
            usage: GeminiUsage {
                prompt_tokens: usage.prompt_token_count,
                candidate_tokens: usage.candidates_token_count,
                total_tokens: usage.total_token_count,
            },
        })
    }
}
