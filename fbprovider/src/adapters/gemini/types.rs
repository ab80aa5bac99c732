//! Gemini adapter types and provider-agnostic conversion logic.

use serde_json::{Map, Value};

use crate::{
    Message, ModelResponse, OutputItem, ProviderError, ProviderId, Role, StopReason, TokenUsage,
    ToolCall, ToolDefinition,
};

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiRequest {
    pub model: String,
    pub system_instruction: Option<String>,
    pub contents: Vec<GeminiContent>,
    pub tools: Vec<GeminiFunctionDeclaration>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiRole {
    User,
    Model,
}

impl GeminiRole {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Model => "model",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeminiPart {
    Text(String),
    FunctionCall {
        name: String,
        args: Value,
        thought_signature: Option<String>,
    },
    FunctionResponse { name: String, response: Value },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiContent {
    pub role: GeminiRole,
    pub parts: Vec<GeminiPart>,
}

impl TryFrom<Message> for GeminiContent {
    type Error = ProviderError;

    fn try_from(value: Message) -> Result<Self, Self::Error> {
        match value.role {
            Role::System => Err(ProviderError::invalid_request(
                "system messages map to the Gemini system instruction, not contents",
            )),
            Role::User => Ok(Self {
                role: GeminiRole::User,
                parts: text_part(value.content).into_iter().collect(),
            }),
            Role::Assistant => {
                let mut parts = text_part(value.content).into_iter().collect::<Vec<_>>();
                for call in value.tool_calls {
                    parts.push(GeminiPart::FunctionCall {
                        args: parse_arguments(&call.arguments)?,
                        name: call.name,
                        thought_signature: call.thought_signature,
                    });
                }

                Ok(Self {
                    role: GeminiRole::Model,
                    parts,
                })
            }
            Role::Tool => {
                let result = value.tool_result.ok_or_else(|| {
                    ProviderError::invalid_request("tool messages must carry a tool result")
                })?;

                Ok(Self {
                    role: GeminiRole::User,
                    parts: vec![GeminiPart::FunctionResponse {
                        response: response_object(&result.output),
                        name: result.name,
                    }],
                })
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeminiFunctionDeclaration {
    pub name: String,
    pub description: String,
    pub parameters: String,
}

impl From<ToolDefinition> for GeminiFunctionDeclaration {
    fn from(value: ToolDefinition) -> Self {
        Self {
            name: value.name,
            description: value.description,
            parameters: value.input_schema,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeminiFinishReason {
    Stop,
    MaxTokens,
    Safety,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GeminiUsage {
    pub prompt_tokens: u32,
    pub candidate_tokens: u32,
    pub total_tokens: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GeminiResponse {
    pub model: String,
    pub content: GeminiContent,
    pub finish_reason: GeminiFinishReason,
    pub usage: GeminiUsage,
}

impl GeminiResponse {
    pub fn into_model_response(self) -> ModelResponse {
        let mut text = String::new();
        let mut tool_calls = Vec::new();

        for part in self.content.parts {
            match part {
                GeminiPart::Text(value) => text.push_str(&value),
                GeminiPart::FunctionCall {
                    name,
                    args,
                    thought_signature,
                } => tool_calls.push(ToolCall {
                    id: format!("call_{}", tool_calls.len()),
                    name,
                    arguments: args.to_string(),
                    thought_signature,
                }),
                GeminiPart::FunctionResponse { .. } => {}
            }
        }

        let stop_reason = if !tool_calls.is_empty() {
            StopReason::ToolUse
        } else {
            match self.finish_reason {
                GeminiFinishReason::Stop => StopReason::EndTurn,
                GeminiFinishReason::MaxTokens => StopReason::MaxTokens,
                GeminiFinishReason::Safety => StopReason::Safety,
                GeminiFinishReason::Other => StopReason::Other,
            }
        };

        let mut output = Vec::new();
        if !text.is_empty() {
            output.push(OutputItem::Message(Message::new(Role::Assistant, text)));
        }
        output.extend(tool_calls.into_iter().map(OutputItem::ToolCall));

        ModelResponse {
            provider: ProviderId::Gemini,
            model: self.model,
            output,
            stop_reason,
            usage: TokenUsage {
                input_tokens: self.usage.prompt_tokens,
                output_tokens: self.usage.candidate_tokens,
                total_tokens: self.usage.total_tokens,
            },
        }
    }
}

fn text_part(content: String) -> Option<GeminiPart> {
    if content.is_empty() {
        None
    } else {
        Some(GeminiPart::Text(content))
    }
}

fn parse_arguments(arguments: &str) -> Result<Value, ProviderError> {
    if arguments.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_str(arguments).map_err(|err| {
        ProviderError::invalid_request(format!("tool call arguments must be valid JSON: {err}"))
    })
}

/// Gemini requires `functionResponse.response` to be a JSON object.
fn response_object(output: &str) -> Value {
    match serde_json::from_str::<Value>(output) {
        Ok(Value::Object(map)) => Value::Object(map),
        Ok(other) => wrap_output(other),
        Err(_) => wrap_output(Value::String(output.to_string())),
    }
}

fn wrap_output(value: Value) -> Value {
    let mut map = Map::new();
    map.insert("output".to_string(), value);
    Value::Object(map)
}
