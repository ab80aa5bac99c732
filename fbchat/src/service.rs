//! Conversation orchestration: initial completion, optional inventory search,
//! and the follow-up completion that answers with the search results.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

use fbcommon::TraceId;
use fbinventory::{InventoryStore, SearchParams, search_tool_definition, tool_result_payload};
use fbprovider::{
    Message, ModelProvider, ModelRequest, ModelResponse, NoopOperationHooks, ProviderError,
    ProviderOperationHooks, Role, Rotator, ToolDefinition, ToolResult, execute_with_rotation,
};

use crate::{
    ChatError, ChatResponse, ChatRuntimeHooks, ConversationTurn, NoopChatRuntimeHooks, TurnPlan,
    TurnRole, UserContext, system_instruction,
};

pub const DEFAULT_TEMPERATURE: f32 = 0.15;
pub const DIRECT_FALLBACK_MESSAGE: &str = "I'm ready to help with your tech search.";
pub const TOOL_FALLBACK_MESSAGE: &str = "Here is what I found in our tech vault.";

const INITIAL_OPERATION: &str = "initial_call";
const FOLLOWUP_OPERATION: &str = "tool_followup";

pub struct ChatService {
    provider: Arc<dyn ModelProvider>,
    rotator: Arc<Rotator>,
    inventory: Arc<dyn InventoryStore>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    hooks: Arc<dyn ChatRuntimeHooks>,
    temperature: f32,
    turns: AtomicU64,
}

impl ChatService {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        rotator: Arc<Rotator>,
        inventory: Arc<dyn InventoryStore>,
    ) -> Self {
        Self::builder(provider, rotator, inventory).build()
    }

    pub fn builder(
        provider: Arc<dyn ModelProvider>,
        rotator: Arc<Rotator>,
        inventory: Arc<dyn InventoryStore>,
    ) -> ChatServiceBuilder {
        ChatServiceBuilder::new(provider, rotator, inventory)
    }

    pub fn rotator(&self) -> &Rotator {
        &self.rotator
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    /// Answers one user message. Failures never escape; they become the
    /// setup-required or busy message.
    pub async fn respond(
        &self,
        history: &[ConversationTurn],
        user_message: &str,
        user: Option<&UserContext>,
    ) -> ChatResponse {
        let trace_id = self.next_trace_id();
        let started = Instant::now();
        self.hooks.on_turn_start(&trace_id, history.len());

        match self.run_turn(&trace_id, history, user_message, user).await {
            Ok(response) => {
                self.hooks
                    .on_turn_complete(&trace_id, &response, started.elapsed());
                response
            }
            Err(error) => {
                self.hooks
                    .on_turn_failure(&trace_id, &error, started.elapsed());
                ChatResponse::text(error.user_message())
            }
        }
    }

    async fn run_turn(
        &self,
        trace_id: &TraceId,
        history: &[ConversationTurn],
        user_message: &str,
        user: Option<&UserContext>,
    ) -> Result<ChatResponse, ChatError> {
        if user_message.trim().is_empty() {
            return Err(ChatError::invalid_request("user message must not be empty"));
        }

        let mut messages = vec![Message::new(Role::System, system_instruction(user))];
        messages.extend(normalize_history(history).iter().map(Message::from));
        messages.push(Message::new(Role::User, user_message));

        let initial = self
            .complete(
                INITIAL_OPERATION,
                &messages,
                vec![search_tool_definition()],
                Some(self.temperature),
            )
            .await?;

        match TurnPlan::from_response(&initial) {
            TurnPlan::Direct { text } => Ok(ChatResponse::text(non_empty_or(
                text,
                DIRECT_FALLBACK_MESSAGE,
            ))),
            TurnPlan::ToolFollowup {
                call,
                assistant_turn,
            } => {
                self.hooks.on_tool_call(trace_id, &call);

                let params = SearchParams::from_tool_arguments(&call.arguments)?;
                let products = self.inventory.search(params).await;
                let payload = tool_result_payload(&products)?;

                messages.push(assistant_turn);
                messages.push(Message::tool_result(ToolResult::from_call(&call, payload)));

                let followup = self
                    .complete(FOLLOWUP_OPERATION, &messages, Vec::new(), None)
                    .await?;

                Ok(ChatResponse::with_products(
                    non_empty_or(followup.text(), TOOL_FALLBACK_MESSAGE),
                    products,
                ))
            }
        }
    }

    async fn complete(
        &self,
        operation: &str,
        messages: &[Message],
        tools: Vec<ToolDefinition>,
        temperature: Option<f32>,
    ) -> Result<ModelResponse, ProviderError> {
        execute_with_rotation(
            &self.rotator,
            self.provider.id(),
            operation,
            self.provider_hooks.as_ref(),
            |slot| {
                let mut builder = ModelRequest::builder(slot.model.clone())
                    .messages(messages.to_vec())
                    .tools(tools.clone());
                if let Some(temperature) = temperature {
                    builder = builder.temperature(temperature);
                }
                let request = builder.build();
                let provider = Arc::clone(&self.provider);

                async move { provider.complete(request?, &slot.credential).await }
            },
        )
        .await
    }

    fn next_trace_id(&self) -> TraceId {
        let turn = self.turns.fetch_add(1, Ordering::Relaxed) + 1;
        TraceId::new(format!("turn-{turn}"))
    }
}

impl std::fmt::Debug for ChatService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatService")
            .field("provider", &self.provider.id())
            .field("rotator", &self.rotator)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}

pub struct ChatServiceBuilder {
    provider: Arc<dyn ModelProvider>,
    rotator: Arc<Rotator>,
    inventory: Arc<dyn InventoryStore>,
    provider_hooks: Arc<dyn ProviderOperationHooks>,
    hooks: Arc<dyn ChatRuntimeHooks>,
    temperature: f32,
}

impl ChatServiceBuilder {
    pub fn new(
        provider: Arc<dyn ModelProvider>,
        rotator: Arc<Rotator>,
        inventory: Arc<dyn InventoryStore>,
    ) -> Self {
        Self {
            provider,
            rotator,
            inventory,
            provider_hooks: Arc::new(NoopOperationHooks),
            hooks: Arc::new(NoopChatRuntimeHooks),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn provider_hooks(mut self, hooks: Arc<dyn ProviderOperationHooks>) -> Self {
        self.provider_hooks = hooks;
        self
    }

    pub fn hooks(mut self, hooks: Arc<dyn ChatRuntimeHooks>) -> Self {
        self.hooks = hooks;
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    pub fn build(self) -> ChatService {
        ChatService {
            provider: self.provider,
            rotator: self.rotator,
            inventory: self.inventory,
            provider_hooks: self.provider_hooks,
            hooks: self.hooks,
            temperature: self.temperature,
            turns: AtomicU64::new(0),
        }
    }
}

/// Completion backends expect the first turn to come from the user.
fn normalize_history(history: &[ConversationTurn]) -> &[ConversationTurn] {
    match history.first() {
        Some(turn) if turn.role == TurnRole::Assistant => &history[1..],
        _ => history,
    }
}

fn non_empty_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}
