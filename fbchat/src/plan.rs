//! Two-state turn plan derived from the initial completion.

use fbprovider::{Message, ModelResponse, ToolCall};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnPlan {
    /// No tool call; the text (possibly empty) is the answer.
    Direct { text: String },
    /// The first requested tool call, plus the assistant turn that carries it.
    ToolFollowup {
        call: ToolCall,
        assistant_turn: Message,
    },
}

impl TurnPlan {
    /// Only the first tool call is honored when several are requested.
    pub fn from_response(response: &ModelResponse) -> Self {
        let text = response.text();
        match response.tool_calls().into_iter().next() {
            Some(call) => Self::ToolFollowup {
                assistant_turn: Message::assistant_tool_calls(text, vec![call.clone()]),
                call,
            },
            None => Self::Direct { text },
        }
    }

    pub fn is_tool_followup(&self) -> bool {
        matches!(self, Self::ToolFollowup { .. })
    }
}

#[cfg(test)]
mod tests {
    use fbprovider::{OutputItem, ProviderId, Role, StopReason, TokenUsage};

    use super::*;

    fn response(output: Vec<OutputItem>) -> ModelResponse {
        ModelResponse {
            provider: ProviderId::Gemini,
            model: "gemini-3-flash-preview".to_string(),
            output,
            stop_reason: StopReason::EndTurn,
            usage: TokenUsage::default(),
        }
    }

    fn call(id: &str, arguments: &str) -> ToolCall {
        ToolCall::new(id, "searchFlipbazzarInventory", arguments)
    }

    #[test]
    fn text_only_response_is_direct() {
        let plan = TurnPlan::from_response(&response(vec![OutputItem::Message(Message::new(
            Role::Assistant,
            "Hello!",
        ))]));

        assert_eq!(
            plan,
            TurnPlan::Direct {
                text: "Hello!".to_string()
            }
        );
        assert!(!plan.is_tool_followup());
    }

    #[test]
    fn empty_response_is_direct_with_empty_text() {
        let plan = TurnPlan::from_response(&response(Vec::new()));
        assert_eq!(
            plan,
            TurnPlan::Direct {
                text: String::new()
            }
        );
    }

    #[test]
    fn first_tool_call_wins() {
        let plan = TurnPlan::from_response(&response(vec![
            OutputItem::Message(Message::new(Role::Assistant, "Searching.")),
            OutputItem::ToolCall(call("call_0", r#"{"category":"audio"}"#)),
            OutputItem::ToolCall(call("call_1", r#"{"category":"laptop"}"#)),
        ]));

        let TurnPlan::ToolFollowup {
            call,
            assistant_turn,
        } = plan
        else {
            panic!("expected tool followup");
        };

        assert_eq!(call.id, "call_0");
        assert_eq!(assistant_turn.role, Role::Assistant);
        assert_eq!(assistant_turn.content, "Searching.");
        assert_eq!(assistant_turn.tool_calls, vec![call]);
    }

    #[test]
    fn assistant_turn_keeps_thought_signature() {
        let signed = call("call_0", r#"{"category":"audio"}"#).with_thought_signature("sig-abc");
        let plan = TurnPlan::from_response(&response(vec![OutputItem::ToolCall(signed)]));

        let TurnPlan::ToolFollowup { assistant_turn, .. } = plan else {
            panic!("expected tool followup");
        };

        assert_eq!(
            assistant_turn.tool_calls[0].thought_signature.as_deref(),
            Some("sig-abc")
        );
    }
}
