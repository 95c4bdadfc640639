//! Agent executor: the boundary between orchestration and the LLM runtime.
//!
//! The orchestrator only ever sees a sequence of events per call; the final
//! answer is the last terminal event carrying text. `LlmExecutor` is the
//! production implementation; tests substitute scripted fakes.

use async_trait::async_trait;
use tracing::debug;

use crate::agents::{AgentSpec, StepKind};
use crate::errors::AppError;
use crate::llm_client::{ChatMessage, LlmClient};
use crate::models::session::{Turn, TurnRole};

/// One event emitted while executing an agent. A terminal event may carry
/// the final reply text.
#[derive(Debug, Clone)]
pub struct AgentEvent {
    pub text: Option<String>,
    pub is_final: bool,
}

impl AgentEvent {
    pub fn terminal(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            is_final: true,
        }
    }
}

/// The final answer of an event sequence: the last terminal event with
/// non-empty text.
pub fn final_text(events: &[AgentEvent]) -> Option<&str> {
    events.iter().rev().find_map(|event| {
        if !event.is_final {
            return None;
        }
        event
            .text
            .as_deref()
            .filter(|text| !text.trim().is_empty())
    })
}

/// Everything one agent call needs: identity, the new message, and the
/// session history accumulated so far.
#[derive(Debug, Clone)]
pub struct AgentCall {
    pub user_id: String,
    pub session_id: String,
    pub message: String,
    pub history: Vec<Turn>,
}

/// External agent-execution collaborator.
#[async_trait]
pub trait AgentExecutor: Send + Sync {
    async fn execute(
        &self,
        agent: &AgentSpec,
        call: &AgentCall,
    ) -> Result<Vec<AgentEvent>, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// LLM-backed implementation
// ────────────────────────────────────────────────────────────────────────────

/// Executes agents against the Claude API via the shared `LlmClient`.
pub struct LlmExecutor {
    llm: LlmClient,
}

impl LlmExecutor {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }

    /// System prompt = agent instruction, plus step-kind framing, plus any
    /// system turns already in the session.
    fn system_prompt(agent: &AgentSpec, history: &[Turn]) -> String {
        let mut system = agent.instruction.to_string();

        match agent.kind {
            StepKind::Search => {
                system.push_str(
                    "\n\nGround your answer in current, publicly verifiable sources \
                     and name where each item can be found.",
                );
            }
            StepKind::Structuring(tool) => {
                system.push_str("\n\nTool context:\n");
                system.push_str(&tool.context_block());
            }
            StepKind::FreeForm => {}
        }

        for turn in history {
            if turn.role == TurnRole::System {
                system.push_str("\n\nSession context:\n");
                system.push_str(&turn.text);
            }
        }

        system
    }

    /// Maps session turns onto API chat roles; system turns are folded into
    /// the system prompt instead.
    fn conversation(call: &AgentCall) -> Vec<ChatMessage> {
        let mut messages: Vec<ChatMessage> = call
            .history
            .iter()
            .filter_map(|turn| match turn.role {
                TurnRole::User => Some(ChatMessage::user(turn.text.clone())),
                TurnRole::Agent | TurnRole::Evaluation => {
                    Some(ChatMessage::assistant(turn.text.clone()))
                }
                TurnRole::System => None,
            })
            .collect();
        messages.push(ChatMessage::user(call.message.clone()));
        messages
    }
}

#[async_trait]
impl AgentExecutor for LlmExecutor {
    async fn execute(
        &self,
        agent: &AgentSpec,
        call: &AgentCall,
    ) -> Result<Vec<AgentEvent>, AppError> {
        debug!(
            "executing {} for user={} session={}",
            agent.name, call.user_id, call.session_id
        );

        let system = Self::system_prompt(agent, &call.history);
        let messages = Self::conversation(call);

        let reply = self
            .llm
            .chat(&system, &messages)
            .await
            .map_err(|e| AppError::Llm(format!("{} failed: {e}", agent.name)))?;

        Ok(vec![AgentEvent::terminal(reply)])
    }
}
