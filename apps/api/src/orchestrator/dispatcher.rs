//! Workflow dispatcher: runs a static stage composition against a session
//! and collects the final textual result.

use std::collections::HashMap;

use futures::future::join_all;
use tokio::time::timeout;
use tracing::debug;

use crate::agents::workflows::{Stage, Workflow};
use crate::agents::AgentSpec;
use crate::errors::AppError;
use crate::models::session::{Turn, TurnRole};

use super::executor::{final_text, AgentCall};
use super::Runner;

/// Outcome of one workflow run.
#[derive(Debug)]
pub struct WorkflowRun {
    /// The last stage's produced text.
    pub text: String,
    /// Every stage output, keyed by `output_key`.
    pub outputs: HashMap<String, String>,
}

impl Runner {
    /// Runs `workflow` against `session_id`, creating the session if needed.
    ///
    /// Stage group one receives the message and accumulated history; each
    /// later group receives a rendering of all earlier outputs plus the
    /// original message. Parallel siblings are dispatched together and each
    /// writes its own output key. Session turns and the trace record are
    /// written only after the whole run succeeds, so a failed run leaves the
    /// session untouched.
    pub(crate) async fn dispatch(
        &self,
        workflow: &Workflow,
        user_id: &str,
        session_id: &str,
        message: &str,
    ) -> Result<WorkflowRun, AppError> {
        self.store.ensure(user_id, session_id).await?;
        let history = self.store.history(session_id).await?;

        let mut outputs: Vec<(&'static str, String)> = Vec::new();
        let mut last_text: Option<String> = None;

        for (index, stage) in workflow.stages.iter().enumerate() {
            let input = if index == 0 {
                message.to_string()
            } else {
                stage_input(message, &outputs)
            };

            match stage {
                Stage::Single(agent) => {
                    let text = self
                        .execute_step(agent, user_id, session_id, &input, &history)
                        .await?;
                    outputs.push((agent.output_key, text.clone()));
                    last_text = Some(text);
                }
                Stage::Parallel(agents) => {
                    let futures: Vec<_> = agents
                        .iter()
                        .map(|agent| {
                            self.execute_step(agent, user_id, session_id, &input, &history)
                        })
                        .collect();
                    let results = join_all(futures).await;

                    last_text = None;
                    for (agent, result) in agents.iter().zip(results) {
                        let text = result?;
                        outputs.push((agent.output_key, text.clone()));
                        last_text = Some(text);
                    }
                }
            }
        }

        let text = last_text.ok_or(AppError::NoResponse)?;

        self.store
            .append_turn(session_id, TurnRole::User, message)
            .await?;
        self.store
            .append_turn(session_id, TurnRole::Agent, &text)
            .await?;
        self.trace.append(workflow.name, message, &text).await;

        let run = WorkflowRun {
            text,
            outputs: outputs
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        };
        debug!(
            "{} completed with {} stage outputs",
            workflow.name,
            run.outputs.len()
        );

        Ok(run)
    }

    /// One agent call with a bounded wait. Returns the final answer text or
    /// the reason there is none.
    pub(crate) async fn execute_step(
        &self,
        agent: &AgentSpec,
        user_id: &str,
        session_id: &str,
        input: &str,
        history: &[Turn],
    ) -> Result<String, AppError> {
        let call = AgentCall {
            user_id: user_id.to_string(),
            session_id: session_id.to_string(),
            message: input.to_string(),
            history: history.to_vec(),
        };

        let events = timeout(self.step_timeout, self.executor.execute(agent, &call))
            .await
            .map_err(|_| {
                AppError::Llm(format!(
                    "{} produced no result within {:?}",
                    agent.name, self.step_timeout
                ))
            })??;

        final_text(&events)
            .map(str::to_string)
            .ok_or(AppError::NoResponse)
    }
}

/// Renders the context a later stage group sees: every earlier output under
/// its key, then the original request.
fn stage_input(message: &str, outputs: &[(&'static str, String)]) -> String {
    let mut input = String::from("Context from earlier steps:\n");
    for (key, text) in outputs {
        input.push_str(&format!("\n## {key}\n{text}\n"));
    }
    input.push_str(&format!("\nOriginal request:\n{message}"));
    input
}
