//! Interactive mock-interview state machine.
//!
//! Stages move `ready → interviewing → evaluating → finished`; `finished`
//! admits only an explicit reset back to `ready`. Ending the interview is
//! always an explicit caller action (the evaluate call); the reply text is
//! never inspected for termination cues. Every transition that contacts an
//! agent either fully applies (turns appended, stage advanced) or leaves the
//! session exactly as it was and surfaces the error.

use crate::agents::prompts::EVALUATE_INSTRUCTION;
use crate::agents::{INTERVIEW_EVALUATOR_AGENT, MOCK_INTERVIEWER_AGENT};
use crate::errors::AppError;
use crate::models::session::{InterviewStage, TurnRole};

use super::session::new_session_id;
use super::{MockEvaluationResponse, MockInterviewResponse, MockResetResponse, Runner};

impl Runner {
    /// `ready → interviewing`: seeds a fresh session with the interview
    /// context and returns the interviewer's opening question.
    pub async fn start_mock_interview(
        &self,
        user_id: &str,
        role: &str,
        company: &str,
        common_topics: &[String],
    ) -> Result<MockInterviewResponse, AppError> {
        let session_id = new_session_id("mock");
        self.store.ensure(user_id, &session_id).await?;
        self.store
            .set_stage(&session_id, InterviewStage::Ready)
            .await?;

        let seed = format!(
            "START INTERVIEW for Role: {role}, Company: {company}. \
             Topics for context: {}",
            common_topics.join(", ")
        );

        let opening = self
            .execute_step(&MOCK_INTERVIEWER_AGENT, user_id, &session_id, &seed, &[])
            .await?;

        self.store
            .append_turn(&session_id, TurnRole::System, &seed)
            .await?;
        self.store
            .append_turn(&session_id, TurnRole::Agent, &opening)
            .await?;
        self.store
            .set_stage(&session_id, InterviewStage::Interviewing)
            .await?;

        Ok(MockInterviewResponse {
            success: true,
            session_id,
            response: opening,
        })
    }

    /// `interviewing → interviewing`: one answer in, one question out.
    pub async fn continue_mock_interview(
        &self,
        user_id: &str,
        session_id: &str,
        user_response: &str,
    ) -> Result<MockInterviewResponse, AppError> {
        let stage = self.interview_stage(session_id).await?;
        if stage != InterviewStage::Interviewing {
            return Err(AppError::Conflict(format!(
                "interview is {stage}; expected interviewing"
            )));
        }

        let history = self.store.history(session_id).await?;
        let reply = self
            .execute_step(
                &MOCK_INTERVIEWER_AGENT,
                user_id,
                session_id,
                user_response,
                &history,
            )
            .await?;

        self.store
            .append_turn(session_id, TurnRole::User, user_response)
            .await?;
        self.store
            .append_turn(session_id, TurnRole::Agent, &reply)
            .await?;

        Ok(MockInterviewResponse {
            success: true,
            session_id: session_id.to_string(),
            response: reply,
        })
    }

    /// `interviewing → evaluating → finished`: the explicit end of the
    /// interview. A failed evaluator call leaves the session in
    /// `evaluating`, so the caller can retry this transition.
    pub async fn evaluate_interview(
        &self,
        user_id: &str,
        session_id: &str,
    ) -> Result<MockEvaluationResponse, AppError> {
        match self.interview_stage(session_id).await? {
            InterviewStage::Interviewing => {
                self.store
                    .set_stage(session_id, InterviewStage::Evaluating)
                    .await?;
            }
            InterviewStage::Evaluating => {} // retry
            InterviewStage::Ready => {
                return Err(AppError::Conflict(
                    "interview has not started yet".to_string(),
                ));
            }
            InterviewStage::Finished => {
                return Err(AppError::Conflict(
                    "interview already finished; reset to start over".to_string(),
                ));
            }
        }

        let history = self.store.history(session_id).await?;
        let summary = self
            .execute_step(
                &INTERVIEW_EVALUATOR_AGENT,
                user_id,
                session_id,
                EVALUATE_INSTRUCTION,
                &history,
            )
            .await?;

        self.store
            .append_turn(session_id, TurnRole::Evaluation, &summary)
            .await?;
        self.store
            .set_stage(session_id, InterviewStage::Finished)
            .await?;

        Ok(MockEvaluationResponse {
            success: true,
            session_id: session_id.to_string(),
            summary,
        })
    }

    /// `finished → ready`: abandons the thread; the next start generates a
    /// fresh session id.
    pub async fn reset_mock_interview(
        &self,
        session_id: &str,
    ) -> Result<MockResetResponse, AppError> {
        let stage = self.interview_stage(session_id).await?;
        if stage != InterviewStage::Finished {
            return Err(AppError::Conflict(format!(
                "interview is {stage}; only a finished interview can be reset"
            )));
        }

        self.store
            .set_stage(session_id, InterviewStage::Ready)
            .await?;

        Ok(MockResetResponse {
            success: true,
            session_id: session_id.to_string(),
        })
    }

    /// Resolves the stage of an interview session, distinguishing unknown
    /// sessions from sessions that never were interviews.
    async fn interview_stage(&self, session_id: &str) -> Result<InterviewStage, AppError> {
        match self.store.stage(session_id).await? {
            Some(stage) => Ok(stage),
            None => {
                if self.store.exists(session_id).await? {
                    Err(AppError::Conflict(format!(
                        "session '{session_id}' is not a mock-interview session"
                    )))
                } else {
                    Err(AppError::Session(format!(
                        "unknown or expired session '{session_id}'"
                    )))
                }
            }
        }
    }
}
