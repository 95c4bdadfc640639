use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Role of one turn in a session's conversation history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Agent,
    System,
    Evaluation,
}

impl TurnRole {
    pub fn as_str(self) -> &'static str {
        match self {
            TurnRole::User => "user",
            TurnRole::Agent => "agent",
            TurnRole::System => "system",
            TurnRole::Evaluation => "evaluation",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "user" => Some(TurnRole::User),
            "agent" => Some(TurnRole::Agent),
            "system" => Some(TurnRole::System),
            "evaluation" => Some(TurnRole::Evaluation),
            _ => None,
        }
    }
}

/// One entry in a session's append-only conversation history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: TurnRole,
    pub text: String,
}

impl Turn {
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
        }
    }
}

/// Stage tag for interactive mock-interview sessions.
/// One-shot workflow sessions carry no stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterviewStage {
    Ready,
    Interviewing,
    Evaluating,
    Finished,
}

impl InterviewStage {
    pub fn as_str(self) -> &'static str {
        match self {
            InterviewStage::Ready => "ready",
            InterviewStage::Interviewing => "interviewing",
            InterviewStage::Evaluating => "evaluating",
            InterviewStage::Finished => "finished",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ready" => Some(InterviewStage::Ready),
            "interviewing" => Some(InterviewStage::Interviewing),
            "evaluating" => Some(InterviewStage::Evaluating),
            "finished" => Some(InterviewStage::Finished),
            _ => None,
        }
    }
}

impl std::fmt::Display for InterviewStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Database row for one conversation turn.
#[derive(Debug, Clone, FromRow)]
pub struct TurnRow {
    pub role: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_role_round_trips_through_strings() {
        for role in [
            TurnRole::User,
            TurnRole::Agent,
            TurnRole::System,
            TurnRole::Evaluation,
        ] {
            assert_eq!(TurnRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(TurnRole::parse("moderator"), None);
    }

    #[test]
    fn test_turn_role_serde_uses_lowercase() {
        let json = serde_json::to_string(&TurnRole::Evaluation).unwrap();
        assert_eq!(json, r#""evaluation""#);
    }

    #[test]
    fn test_interview_stage_round_trips_through_strings() {
        for stage in [
            InterviewStage::Ready,
            InterviewStage::Interviewing,
            InterviewStage::Evaluating,
            InterviewStage::Finished,
        ] {
            assert_eq!(InterviewStage::parse(stage.as_str()), Some(stage));
        }
        assert_eq!(InterviewStage::parse("paused"), None);
    }
}
