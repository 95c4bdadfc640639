//! Deterministic local tools backing structuring steps.
//!
//! Each tool contributes a context block that is appended to the step's
//! system prompt before the LLM call. The set is closed: adding a tool means
//! adding a variant here, not registering anything dynamically.

use chrono::Utc;
use uuid::Uuid;

/// The closed set of structuring tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuringTool {
    QuizStructure,
    InterviewResearch,
    WellnessTip,
    ProductivityProfile,
}

impl StructuringTool {
    /// Tool name surfaced in the public agent catalog.
    pub fn name(self) -> &'static str {
        match self {
            StructuringTool::QuizStructure => "quiz_generator",
            StructuringTool::InterviewResearch => "interview_research",
            StructuringTool::WellnessTip => "wellness_tips",
            StructuringTool::ProductivityProfile => "productivity_analyzer",
        }
    }

    /// Renders the context block injected into the step's system prompt.
    pub fn context_block(self) -> String {
        match self {
            StructuringTool::QuizStructure => quiz_structure(),
            StructuringTool::InterviewResearch => interview_research_meta(),
            StructuringTool::WellnessTip => wellness_tip_table(),
            StructuringTool::ProductivityProfile => productivity_profile(),
        }
    }
}

/// Quiz metadata scaffold; the LLM fills the content.
fn quiz_structure() -> String {
    let quiz_id = format!("quiz_{}", &Uuid::new_v4().simple().to_string()[..8]);
    format!(
        "Quiz structure:\n\
         - quiz_id: {quiz_id}\n\
         - generated_at: {}\n\
         Use the quiz_id as the quiz title suffix.",
        Utc::now().to_rfc3339()
    )
}

/// Search framing and default topic coverage for interview research.
fn interview_research_meta() -> String {
    "Interview research guidance:\n\
     - Prioritize findings from candidate-report sites (Glassdoor, LeetCode discuss).\n\
     - Always cover these baseline topics even if research is thin:\n\
       Data Structures, System Design, Behavioral Questions."
        .to_string()
}

/// Stress-tier tip table mirrored from the coaching playbook.
fn wellness_tip_table() -> String {
    "Stress-management playbook (pick from the matching tier):\n\
     - RELAXED: 5-minute meditation break; gratitude journaling; 10 minutes of light stretching.\n\
     - STRESSED: 4-7-8 breathing; a 10-minute walk; calming music.\n\
     - ANXIOUS: Pomodoro blocks; progressive muscle relaxation; write down your thoughts.\n\
     - OVERWHELMED: 30-minute digital detox; call a friend; deep breathing."
        .to_string()
}

/// Default productivity profile used until per-user analytics exist.
fn productivity_profile() -> String {
    "User productivity profile:\n\
     - productive hours: 09:00-11:00 and 15:00-17:00\n\
     - preferred learning style: visual\n\
     - focus duration: 45 minutes\n\
     - recommended break frequency: every 45 minutes"
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_match_catalog() {
        assert_eq!(StructuringTool::QuizStructure.name(), "quiz_generator");
        assert_eq!(
            StructuringTool::InterviewResearch.name(),
            "interview_research"
        );
        assert_eq!(StructuringTool::WellnessTip.name(), "wellness_tips");
        assert_eq!(
            StructuringTool::ProductivityProfile.name(),
            "productivity_analyzer"
        );
    }

    #[test]
    fn test_quiz_structure_embeds_fresh_id() {
        let block = StructuringTool::QuizStructure.context_block();
        assert!(block.contains("quiz_id: quiz_"));
        let id = block
            .lines()
            .find(|l| l.contains("quiz_id"))
            .and_then(|l| l.split("quiz_").last())
            .unwrap();
        assert_eq!(id.trim().len(), 8);
        assert!(id.trim().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_wellness_table_covers_all_stress_tiers() {
        let block = StructuringTool::WellnessTip.context_block();
        for tier in ["RELAXED", "STRESSED", "ANXIOUS", "OVERWHELMED"] {
            assert!(block.contains(tier), "missing tier {tier}");
        }
    }

    #[test]
    fn test_interview_research_names_baseline_topics() {
        let block = StructuringTool::InterviewResearch.context_block();
        assert!(block.contains("System Design"));
        assert!(block.contains("Behavioral Questions"));
    }
}
