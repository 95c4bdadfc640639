//! Mapping tables translating request inputs into prompt context.

/// Caller-reported stress level, mapped from the 0-3 scale the dashboard
/// sends. Unknown values fall back to `Stressed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StressLevel {
    Relaxed,
    Stressed,
    Anxious,
    Overwhelmed,
}

impl StressLevel {
    pub fn from_numeric(level: u8) -> Self {
        match level {
            0 => StressLevel::Relaxed,
            1 => StressLevel::Stressed,
            2 => StressLevel::Anxious,
            3 => StressLevel::Overwhelmed,
            _ => StressLevel::Stressed,
        }
    }

    /// Token injected into planning prompts, uppercase as the planner
    /// instruction expects.
    pub fn as_prompt(self) -> &'static str {
        match self {
            StressLevel::Relaxed => "RELAXED",
            StressLevel::Stressed => "STRESSED",
            StressLevel::Anxious => "ANXIOUS",
            StressLevel::Overwhelmed => "OVERWHELMED",
        }
    }
}

/// Quiz difficulty. The raw request string is echoed back to the caller
/// unchanged; this enum only shapes the generation prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "hard" => Difficulty::Hard,
            _ => Difficulty::Medium,
        }
    }

    pub fn as_prompt(self) -> &'static str {
        match self {
            Difficulty::Easy => "recall and definitions, no trick questions",
            Difficulty::Medium => "applied understanding with one reasoning step",
            Difficulty::Hard => "multi-step reasoning and edge cases",
        }
    }
}

/// Job seniority level for search prompts. Unrecognized input keeps the raw
/// caller text, so `descriptor` is the only read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeniorityLevel {
    Intern,
    Junior,
    Mid,
    Senior,
    Lead,
}

impl SeniorityLevel {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "intern" | "internship" => Some(SeniorityLevel::Intern),
            "junior" | "entry" | "entry-level" => Some(SeniorityLevel::Junior),
            "mid" | "mid-level" | "intermediate" => Some(SeniorityLevel::Mid),
            "senior" => Some(SeniorityLevel::Senior),
            "lead" | "staff" | "principal" => Some(SeniorityLevel::Lead),
            _ => None,
        }
    }

    pub fn descriptor(self) -> &'static str {
        match self {
            SeniorityLevel::Intern => "internship",
            SeniorityLevel::Junior => "junior / entry level",
            SeniorityLevel::Mid => "mid level",
            SeniorityLevel::Senior => "senior level",
            SeniorityLevel::Lead => "lead / staff level",
        }
    }
}

/// Renders the level phrase used in job-search prompts, keeping the caller's
/// own wording when it is not in the table.
pub fn level_phrase(raw: &str) -> String {
    match SeniorityLevel::parse(raw) {
        Some(level) => level.descriptor().to_string(),
        None => raw.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stress_level_table() {
        assert_eq!(StressLevel::from_numeric(0), StressLevel::Relaxed);
        assert_eq!(StressLevel::from_numeric(1), StressLevel::Stressed);
        assert_eq!(StressLevel::from_numeric(2), StressLevel::Anxious);
        assert_eq!(StressLevel::from_numeric(3), StressLevel::Overwhelmed);
    }

    #[test]
    fn test_stress_level_unknown_falls_back_to_stressed() {
        assert_eq!(StressLevel::from_numeric(9), StressLevel::Stressed);
        assert_eq!(StressLevel::from_numeric(9).as_prompt(), "STRESSED");
    }

    #[test]
    fn test_difficulty_parse_is_case_insensitive() {
        assert_eq!(Difficulty::parse("HARD"), Difficulty::Hard);
        assert_eq!(Difficulty::parse("Easy"), Difficulty::Easy);
    }

    #[test]
    fn test_difficulty_unknown_defaults_to_medium() {
        assert_eq!(Difficulty::parse("brutal"), Difficulty::Medium);
        assert_eq!(Difficulty::parse(""), Difficulty::Medium);
    }

    #[test]
    fn test_seniority_aliases() {
        assert_eq!(SeniorityLevel::parse("entry"), Some(SeniorityLevel::Junior));
        assert_eq!(SeniorityLevel::parse("staff"), Some(SeniorityLevel::Lead));
        assert_eq!(SeniorityLevel::parse("wizard"), None);
    }

    #[test]
    fn test_level_phrase_keeps_unknown_caller_text() {
        assert_eq!(level_phrase("Senior"), "senior level");
        assert_eq!(level_phrase("distinguished"), "distinguished");
    }
}
