//! Static agent catalog: every LLM agent the platform runs, declared as data.
//!
//! An agent is an instruction plus a step kind and the key its output is
//! stored under in workflow context. Workflows compose these specs in
//! `workflows`; the executor interprets the step kind at call time.

pub mod prompts;
pub mod tools;
pub mod workflows;

use tools::StructuringTool;

/// How a step is executed. Closed set; there is no open-ended tool dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// Search-grounded generation.
    Search,
    /// Generation backed by one deterministic local tool.
    Structuring(StructuringTool),
    /// Plain generation from instruction and context alone.
    FreeForm,
}

impl StepKind {
    /// Tool names surfaced in the public agent catalog.
    pub fn tool_names(self) -> Vec<&'static str> {
        match self {
            StepKind::Search => vec!["google_search"],
            StepKind::Structuring(tool) => vec![tool.name()],
            StepKind::FreeForm => vec![],
        }
    }
}

/// Static declaration of one agent.
#[derive(Debug, Clone, Copy)]
pub struct AgentSpec {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: StepKind,
    pub instruction: &'static str,
    pub output_key: &'static str,
}

pub const STUDY_RESEARCH_AGENT: AgentSpec = AgentSpec {
    name: "StudyResearchAgent",
    description: "Finds study resources for the user's goals",
    kind: StepKind::Search,
    instruction: prompts::STUDY_RESEARCH,
    output_key: "study_research_output",
};

pub const STUDY_PLANNER_AGENT: AgentSpec = AgentSpec {
    name: "StudyPlannerAgent",
    description: "Creates personalized study plans",
    kind: StepKind::Structuring(StructuringTool::ProductivityProfile),
    instruction: prompts::STUDY_PLANNER,
    output_key: "study_plan",
};

pub const JOB_ADVISOR_AGENT: AgentSpec = AgentSpec {
    name: "JobSearchAgent",
    description: "Helps with career planning and job search",
    kind: StepKind::Search,
    instruction: prompts::JOB_ADVISOR,
    output_key: "job_plan",
};

pub const WELLNESS_AGENT: AgentSpec = AgentSpec {
    name: "WellnessAgent",
    description: "Provides wellness and stress management tips",
    kind: StepKind::Structuring(StructuringTool::WellnessTip),
    instruction: prompts::WELLNESS,
    output_key: "wellness_plan",
};

pub const DAILY_PLANNER_AGENT: AgentSpec = AgentSpec {
    name: "PlannerAgent",
    description: "Combines all plans into cohesive schedule",
    kind: StepKind::FreeForm,
    instruction: prompts::DAILY_PLANNER,
    output_key: "daily_plan",
};

pub const INTERVIEW_SEARCH_AGENT: AgentSpec = AgentSpec {
    name: "InterviewSearchAgent",
    description: "Researches company-specific interview processes",
    kind: StepKind::Search,
    instruction: prompts::INTERVIEW_SEARCH,
    output_key: "raw_interview_research",
};

pub const INTERVIEW_PROCESSOR_AGENT: AgentSpec = AgentSpec {
    name: "InterviewProcessorAgent",
    description: "Structures interview research into topic areas",
    kind: StepKind::Structuring(StructuringTool::InterviewResearch),
    instruction: prompts::INTERVIEW_PROCESSOR,
    output_key: "interview_plan",
};

pub const INTERVIEW_PLANNER_AGENT: AgentSpec = AgentSpec {
    name: "InterviewPlannerAgent",
    description: "Prepares for company-specific interviews",
    kind: StepKind::FreeForm,
    instruction: prompts::INTERVIEW_PLANNER,
    output_key: "final_interview_prep",
};

pub const QUIZ_AGENT: AgentSpec = AgentSpec {
    name: "QuizAgent",
    description: "Generates learning quizzes from topics",
    kind: StepKind::Structuring(StructuringTool::QuizStructure),
    instruction: prompts::QUIZ,
    output_key: "quiz_content",
};

pub const JOB_WEB_SEARCH_AGENT: AgentSpec = AgentSpec {
    name: "WebSearchAgentSimple",
    description: "Finds current job listings across public boards",
    kind: StepKind::Search,
    instruction: prompts::JOB_WEB_SEARCHER,
    output_key: "search_results",
};

pub const JOB_COORDINATOR_AGENT: AgentSpec = AgentSpec {
    name: "JobSearchCoordinatorSimple",
    description: "Formats job listings into a ranked report",
    kind: StepKind::FreeForm,
    instruction: prompts::JOB_COORDINATOR,
    output_key: "job_search_report",
};

pub const MOCK_INTERVIEWER_AGENT: AgentSpec = AgentSpec {
    name: "MockInterviewerAgent",
    description: "Runs interactive mock interviews one question at a time",
    kind: StepKind::FreeForm,
    instruction: prompts::INTERACTIVE_INTERVIEWER,
    output_key: "interview_transcript_segment",
};

pub const INTERVIEW_EVALUATOR_AGENT: AgentSpec = AgentSpec {
    name: "EvaluatorAgent",
    description: "Grades a finished mock-interview transcript",
    kind: StepKind::FreeForm,
    instruction: prompts::INTERVIEW_EVALUATOR,
    output_key: "final_interview_summary",
};

pub const RESUME_ATS_AGENT: AgentSpec = AgentSpec {
    name: "ResumeATSAgent",
    description: "Analyzes a resume against a job description",
    kind: StepKind::FreeForm,
    instruction: prompts::RESUME_ATS,
    output_key: "resume_analysis_report",
};

pub const QUALITY_JUDGE_AGENT: AgentSpec = AgentSpec {
    name: "QualityJudgeAgent",
    description: "LLM-as-a-judge for prompt/response pairs",
    kind: StepKind::FreeForm,
    instruction: prompts::QUALITY_JUDGE,
    output_key: "evaluation_report",
};

/// Every agent, in catalog order. Backs GET /agents.
pub fn catalog() -> &'static [AgentSpec] {
    &[
        STUDY_RESEARCH_AGENT,
        STUDY_PLANNER_AGENT,
        JOB_ADVISOR_AGENT,
        WELLNESS_AGENT,
        DAILY_PLANNER_AGENT,
        INTERVIEW_SEARCH_AGENT,
        INTERVIEW_PROCESSOR_AGENT,
        INTERVIEW_PLANNER_AGENT,
        QUIZ_AGENT,
        JOB_WEB_SEARCH_AGENT,
        JOB_COORDINATOR_AGENT,
        MOCK_INTERVIEWER_AGENT,
        INTERVIEW_EVALUATOR_AGENT,
        RESUME_ATS_AGENT,
        QUALITY_JUDGE_AGENT,
    ]
}
