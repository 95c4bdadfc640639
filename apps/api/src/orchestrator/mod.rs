//! Session-oriented orchestration: one `Runner` owns the session store, the
//! agent executor, and the trace log, and exposes every operation the HTTP
//! surface needs. Constructed once at startup and carried in `AppState` so
//! tests can substitute fakes for the collaborators.

pub mod dispatcher;
pub mod executor;
pub mod handlers;
pub mod interview;
pub mod session;
pub mod trace;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::agents::workflows;
use crate::errors::AppError;
use crate::models::levels::{level_phrase, Difficulty, StressLevel};

use executor::AgentExecutor;
use session::{new_session_id, SessionStore};
use trace::{TraceLog, TraceRecord};

/// Session-store application namespace.
pub const APP_NAME: &str = "synergy_ai_platform";

/// The long-lived orchestration handle.
pub struct Runner {
    store: Arc<dyn SessionStore>,
    executor: Arc<dyn AgentExecutor>,
    trace: TraceLog,
    step_timeout: Duration,
}

impl Runner {
    pub fn new(
        store: Arc<dyn SessionStore>,
        executor: Arc<dyn AgentExecutor>,
        trace: TraceLog,
        step_timeout: Duration,
    ) -> Self {
        Self {
            store,
            executor,
            trace,
            step_timeout,
        }
    }

    pub async fn recent_traces(&self, n: usize) -> Vec<TraceRecord> {
        self.trace.recent(n).await
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DailyPlanResponse {
    pub success: bool,
    pub session_id: String,
    pub plan: String,
    pub user_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct InterviewPrepResponse {
    pub success: bool,
    pub session_id: String,
    pub plan: String,
    pub role: String,
    pub company: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub success: bool,
    pub session_id: String,
    pub quiz: String,
    pub topic: String,
    pub difficulty: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct JobSearchResponse {
    pub success: bool,
    pub session_id: String,
    pub agent_response: String,
    pub direct_links: BTreeMap<String, String>,
    pub search_tips: Vec<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ResumeAnalysisResponse {
    pub success: bool,
    pub analysis: String,
    pub session_id: String,
}

#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub success: bool,
    pub evaluation: String,
}

#[derive(Debug, Serialize)]
pub struct MockInterviewResponse {
    pub success: bool,
    pub session_id: String,
    pub response: String,
}

#[derive(Debug, Serialize)]
pub struct MockEvaluationResponse {
    pub success: bool,
    pub session_id: String,
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct MockResetResponse {
    pub success: bool,
    pub session_id: String,
}

// ────────────────────────────────────────────────────────────────────────────
// One-shot workflow operations
// ────────────────────────────────────────────────────────────────────────────

impl Runner {
    pub async fn run_daily_plan(
        &self,
        user_id: &str,
        goals: &str,
        session_id: Option<String>,
        stress_level: Option<u8>,
    ) -> Result<DailyPlanResponse, AppError> {
        let session_id = session_id
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| new_session_id("session"));
        let stress = StressLevel::from_numeric(stress_level.unwrap_or(1));

        let message = format!(
            "Create a daily plan for these goals: {goals}. \
             My current stress level is {}.",
            stress.as_prompt()
        );

        let run = self
            .dispatch(&workflows::daily_workflow(), user_id, &session_id, &message)
            .await?;

        Ok(DailyPlanResponse {
            success: true,
            session_id,
            plan: run.text,
            user_id: user_id.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub async fn run_interview_prep(
        &self,
        user_id: &str,
        role: &str,
        company: &str,
        description: Option<&str>,
    ) -> Result<InterviewPrepResponse, AppError> {
        let session_id = new_session_id("interview");

        let mut message = format!("Prepare for {role} interview at {company}");
        if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
            message.push_str("\nJob Description: ");
            message.push_str(description);
        }

        let run = self
            .dispatch(
                &workflows::interview_workflow(),
                user_id,
                &session_id,
                &message,
            )
            .await?;

        Ok(InterviewPrepResponse {
            success: true,
            session_id,
            plan: run.text,
            role: role.to_string(),
            company: company.to_string(),
            timestamp: Utc::now(),
        })
    }

    /// The caller's difficulty string is echoed back untouched; the mapping
    /// table only shapes the prompt.
    pub async fn run_quiz_generation(
        &self,
        user_id: &str,
        topic: &str,
        notes: &str,
        difficulty: &str,
    ) -> Result<QuizResponse, AppError> {
        let session_id = new_session_id("quiz");

        let message = format!(
            "topic: {topic}\nnotes: {notes}\ndifficulty: {difficulty} ({})",
            Difficulty::parse(difficulty).as_prompt()
        );

        let run = self
            .dispatch(&workflows::quiz_workflow(), user_id, &session_id, &message)
            .await?;

        Ok(QuizResponse {
            success: true,
            session_id,
            quiz: run.text,
            topic: topic.to_string(),
            difficulty: difficulty.to_string(),
            timestamp: Utc::now(),
        })
    }

    pub async fn quick_job_search(
        &self,
        user_id: &str,
        role: &str,
        level: &str,
        experience: u32,
        location: &str,
    ) -> Result<JobSearchResponse, AppError> {
        let session_id = new_session_id("quick");

        let where_clause = if location.trim().is_empty() {
            "any location".to_string()
        } else {
            location.to_string()
        };
        let message = format!(
            "Find {} {role} openings in {where_clause} for a candidate with \
             {experience} years of experience.\n\
             Search LinkedIn, Indeed, Glassdoor, and Naukri (if the location is in India).\n\
             Return specific job listings with links.",
            level_phrase(level)
        );

        let run = self
            .dispatch(
                &workflows::job_search_workflow(),
                user_id,
                &session_id,
                &message,
            )
            .await?;

        Ok(JobSearchResponse {
            success: true,
            session_id,
            agent_response: run.text,
            direct_links: direct_links(role, location),
            search_tips: search_tips(role, level, location),
            timestamp: Utc::now(),
        })
    }

    pub async fn run_resume_analysis(
        &self,
        user_id: &str,
        resume_text: &str,
        job_description: &str,
    ) -> Result<ResumeAnalysisResponse, AppError> {
        let session_id = new_session_id("resume");

        let message = format!("RESUME TEXT:\n{resume_text}\n\nJOB DESCRIPTION:\n{job_description}");

        let run = self
            .dispatch(
                &workflows::resume_analysis_workflow(),
                user_id,
                &session_id,
                &message,
            )
            .await?;

        Ok(ResumeAnalysisResponse {
            success: true,
            analysis: run.text,
            session_id,
        })
    }

    /// LLM-as-a-judge over a prompt/response pair. Runs under a fixed
    /// `evaluator` user with a throwaway session.
    pub async fn run_quality_check(
        &self,
        user_prompt: &str,
        ai_response: &str,
    ) -> Result<EvaluationResponse, AppError> {
        let session_id = new_session_id("eval");

        let message = format!("User Prompt: {user_prompt}\nAI Response: {ai_response}");

        let run = self
            .dispatch(
                &workflows::quality_judge_workflow(),
                "evaluator",
                &session_id,
                &message,
            )
            .await?;

        Ok(EvaluationResponse {
            success: true,
            evaluation: run.text,
        })
    }
}

fn direct_links(role: &str, location: &str) -> BTreeMap<String, String> {
    let role_plus = role.replace(' ', "+");
    let location_plus = location.replace(' ', "+");
    let role_dash = role.replace(' ', "-");
    let location_dash = location.replace(' ', "-");

    let mut links = BTreeMap::new();
    links.insert(
        "LinkedIn".to_string(),
        format!("https://linkedin.com/jobs/search/?keywords={role_plus}&location={location_plus}"),
    );
    let mut indeed = format!("https://indeed.com/q-{role_dash}");
    if !location_dash.is_empty() {
        indeed.push('-');
        indeed.push_str(&location_dash);
    }
    indeed.push_str("-jobs.html");
    links.insert("Indeed".to_string(), indeed);
    links.insert(
        "Glassdoor".to_string(),
        format!("https://glassdoor.com/Job/{role_dash}-jobs.htm"),
    );
    let mut naukri = format!("https://naukri.com/{role_dash}-jobs");
    if !location_dash.is_empty() {
        naukri.push_str("-in-");
        naukri.push_str(&location_dash);
    }
    links.insert("Naukri".to_string(), naukri);
    links
}

fn search_tips(role: &str, level: &str, location: &str) -> Vec<String> {
    vec![
        format!("Search: '{role} {level} {location}'")
            .trim()
            .to_string(),
        "Filter by: Date posted (past 24 hours)".to_string(),
        "Set up job alerts".to_string(),
    ]
}

// ────────────────────────────────────────────────────────────────────────────
// Test support
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use async_trait::async_trait;

    use super::executor::{AgentCall, AgentEvent, AgentExecutor};
    use super::session::MemorySessionStore;
    use super::trace::TraceLog;
    use super::*;
    use crate::agents::AgentSpec;

    /// Replies `reply from {agent}` to every call.
    pub struct EchoExecutor;

    #[async_trait]
    impl AgentExecutor for EchoExecutor {
        async fn execute(
            &self,
            agent: &AgentSpec,
            _call: &AgentCall,
        ) -> Result<Vec<AgentEvent>, AppError> {
            Ok(vec![AgentEvent::terminal(format!("reply from {}", agent.name))])
        }
    }

    /// Completes without ever emitting a terminal event.
    pub struct SilentExecutor;

    #[async_trait]
    impl AgentExecutor for SilentExecutor {
        async fn execute(
            &self,
            _agent: &AgentSpec,
            _call: &AgentCall,
        ) -> Result<Vec<AgentEvent>, AppError> {
            Ok(vec![AgentEvent {
                text: None,
                is_final: false,
            }])
        }
    }

    /// Fails every call at the collaborator boundary.
    pub struct FailingExecutor;

    #[async_trait]
    impl AgentExecutor for FailingExecutor {
        async fn execute(
            &self,
            agent: &AgentSpec,
            _call: &AgentCall,
        ) -> Result<Vec<AgentEvent>, AppError> {
            Err(AppError::Llm(format!("{} is unreachable", agent.name)))
        }
    }

    /// Hangs long enough to trip the dispatcher's bounded wait.
    pub struct SlowExecutor(pub Duration);

    #[async_trait]
    impl AgentExecutor for SlowExecutor {
        async fn execute(
            &self,
            _agent: &AgentSpec,
            _call: &AgentCall,
        ) -> Result<Vec<AgentEvent>, AppError> {
            tokio::time::sleep(self.0).await;
            Ok(vec![AgentEvent::terminal("too late")])
        }
    }

    /// Records every (agent, message) pair it sees, then echoes.
    #[derive(Default)]
    pub struct RecordingExecutor {
        pub calls: Mutex<Vec<(String, String)>>,
    }

    #[async_trait]
    impl AgentExecutor for RecordingExecutor {
        async fn execute(
            &self,
            agent: &AgentSpec,
            call: &AgentCall,
        ) -> Result<Vec<AgentEvent>, AppError> {
            self.calls
                .lock()
                .unwrap()
                .push((agent.name.to_string(), call.message.clone()));
            Ok(vec![AgentEvent::terminal(format!("reply from {}", agent.name))])
        }
    }

    /// Runner over an in-memory store and a throwaway trace file.
    pub fn test_runner(executor: Arc<dyn AgentExecutor>) -> (Runner, Arc<MemorySessionStore>) {
        let store = Arc::new(MemorySessionStore::new());
        let trace = TraceLog::new(std::env::temp_dir().join(format!(
            "synergy_test_traces_{}.jsonl",
            uuid::Uuid::new_v4().simple()
        )));
        let runner = Runner::new(
            store.clone(),
            executor,
            trace,
            Duration::from_millis(250),
        );
        (runner, store)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::{test_runner, EchoExecutor, RecordingExecutor};
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_quiz_generation_echoes_difficulty_unchanged() {
        let (runner, _) = test_runner(Arc::new(EchoExecutor));
        let response = runner
            .run_quiz_generation("u1", "Binary Trees", "", "hard")
            .await
            .unwrap();

        assert!(response.success);
        assert!(!response.quiz.is_empty());
        assert_eq!(response.topic, "Binary Trees");
        assert_eq!(response.difficulty, "hard");
        assert!(response.session_id.starts_with("quiz_"));
    }

    #[tokio::test]
    async fn test_daily_plan_maps_stress_level_into_prompt() {
        let recorder = Arc::new(RecordingExecutor::default());
        let (runner, _) = test_runner(recorder.clone());
        runner
            .run_daily_plan("u1", "ship the release", None, Some(3))
            .await
            .unwrap();

        let calls = recorder.calls.lock().unwrap();
        let first_stage_message = &calls[0].1;
        assert!(first_stage_message.contains("OVERWHELMED"));
        assert!(first_stage_message.contains("ship the release"));
    }

    #[tokio::test]
    async fn test_daily_plan_generates_session_id_when_absent() {
        let (runner, _) = test_runner(Arc::new(EchoExecutor));
        let response = runner
            .run_daily_plan("u1", "learn Rust", None, None)
            .await
            .unwrap();
        assert!(response.session_id.starts_with("session_"));

        let supplied = runner
            .run_daily_plan("u1", "learn Rust", Some("session_cafe0123".into()), None)
            .await
            .unwrap();
        assert_eq!(supplied.session_id, "session_cafe0123");
    }

    #[tokio::test]
    async fn test_job_search_builds_direct_links_and_tips() {
        let (runner, _) = test_runner(Arc::new(EchoExecutor));
        let response = runner
            .quick_job_search("u1", "Backend Engineer", "Senior", 5, "New York")
            .await
            .unwrap();

        assert_eq!(
            response.direct_links["LinkedIn"],
            "https://linkedin.com/jobs/search/?keywords=Backend+Engineer&location=New+York"
        );
        assert_eq!(
            response.direct_links["Indeed"],
            "https://indeed.com/q-Backend-Engineer-New-York-jobs.html"
        );
        assert_eq!(
            response.direct_links["Naukri"],
            "https://naukri.com/Backend-Engineer-jobs-in-New-York"
        );
        assert_eq!(response.search_tips.len(), 3);
        assert!(response.search_tips[0].contains("Backend Engineer"));
    }

    #[tokio::test]
    async fn test_job_search_links_without_location() {
        let links = direct_links("Backend Engineer", "");
        assert_eq!(
            links["Indeed"],
            "https://indeed.com/q-Backend-Engineer-jobs.html"
        );
        assert_eq!(links["Naukri"], "https://naukri.com/Backend-Engineer-jobs");
    }

    #[tokio::test]
    async fn test_resume_analysis_returns_analysis() {
        let (runner, _) = test_runner(Arc::new(EchoExecutor));
        let response = runner
            .run_resume_analysis("u1", "resume body", "jd body")
            .await
            .unwrap();
        assert!(response.success);
        assert!(response.session_id.starts_with("resume_"));
        assert_eq!(response.analysis, "reply from ResumeATSAgent");
    }

    #[tokio::test]
    async fn test_quality_check_runs_under_evaluator_user() {
        let recorder = Arc::new(RecordingExecutor::default());
        let (runner, store) = test_runner(recorder.clone());
        let response = runner
            .run_quality_check("what is 2+2", "4")
            .await
            .unwrap();

        assert!(response.success);
        assert_eq!(response.evaluation, "reply from QualityJudgeAgent");
        // The judge saw both sides of the pair.
        let calls = recorder.calls.lock().unwrap();
        assert!(calls[0].1.contains("User Prompt: what is 2+2"));
        assert!(calls[0].1.contains("AI Response: 4"));
        drop(calls);
        let _ = store;
    }
}
