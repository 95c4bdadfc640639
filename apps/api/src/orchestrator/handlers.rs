//! Axum route handlers for the orchestration API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::agents;
use crate::errors::AppError;
use crate::state::AppState;

use super::trace::TraceRecord;
use super::{
    DailyPlanResponse, EvaluationResponse, InterviewPrepResponse, JobSearchResponse,
    MockEvaluationResponse, MockInterviewResponse, MockResetResponse, QuizResponse,
    ResumeAnalysisResponse,
};

// ────────────────────────────────────────────────────────────────────────────
// Request types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct DailyPlanRequest {
    pub user_id: String,
    pub goals: String,
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub stress_level: Option<u8>,
}

#[derive(Debug, Deserialize)]
pub struct InterviewPrepRequest {
    pub user_id: String,
    pub role: String,
    pub company: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub user_id: String,
    pub topic: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct JobSearchRequest {
    pub user_id: String,
    pub role: String,
    pub level: String,
    pub experience: u32,
    pub location: String,
}

#[derive(Debug, Deserialize)]
pub struct MockStartRequest {
    pub user_id: String,
    pub role: String,
    pub company: String,
    pub common_topics: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MockContinueRequest {
    pub user_id: String,
    pub session_id: String,
    pub user_response: String,
}

#[derive(Debug, Deserialize)]
pub struct MockSessionRequest {
    pub user_id: String,
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub struct ResumeAnalysisRequest {
    pub user_id: String,
    pub resume_text: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct EvalRequest {
    pub user_prompt: String,
    pub ai_response: String,
}

#[derive(Serialize)]
pub struct TracesResponse {
    pub traces: Vec<TraceRecord>,
}

#[derive(Serialize)]
pub struct AgentSummary {
    pub name: &'static str,
    pub description: &'static str,
    pub tools: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct AgentsResponse {
    pub agents: Vec<AgentSummary>,
}

fn require(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /daily-plan
pub async fn handle_daily_plan(
    State(state): State<AppState>,
    Json(request): Json<DailyPlanRequest>,
) -> Result<Json<DailyPlanResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("goals", &request.goals)?;

    let response = state
        .runner
        .run_daily_plan(
            &request.user_id,
            &request.goals,
            request.session_id,
            request.stress_level,
        )
        .await?;
    Ok(Json(response))
}

/// POST /interview-prep
pub async fn handle_interview_prep(
    State(state): State<AppState>,
    Json(request): Json<InterviewPrepRequest>,
) -> Result<Json<InterviewPrepResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("role", &request.role)?;
    require("company", &request.company)?;

    let response = state
        .runner
        .run_interview_prep(
            &request.user_id,
            &request.role,
            &request.company,
            request.description.as_deref(),
        )
        .await?;
    Ok(Json(response))
}

/// POST /quiz
pub async fn handle_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("topic", &request.topic)?;

    let response = state
        .runner
        .run_quiz_generation(
            &request.user_id,
            &request.topic,
            request.notes.as_deref().unwrap_or(""),
            request.difficulty.as_deref().unwrap_or("medium"),
        )
        .await?;
    Ok(Json(response))
}

/// POST /job-search
pub async fn handle_job_search(
    State(state): State<AppState>,
    Json(request): Json<JobSearchRequest>,
) -> Result<Json<JobSearchResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("role", &request.role)?;
    require("level", &request.level)?;

    let response = state
        .runner
        .quick_job_search(
            &request.user_id,
            &request.role,
            &request.level,
            request.experience,
            &request.location,
        )
        .await?;
    Ok(Json(response))
}

/// POST /mock-interview/start
pub async fn handle_mock_start(
    State(state): State<AppState>,
    Json(request): Json<MockStartRequest>,
) -> Result<Json<MockInterviewResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("role", &request.role)?;
    require("company", &request.company)?;

    let response = state
        .runner
        .start_mock_interview(
            &request.user_id,
            &request.role,
            &request.company,
            &request.common_topics,
        )
        .await?;
    Ok(Json(response))
}

/// POST /mock-interview/continue
pub async fn handle_mock_continue(
    State(state): State<AppState>,
    Json(request): Json<MockContinueRequest>,
) -> Result<Json<MockInterviewResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("session_id", &request.session_id)?;
    require("user_response", &request.user_response)?;

    let response = state
        .runner
        .continue_mock_interview(
            &request.user_id,
            &request.session_id,
            &request.user_response,
        )
        .await?;
    Ok(Json(response))
}

/// POST /mock-interview/evaluate
pub async fn handle_mock_evaluate(
    State(state): State<AppState>,
    Json(request): Json<MockSessionRequest>,
) -> Result<Json<MockEvaluationResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("session_id", &request.session_id)?;

    let response = state
        .runner
        .evaluate_interview(&request.user_id, &request.session_id)
        .await?;
    Ok(Json(response))
}

/// POST /mock-interview/reset
pub async fn handle_mock_reset(
    State(state): State<AppState>,
    Json(request): Json<MockSessionRequest>,
) -> Result<Json<MockResetResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("session_id", &request.session_id)?;

    let response = state.runner.reset_mock_interview(&request.session_id).await?;
    Ok(Json(response))
}

/// POST /resume-analyze
pub async fn handle_resume_analyze(
    State(state): State<AppState>,
    Json(request): Json<ResumeAnalysisRequest>,
) -> Result<Json<ResumeAnalysisResponse>, AppError> {
    require("user_id", &request.user_id)?;
    require("resume_text", &request.resume_text)?;
    require("job_description", &request.job_description)?;

    let response = state
        .runner
        .run_resume_analysis(
            &request.user_id,
            &request.resume_text,
            &request.job_description,
        )
        .await?;
    Ok(Json(response))
}

/// POST /evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvalRequest>,
) -> Result<Json<EvaluationResponse>, AppError> {
    require("user_prompt", &request.user_prompt)?;
    require("ai_response", &request.ai_response)?;

    let response = state
        .runner
        .run_quality_check(&request.user_prompt, &request.ai_response)
        .await?;
    Ok(Json(response))
}

/// GET /traces
/// Returns the last 10 workflow invocations, oldest first.
pub async fn handle_traces(State(state): State<AppState>) -> Json<TracesResponse> {
    Json(TracesResponse {
        traces: state.runner.recent_traces(10).await,
    })
}

/// GET /agents
/// Returns the static agent catalog.
pub async fn handle_agents() -> Json<AgentsResponse> {
    let agents = agents::catalog()
        .iter()
        .map(|agent| AgentSummary {
            name: agent.name,
            description: agent.description,
            tools: agent.kind.tool_names(),
        })
        .collect();
    Json(AgentsResponse { agents })
}
