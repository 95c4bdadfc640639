pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::orchestrator::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // One-shot workflows
        .route("/daily-plan", post(handlers::handle_daily_plan))
        .route("/interview-prep", post(handlers::handle_interview_prep))
        .route("/quiz", post(handlers::handle_quiz))
        .route("/job-search", post(handlers::handle_job_search))
        .route("/resume-analyze", post(handlers::handle_resume_analyze))
        .route("/evaluate", post(handlers::handle_evaluate))
        // Interactive mock interview
        .route("/mock-interview/start", post(handlers::handle_mock_start))
        .route(
            "/mock-interview/continue",
            post(handlers::handle_mock_continue),
        )
        .route(
            "/mock-interview/evaluate",
            post(handlers::handle_mock_evaluate),
        )
        .route("/mock-interview/reset", post(handlers::handle_mock_reset))
        // Observability
        .route("/traces", get(handlers::handle_traces))
        .route("/agents", get(handlers::handle_agents))
        .with_state(state)
}
