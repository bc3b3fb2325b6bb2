use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::repository::{ProfileRepository, RepositoryError, StatusWriter};
use super::service::{ReadinessError, ReadinessService};
use super::views::{ProfileCompletionView, ReadinessReportView};

/// Shared handler state: the service, the status writer, and the caller's fetch budget.
pub struct ReadinessRoutes<R, W> {
    pub service: Arc<ReadinessService<R>>,
    pub writer: Arc<W>,
    pub fetch_budget: Duration,
}

impl<R, W> Clone for ReadinessRoutes<R, W> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            writer: Arc::clone(&self.writer),
            fetch_budget: self.fetch_budget,
        }
    }
}

/// Router builder exposing the admin and self-service readiness endpoints.
pub fn readiness_router<R, W>(routes: ReadinessRoutes<R, W>) -> Router
where
    R: ProfileRepository + 'static,
    W: StatusWriter + 'static,
{
    Router::new()
        .route(
            "/api/v1/professionals/:professional_id/readiness",
            get(readiness_handler::<R, W>),
        )
        .route(
            "/api/v1/professionals/:professional_id/profile-completion",
            get(completion_handler::<R, W>),
        )
        .route(
            "/api/v1/professionals/:professional_id/status/reconcile",
            post(reconcile_handler::<R, W>),
        )
        .with_state(routes)
}

pub(crate) async fn readiness_handler<R, W>(
    State(routes): State<ReadinessRoutes<R, W>>,
    Path(professional_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    W: StatusWriter + 'static,
{
    let service = Arc::clone(&routes.service);
    let result = run_with_budget(routes.fetch_budget, move || {
        service.readiness_report(&professional_id)
    })
    .await;

    match result {
        Ok((id, report, decision)) => {
            let view = ReadinessReportView::new(id, &report, decision);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn completion_handler<R, W>(
    State(routes): State<ReadinessRoutes<R, W>>,
    Path(professional_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    W: StatusWriter + 'static,
{
    let service = Arc::clone(&routes.service);
    let result = run_with_budget(routes.fetch_budget, move || {
        service.calculate_profile_completion(&professional_id)
    })
    .await;

    match result {
        Ok(report) => {
            let view = ProfileCompletionView::from(report);
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn reconcile_handler<R, W>(
    State(routes): State<ReadinessRoutes<R, W>>,
    Path(professional_id): Path<String>,
) -> Response
where
    R: ProfileRepository + 'static,
    W: StatusWriter + 'static,
{
    let service = Arc::clone(&routes.service);
    let writer = Arc::clone(&routes.writer);
    let result = run_with_budget(routes.fetch_budget, move || {
        service.reconcile_status(&professional_id, writer.as_ref())
    })
    .await;

    match result {
        Ok(outcome) => (StatusCode::OK, axum::Json(outcome)).into_response(),
        Err(error) => error_response(error),
    }
}

/// Run a blocking evaluation under the caller's budget; overruns surface as data-access errors.
pub(crate) async fn run_with_budget<T, F>(budget: Duration, task: F) -> Result<T, ReadinessError>
where
    F: FnOnce() -> Result<T, ReadinessError> + Send + 'static,
    T: Send + 'static,
{
    match tokio::time::timeout(budget, tokio::task::spawn_blocking(task)).await {
        Ok(Ok(result)) => result,
        Ok(Err(join_error)) => Err(ReadinessError::DataAccess(RepositoryError::Unavailable(
            join_error.to_string(),
        ))),
        Err(_) => Err(ReadinessError::DataAccess(RepositoryError::TimedOut {
            budget_ms: u64::try_from(budget.as_millis()).unwrap_or(u64::MAX),
        })),
    }
}

pub(crate) fn error_response(error: ReadinessError) -> Response {
    let status = match &error {
        ReadinessError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        ReadinessError::NotFound(_) => StatusCode::NOT_FOUND,
        ReadinessError::DataAccess(_) => StatusCode::SERVICE_UNAVAILABLE,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
