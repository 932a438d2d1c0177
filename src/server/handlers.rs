use super::types::{
    ErrorResponse, HealthResponse, QuestionRequest, QuestionResponse, StatusResponse,
};
use crate::assistant::{Answerer, ModelInfo, RequestEvent, RequestLifecycle};
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::{any::Any, sync::Arc};
use tracing::{error, info};

const QUESTION_PREVIEW_CHARS: usize = 50;

#[derive(Clone)]
pub struct AppState {
    pub answerer: Arc<dyn Answerer>,
}

type ErrorReply = (StatusCode, Json<ErrorResponse>);

fn internal_error(detail: impl ToString) -> ErrorReply {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            detail: detail.to_string(),
        }),
    )
}

fn preview(text: &str) -> String {
    text.chars().take(QUESTION_PREVIEW_CHARS).collect()
}

pub async fn root(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Legal QA System API is running".to_string(),
        model: state.answerer.label().to_string(),
        status: "active".to_string(),
    })
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        model: state.answerer.label().to_string(),
    })
}

pub async fn model_info(State(state): State<AppState>) -> Json<ModelInfo> {
    Json(state.answerer.model_info().clone())
}

pub async fn ask(
    State(state): State<AppState>,
    Json(request): Json<QuestionRequest>,
) -> Result<Json<QuestionResponse>, ErrorReply> {
    let mut lifecycle = RequestLifecycle::new();
    let request_id = lifecycle.id();

    info!(%request_id, "Received question: {}", request.question);

    lifecycle
        .transition(RequestEvent::BeginAnswering)
        .map_err(internal_error)?;

    match state.answerer.answer(&request.question).await {
        Ok(answer) => {
            lifecycle
                .transition(RequestEvent::AnswerProduced)
                .map_err(internal_error)?;
            info!(
                %request_id,
                "Generated answer for question: {}...",
                preview(&request.question)
            );
            Ok(Json(QuestionResponse {
                answer: answer.text,
                model_used: state.answerer.label().to_string(),
                confidence: answer.confidence,
            }))
        }
        Err(e) => {
            lifecycle
                .transition(RequestEvent::ErrorOccurred)
                .map_err(internal_error)?;
            error!(%request_id, "Error processing question: {}", e);
            Err(internal_error(e))
        }
    }
}

/// Converts a panic inside a handler into the regular error body.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message.to_string()
    } else {
        "An unexpected error occurred".to_string()
    };

    error!("Handler panicked: {}", detail);
    internal_error(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_preview_is_char_aware() {
        let question = "¿".repeat(80);
        assert_eq!(preview(&question).chars().count(), QUESTION_PREVIEW_CHARS);
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_panic_response_status() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
