use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct QuestionRequest {
    pub question: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub answer: String,
    pub model_used: String,
    pub confidence: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
    pub model: String,
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}
