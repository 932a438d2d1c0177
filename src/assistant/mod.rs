mod fallback;
pub mod fsm;
pub mod keywords;
mod primary;

pub use fallback::FallbackAnswerer;
pub use fsm::{RequestEvent, RequestLifecycle, RequestState};
pub use keywords::{KeywordAnswer, KeywordRule, KeywordSelector, LEGAL_RULES};
pub use primary::PrimaryAnswerer;

use crate::{
    Result,
    config::{InferenceConfig, ServiceVariant},
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{info, warn};

/// Confidence attached to model-generated answers. This is a fixed
/// placeholder and not an estimate derived from any model signal.
pub const PLACEHOLDER_CONFIDENCE: f64 = 0.85;

#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    pub text: String,
    pub confidence: Option<f64>,
}

impl Answer {
    pub fn new(text: impl Into<String>, confidence: Option<f64>) -> Self {
        Self {
            text: text.into(),
            confidence,
        }
    }

    pub fn with_placeholder_confidence(text: impl Into<String>) -> Self {
        Self::new(text, Some(PLACEHOLDER_CONFIDENCE))
    }
}

/// Static description of the backend answering questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub model_name: String,
    pub model_url: String,
    pub description: String,
    pub architecture: String,
    pub parameters: String,
}

#[async_trait]
pub trait Answerer: Send + Sync {
    fn model_info(&self) -> &ModelInfo;

    async fn answer(&self, question: &str) -> Result<Answer>;

    /// Label reported as `model_used`.
    fn label(&self) -> &str {
        &self.model_info().model_name
    }
}

/// Builds the answering backend selected by `config.variant`.
pub fn build(config: &InferenceConfig) -> Result<Arc<dyn Answerer>> {
    if config.api_key().is_none() {
        warn!(
            "{} not configured; answers will degrade until it is set",
            crate::config::API_KEY_ENV
        );
    }

    let answerer: Arc<dyn Answerer> = match config.variant {
        ServiceVariant::Primary => Arc::new(PrimaryAnswerer::from_config(config)?),
        ServiceVariant::Fallback => Arc::new(FallbackAnswerer::from_config(config)?),
    };

    info!(
        "Answering with {:?} variant ({})",
        config.variant,
        answerer.label()
    );

    Ok(answerer)
}
