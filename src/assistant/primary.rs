use super::{Answer, Answerer, ModelInfo};
use crate::{
    Error, Result,
    config::{API_KEY_ENV, InferenceConfig},
    inference::{HuggingFaceClient, InferenceBackend, extract_generated_text, prompt},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, error};

/// Answers through a single dedicated legal model. Upstream failures fail
/// the request.
pub struct PrimaryAnswerer {
    backend: Option<Box<dyn InferenceBackend>>,
    info: ModelInfo,
}

impl PrimaryAnswerer {
    pub fn new(backend: Option<Box<dyn InferenceBackend>>) -> Self {
        Self {
            backend,
            info: Self::default_info(),
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Result<Self> {
        let backend = match config.api_key() {
            Some(api_key) => {
                let client = HuggingFaceClient::new(&config.base_url, api_key)?;
                let model = client.model(
                    &config.primary.model,
                    config.primary.generation.clone(),
                    Duration::from_secs(config.primary.timeout_secs),
                );
                Some(Box::new(model) as Box<dyn InferenceBackend>)
            }
            None => None,
        };

        Ok(Self::new(backend))
    }

    pub fn default_info() -> ModelInfo {
        ModelInfo {
            model_name: "JurisPrae".to_string(),
            model_url: "https://huggingface.co/Enfysyz/JurisPrae".to_string(),
            description: "A legal expert model trained for legal question answering".to_string(),
            architecture: "LLaMA-based".to_string(),
            parameters: "8.03B".to_string(),
        }
    }
}

fn missing_key_answer(question: &str) -> String {
    format!(
        "I'm sorry, but I need a Hugging Face API key to access the JurisPrae model. \
         Please set the {API_KEY_ENV} environment variable. Your question was: {question}"
    )
}

#[async_trait]
impl Answerer for PrimaryAnswerer {
    fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    async fn answer(&self, question: &str) -> Result<Answer> {
        let Some(backend) = &self.backend else {
            return Ok(Answer::with_placeholder_confidence(missing_key_answer(
                question,
            )));
        };

        let payload = backend
            .infer(&prompt::expert_prompt(question))
            .await
            .map_err(|e| {
                error!("Error querying model {}: {}", backend.model(), e);
                Error::inference(e.to_string())
            })?;

        let text = extract_generated_text(&payload).unwrap_or_else(|| {
            debug!("Unrecognized payload from {}, returning it raw", backend.model());
            payload.to_string()
        });

        Ok(Answer::with_placeholder_confidence(text))
    }
}
