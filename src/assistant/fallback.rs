use super::{Answer, Answerer, KeywordSelector, ModelInfo, PLACEHOLDER_CONFIDENCE};
use crate::{
    Result,
    config::InferenceConfig,
    inference::{FallbackChain, HuggingFaceClient, InferenceBackend, StatusPolicy, prompt},
};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{info, warn};

/// Tries general-purpose models in order, then answers from the keyword
/// table. Never fails.
pub struct FallbackAnswerer {
    chain: FallbackChain,
    selector: KeywordSelector,
    info: ModelInfo,
}

impl FallbackAnswerer {
    pub fn new(chain: FallbackChain, selector: KeywordSelector) -> Self {
        Self {
            chain,
            selector,
            info: Self::default_info(),
        }
    }

    pub fn from_config(config: &InferenceConfig) -> Result<Self> {
        let chain = match config.api_key() {
            Some(api_key) => {
                let client = HuggingFaceClient::new(&config.base_url, api_key)?;
                let timeout = Duration::from_secs(config.fallback.timeout_secs);
                let candidates = config
                    .fallback
                    .models
                    .iter()
                    .map(|model| {
                        let hosted = client
                            .model(model, config.fallback.generation.clone(), timeout)
                            .with_status_policy(StatusPolicy::OkOnly);
                        Box::new(hosted) as Box<dyn InferenceBackend>
                    })
                    .collect();
                FallbackChain::new(candidates)
            }
            None => FallbackChain::default(),
        };

        Ok(Self::new(chain, KeywordSelector::default()))
    }

    pub fn default_info() -> ModelInfo {
        ModelInfo {
            model_name: "Fallback Legal Assistant".to_string(),
            model_url: "https://huggingface.co/models".to_string(),
            description: "A legal assistant with fallback responses for common legal questions"
                .to_string(),
            architecture: "Hybrid (API + Fallback)".to_string(),
            parameters: "Variable".to_string(),
        }
    }

    pub fn chain(&self) -> &FallbackChain {
        &self.chain
    }

    fn keyword_answer(&self, question: &str) -> Answer {
        let selected = self.selector.select(question);
        match selected.topic() {
            Some(topic) => info!("Answering from keyword rule '{}'", topic),
            None => info!("No keyword rule matched, using generic answer"),
        }

        let confidence = selected.confidence().unwrap_or(PLACEHOLDER_CONFIDENCE);
        Answer::new(selected.text, Some(confidence))
    }
}

#[async_trait]
impl Answerer for FallbackAnswerer {
    fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    async fn answer(&self, question: &str) -> Result<Answer> {
        if self.chain.is_empty() {
            warn!("No inference models available, using fallback responses");
            return Ok(self.keyword_answer(question));
        }

        if let Some(generated) = self
            .chain
            .first_success(&prompt::brief_prompt(question))
            .await
        {
            info!("Answer generated by {}", generated.model);
            return Ok(Answer::with_placeholder_confidence(generated.text));
        }

        info!("All inference models failed, using fallback response");
        Ok(self.keyword_answer(question))
    }
}
