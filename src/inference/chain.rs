use super::{InferenceBackend, extract_generated_text_strict};
use tracing::{debug, warn};

/// Text produced by one candidate of a [`FallbackChain`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChainAnswer {
    pub model: String,
    pub text: String,
}

/// Ordered list of inference candidates tried one after another.
///
/// The first candidate that answers with a `generated_text` payload wins and
/// later candidates are never called. Failures and unrecognized payloads are logged
/// and skipped; exhausting the chain yields `None`.
#[derive(Default)]
pub struct FallbackChain {
    candidates: Vec<Box<dyn InferenceBackend>>,
}

impl FallbackChain {
    pub fn new(candidates: Vec<Box<dyn InferenceBackend>>) -> Self {
        Self { candidates }
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.candidates.iter().map(|c| c.model())
    }

    pub async fn first_success(&self, inputs: &str) -> Option<ChainAnswer> {
        for candidate in &self.candidates {
            let model = candidate.model();
            debug!("Trying model {}", model);

            match candidate.infer(inputs).await {
                Ok(payload) => match extract_generated_text_strict(&payload) {
                    Some(text) => {
                        return Some(ChainAnswer {
                            model: model.to_string(),
                            text,
                        });
                    }
                    None => warn!("Model {} returned an unrecognized payload", model),
                },
                Err(e) => warn!("Failed to query model {}: {}", model, e),
            }
        }

        None
    }
}
