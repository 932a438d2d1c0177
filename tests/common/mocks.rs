use async_trait::async_trait;
use legal_qa::{
    Error, Result,
    assistant::{Answer, Answerer, ModelInfo},
    inference::InferenceBackend,
};
use serde_json::Value;
use std::sync::{Arc, Mutex};

/// Scripted reply of a [`MockBackend`].
#[derive(Debug, Clone)]
pub enum MockReply {
    Payload(Value),
    Status(u16),
    Failure(String),
}

/// Mock inference backend that records every prompt it receives
#[derive(Debug, Clone)]
pub struct MockBackend {
    pub model: String,
    pub reply: MockReply,
    pub prompts: Arc<Mutex<Vec<String>>>,
}

impl MockBackend {
    pub fn new(model: &str, reply: MockReply) -> Self {
        Self {
            model: model.to_string(),
            reply,
            prompts: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn answering(model: &str, text: &str) -> Self {
        Self::new(
            model,
            MockReply::Payload(serde_json::json!([{ "generated_text": text }])),
        )
    }

    pub fn failing(model: &str, status: u16) -> Self {
        Self::new(model, MockReply::Status(status))
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn boxed(&self) -> Box<dyn InferenceBackend> {
        Box::new(self.clone())
    }
}

#[async_trait]
impl InferenceBackend for MockBackend {
    fn model(&self) -> &str {
        &self.model
    }

    async fn infer(&self, inputs: &str) -> Result<Value> {
        self.prompts.lock().unwrap().push(inputs.to_string());

        match &self.reply {
            MockReply::Payload(payload) => Ok(payload.clone()),
            MockReply::Status(status) => Err(Error::UpstreamStatus {
                model: self.model.clone(),
                status: *status,
            }),
            MockReply::Failure(message) => Err(Error::internal(message.clone())),
        }
    }
}

/// Answerer whose behavior is fixed at construction
pub struct MockAnswerer {
    pub info: ModelInfo,
    pub outcome: std::result::Result<Answer, String>,
    pub panics: bool,
}

impl MockAnswerer {
    fn info() -> ModelInfo {
        ModelInfo {
            model_name: "Mock Assistant".to_string(),
            model_url: "https://example.test/mock".to_string(),
            description: "Mock answerer for tests".to_string(),
            architecture: "None".to_string(),
            parameters: "0".to_string(),
        }
    }

    pub fn answering(text: &str, confidence: Option<f64>) -> Self {
        Self {
            info: Self::info(),
            outcome: Ok(Answer::new(text, confidence)),
            panics: false,
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            info: Self::info(),
            outcome: Err(message.to_string()),
            panics: false,
        }
    }

    pub fn panicking() -> Self {
        Self {
            info: Self::info(),
            outcome: Err("unused".to_string()),
            panics: true,
        }
    }
}

#[async_trait]
impl Answerer for MockAnswerer {
    fn model_info(&self) -> &ModelInfo {
        &self.info
    }

    async fn answer(&self, _question: &str) -> Result<Answer> {
        if self.panics {
            panic!("answerer exploded");
        }

        match &self.outcome {
            Ok(answer) => Ok(answer.clone()),
            Err(message) => Err(Error::internal(message.clone())),
        }
    }
}
