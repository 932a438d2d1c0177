mod chain;
mod client;
pub mod prompt;
mod types;

pub use chain::{ChainAnswer, FallbackChain};
pub use client::{HostedModel, HuggingFaceClient, InferenceBackend, StatusPolicy};
pub use types::{
    GenerationParameters, GenerationRequest, extract_generated_text, extract_generated_text_strict,
};
