use axum_test::TestServer;
use legal_qa::{
    assistant::{self, Answerer},
    config::{Config, InferenceConfig, ServiceVariant},
    server::{self, handlers::AppState},
};
use std::sync::Arc;

pub const TEST_API_KEY: &str = "hf_test_token";

/// Inference config pointing at a mock upstream
pub fn test_inference_config(
    base_url: &str,
    api_key: Option<&str>,
    variant: ServiceVariant,
) -> InferenceConfig {
    let mut config = InferenceConfig {
        variant,
        base_url: base_url.to_string(),
        api_key: api_key.map(str::to_string),
        ..InferenceConfig::default()
    };
    config.primary.timeout_secs = 2;
    config.fallback.timeout_secs = 2;
    config
}

/// Server driven by an arbitrary answerer
pub fn server_with(answerer: Arc<dyn Answerer>) -> TestServer {
    let origins = Config::default().server.allowed_origins;
    let app = server::router(AppState { answerer }, &origins);
    TestServer::new(app).expect("Failed to start test server")
}

/// Server wired exactly as the binary wires it
pub fn server_for(config: &InferenceConfig) -> TestServer {
    let answerer = assistant::build(config).expect("Failed to build answerer");
    server_with(answerer)
}
