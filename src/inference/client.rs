use super::types::GenerationRequest;
use crate::{Error, Result, config::GenerationSettings};
use async_trait::async_trait;
use reqwest::{StatusCode, header};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// A single hosted model that turns a prompt into a JSON payload.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    fn model(&self) -> &str;

    async fn infer(&self, inputs: &str) -> Result<Value>;
}

/// Which upstream statuses count as a usable response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Any 2xx status.
    #[default]
    AnySuccess,
    /// Only `200 OK`.
    OkOnly,
}

impl StatusPolicy {
    pub fn accepts(self, status: StatusCode) -> bool {
        match self {
            StatusPolicy::AnySuccess => status.is_success(),
            StatusPolicy::OkOnly => status == StatusCode::OK,
        }
    }
}

/// HTTP client for the hosted inference API. Built once at startup with the
/// configured token and shared by every model it serves.
#[derive(Clone)]
pub struct HuggingFaceClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl HuggingFaceClient {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("legal-qa/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        })
    }

    pub fn endpoint(&self, model: &str) -> String {
        format!("{}/{}", self.base_url, model)
    }

    pub fn model(
        &self,
        model: impl Into<String>,
        settings: GenerationSettings,
        timeout: Duration,
    ) -> HostedModel {
        HostedModel {
            client: self.clone(),
            model: model.into(),
            settings,
            timeout,
            policy: StatusPolicy::default(),
        }
    }

    pub async fn generate(
        &self,
        model: &str,
        request: &GenerationRequest,
        timeout: Duration,
        policy: StatusPolicy,
    ) -> Result<Value> {
        let url = self.endpoint(model);
        debug!("Posting generation request to {} (timeout {:?})", url, timeout);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .header(header::CONTENT_TYPE, "application/json")
            .timeout(timeout)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !policy.accepts(status) {
            return Err(Error::UpstreamStatus {
                model: model.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        let payload: Value = serde_json::from_slice(&body)?;
        debug!("Received response from {}", model);
        Ok(payload)
    }
}

/// A model on the inference API together with its sampling settings and
/// per-call timeout.
pub struct HostedModel {
    client: HuggingFaceClient,
    model: String,
    settings: GenerationSettings,
    timeout: Duration,
    policy: StatusPolicy,
}

impl HostedModel {
    pub fn with_status_policy(mut self, policy: StatusPolicy) -> Self {
        self.policy = policy;
        self
    }
}

#[async_trait]
impl InferenceBackend for HostedModel {
    fn model(&self) -> &str {
        &self.model
    }

    async fn infer(&self, inputs: &str) -> Result<Value> {
        let request = GenerationRequest::new(inputs, &self.settings);
        self.client
            .generate(&self.model, &request, self.timeout, self.policy)
            .await
    }
}
