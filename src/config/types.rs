use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub inference: InferenceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default)]
    pub logs: LogsConfig,
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogsConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// Which answering backend serves `/api/ask`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceVariant {
    #[default]
    Primary,
    Fallback,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    #[serde(default)]
    pub variant: ServiceVariant,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub primary: PrimaryModelConfig,
    #[serde(default)]
    pub fallback: FallbackModelsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PrimaryModelConfig {
    pub model: String,
    pub timeout_secs: u64,
    pub generation: GenerationSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FallbackModelsConfig {
    pub models: Vec<String>,
    pub timeout_secs: u64,
    pub generation: GenerationSettings,
}

/// Sampling parameters sent with every generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSettings {
    pub max_new_tokens: u32,
    pub temperature: f32,
    #[serde(default)]
    pub top_p: Option<f32>,
    pub do_sample: bool,
}

impl InferenceConfig {
    /// Returns the API token, treating a blank value as absent.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

impl FromStr for ServiceVariant {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Self::Primary),
            "fallback" => Ok(Self::Fallback),
            other => Err(crate::Error::config(format!(
                "Unknown service variant: '{}'. Valid variants: primary, fallback",
                other
            ))),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            logs: LogsConfig::default(),
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            variant: ServiceVariant::default(),
            base_url: default_base_url(),
            api_key: None,
            primary: PrimaryModelConfig::default(),
            fallback: FallbackModelsConfig::default(),
        }
    }
}

impl Default for PrimaryModelConfig {
    fn default() -> Self {
        Self {
            model: "Enfysyz/JurisPrae".to_string(),
            timeout_secs: 30,
            generation: GenerationSettings {
                max_new_tokens: 512,
                temperature: 0.7,
                top_p: Some(0.9),
                do_sample: true,
            },
        }
    }
}

impl Default for FallbackModelsConfig {
    fn default() -> Self {
        Self {
            models: vec!["microsoft/DialoGPT-medium".to_string(), "gpt2".to_string()],
            timeout_secs: 10,
            generation: GenerationSettings {
                max_new_tokens: 200,
                temperature: 0.7,
                top_p: None,
                do_sample: true,
            },
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_allowed_origins() -> Vec<String> {
    vec![
        "http://localhost:3000".to_string(),
        "https://your-frontend-domain.com".to_string(),
    ]
}

fn default_base_url() -> String {
    "https://api-inference.huggingface.co/models".to_string()
}
