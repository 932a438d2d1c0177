use crate::config::GenerationSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub inputs: String,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationParameters {
    pub max_new_tokens: u32,
    pub temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    pub do_sample: bool,
}

impl GenerationRequest {
    pub fn new(inputs: impl Into<String>, settings: &GenerationSettings) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: GenerationParameters::from(settings),
        }
    }
}

impl From<&GenerationSettings> for GenerationParameters {
    fn from(settings: &GenerationSettings) -> Self {
        Self {
            max_new_tokens: settings.max_new_tokens,
            temperature: settings.temperature,
            top_p: settings.top_p,
            do_sample: settings.do_sample,
        }
    }
}

/// Pulls the generated text out of the payload shapes the inference API
/// is known to return:
///
/// - `[{"generated_text": ".."}]` or `[{"text": ".."}]`
/// - `{"generated_text": ".."}`
///
/// Empty strings count as no answer.
pub fn extract_generated_text(payload: &Value) -> Option<String> {
    extract(payload, &["generated_text", "text"])
}

/// Like [`extract_generated_text`] but only accepts the `generated_text`
/// field. A `[{"text": ".."}]` payload is unrecognized.
pub fn extract_generated_text_strict(payload: &Value) -> Option<String> {
    extract(payload, &["generated_text"])
}

fn extract(payload: &Value, list_fields: &[&str]) -> Option<String> {
    let text = match payload {
        Value::Array(items) => {
            let first = items.first()?.as_object()?;
            list_fields
                .iter()
                .find_map(|field| first.get(*field))?
                .as_str()
        }
        Value::Object(map) => map.get("generated_text")?.as_str(),
        _ => None,
    }?;

    if text.trim().is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}
