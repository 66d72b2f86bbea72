use super::{messages_to_prompt, ChatMessage, LanguageModel, LlmError};
use serde::Deserialize;
use serde_json::json;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct OllamaClient {
    endpoint: String,
    model: String,
    timeout: Duration,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: String,
}

impl OllamaClient {
    pub fn new(endpoint: String, model: String, timeout: Duration) -> Self {
        Self {
            endpoint,
            model,
            timeout,
        }
    }
}

impl LanguageModel for OllamaClient {
    fn complete(&self, messages: &[ChatMessage]) -> Result<String, LlmError> {
        let prompt = messages_to_prompt(messages);
        let response = ureq::post(&self.endpoint)
            .timeout(self.timeout)
            .send_json(json!({
                "model": self.model,
                "prompt": prompt,
                "stream": false,
            }))
            .map_err(|err| LlmError::Request {
                endpoint: self.endpoint.clone(),
                reason: err.to_string(),
            })?;

        let body: GenerateResponse = response.into_json().map_err(|err| LlmError::Decode {
            reason: err.to_string(),
        })?;
        Ok(body.response.trim().to_string())
    }
}
