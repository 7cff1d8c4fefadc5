use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::timeout_duration_secs;
use crate::enums::ai_provider_error::AiProviderError;
use crate::errors::{ReviewError, ReviewResult};
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
    model: String,
    max_output_tokens: u32,
    temperature: f64,
}

impl GeminiProvider {
    pub fn new(api_key: String, config: &AiConfig) -> ReviewResult<Self> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(config.timeout_secs))
            .build()
            .map_err(|e| ReviewError::config_error(&format!("Failed to build HTTP client: {}", e), None))?;

        Ok(Self {
            api_key,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            model: config.model.clone(),
            max_output_tokens: config.max_output_tokens,
            temperature: config.temperature,
        })
    }

    /// Builds the provider when an API key was resolved, `None` otherwise.
    pub fn from_config(config: &AiConfig) -> ReviewResult<Option<Self>> {
        match config.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Self::new(key.to_string(), config).map(Some),
            _ => Ok(None),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn get_request(&self, prompt: String) -> GeminiRequest {
        GeminiRequest {
            contents: vec![GeminiContent::user(prompt)],
            generation_config: Some(GeminiGenerationConfig {
                temperature: Some(self.temperature),
                top_p: Some(0.95),
                max_output_tokens: Some(self.max_output_tokens),
                candidate_count: Some(1),
            }),
        }
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(&self, prompt: String) -> Result<String, AiProviderError> {
        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("Content-Type", "application/json")
            .json(&self.get_request(prompt))
            .send()
            .await
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            return Err(match status.as_u16() {
                400 => AiProviderError::ApiError(format!("Bad request: {}", error_text)),
                401 | 403 => AiProviderError::AuthenticationError(error_text),
                429 => AiProviderError::ApiError(format!("Rate limit exceeded: {}", error_text)),
                _ => AiProviderError::ApiError(format!("HTTP {}: {}", status, error_text)),
            });
        }

        let json: serde_json::Value = response.json().await?;

        let text = json
            .get("candidates")
            .and_then(|candidates| candidates.as_array())
            .and_then(|candidates| candidates.first())
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
            .map(|parts| {
                parts
                    .iter()
                    .filter_map(|part| part.get("text").and_then(|text| text.as_str()))
                    .collect::<String>()
            })
            .filter(|text| !text.is_empty())
            .ok_or_else(|| AiProviderError::SerializationError("No content in response".to_string()))?;

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
