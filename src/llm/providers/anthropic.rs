use crate::llm::client::{async_trait, missing_api_key, LlmClient};
use crate::CookieFinderError;
use serde::{Deserialize, Serialize};

use super::check_status;

pub struct AnthropicClient {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl AnthropicClient {
    pub fn new(
        api_key: Option<String>,
        api_key_env: String,
        base_url: String,
        model: String,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            api_key,
            api_key_env,
            base_url: base_url.trim_end_matches('/').to_string(),
            model,
            temperature,
            max_tokens,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/messages", self.base_url)
    }
}

#[derive(Serialize)]
struct AnthropicRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct AnthropicResponse {
    content: Vec<ContentBlock>,
}

#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[async_trait]
impl LlmClient for AnthropicClient {
    async fn complete(&self, prompt: &str) -> Result<String, CookieFinderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| missing_api_key(&self.api_key_env))?;

        let request = AnthropicRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending messages request");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let api_response: AnthropicResponse = check_status(response).await?.json().await?;

        api_response
            .content
            .first()
            .map(|c| c.text.clone())
            .ok_or_else(|| CookieFinderError::Llm("Empty response from API".to_string()))
    }
}
