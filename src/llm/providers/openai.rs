use crate::llm::client::{async_trait, missing_api_key, LlmClient};
use crate::CookieFinderError;
use serde::{Deserialize, Serialize};

use super::check_status;

/// Client for OpenAI-compatible chat completion endpoints
pub struct OpenAiClient {
    api_key: Option<String>,
    api_key_env: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
    client: reqwest::Client,
}

impl OpenAiClient {
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
        format!("{}/chat/completions", self.base_url)
    }
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Pull the first choice's text out of a chat completion response
fn extract_text(response: ChatResponse) -> Result<String, CookieFinderError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| CookieFinderError::Llm("Empty response from API".to_string()))
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String, CookieFinderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| missing_api_key(&self.api_key_env))?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
            stream: false,
        };

        tracing::debug!(
            model = %self.model,
            prompt_len = prompt.len(),
            "Sending chat completion request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await?;

        let api_response: ChatResponse = check_status(response).await?.json().await?;
        extract_text(api_response)
    }
}
