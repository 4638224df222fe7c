use crate::config::Config;
use crate::CookieFinderError;

use super::providers::anthropic::AnthropicClient;
use super::providers::openai::OpenAiClient;

/// Trait for LLM clients
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait LlmClient: Send + Sync {
    /// Send one prompt and wait for the full text reply. Single attempt, no retry.
    async fn complete(&self, prompt: &str) -> Result<String, CookieFinderError>;
}

/// Create an LLM client based on configuration
pub fn create_client(config: &Config) -> Result<Box<dyn LlmClient>, CookieFinderError> {
    let llm = &config.llm;
    match llm.provider.as_str() {
        "openai" => Ok(Box::new(OpenAiClient::new(
            llm.api_key.clone(),
            llm.api_key_env().to_string(),
            llm.base_url().to_string(),
            llm.model().to_string(),
            llm.temperature,
            llm.max_tokens,
        ))),
        "anthropic" => Ok(Box::new(AnthropicClient::new(
            llm.api_key.clone(),
            llm.api_key_env().to_string(),
            llm.base_url().to_string(),
            llm.model().to_string(),
            llm.temperature,
            llm.max_tokens,
        ))),
        provider => Err(CookieFinderError::Config(format!(
            "Unsupported LLM provider: {}",
            provider
        ))),
    }
}

/// Error returned on the first call made without a credential
pub(crate) fn missing_api_key(api_key_env: &str) -> CookieFinderError {
    CookieFinderError::Config(format!(
        "API key not found in environment variable: {}",
        api_key_env
    ))
}

// Re-export async_trait for providers
pub use async_trait::async_trait;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_known_providers() {
        let mut config = Config::default();
        assert!(create_client(&config).is_ok());

        config.llm.provider = "anthropic".to_string();
        assert!(create_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_anthropic_provider_asks_for_its_own_key() {
        let mut config = Config::default();
        config.llm.provider = "anthropic".to_string();
        let client = create_client(&config).unwrap();

        let err = client.complete("prompt").await.unwrap_err();
        assert!(err.to_string().contains("ANTHROPIC_API_KEY"));
    }

    #[test]
    fn test_create_client_unknown_provider() {
        let mut config = Config::default();
        config.llm.provider = "mystery".to_string();

        match create_client(&config) {
            Err(CookieFinderError::Config(msg)) => assert!(msg.contains("mystery")),
            _ => panic!("expected a configuration error"),
        }
    }

    #[tokio::test]
    async fn test_missing_key_surfaces_on_first_call() {
        let config = Config::default();
        let client = create_client(&config).unwrap();

        let err = client.complete("prompt").await.unwrap_err();
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    }
}
