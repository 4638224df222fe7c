mod loader;

pub use loader::{default_config_path, load_config};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Built-in endpoint settings for a provider
struct ProviderDefaults {
    api_key_env: &'static str,
    model: &'static str,
    base_url: &'static str,
}

fn provider_defaults(provider: &str) -> ProviderDefaults {
    match provider {
        "anthropic" => ProviderDefaults {
            api_key_env: "ANTHROPIC_API_KEY",
            model: "claude-sonnet-4-5-20250929",
            base_url: "https://api.anthropic.com/v1",
        },
        _ => ProviderDefaults {
            api_key_env: "OPENAI_API_KEY",
            model: "gpt-4o",
            base_url: "https://api.openai.com/v1",
        },
    }
}

/// LLM settings. `api_key_env`, `model` and `base_url` fall back to the
/// defaults of the selected `provider` when left out of the file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key_env: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(default)]
    pub temperature: f32,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Resolved from the key variable at load time, never read from the file.
    #[serde(skip)]
    pub api_key: Option<String>,
}

fn default_provider() -> String {
    "openai".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl LlmConfig {
    pub fn api_key_env(&self) -> &str {
        self.api_key_env
            .as_deref()
            .unwrap_or(provider_defaults(&self.provider).api_key_env)
    }

    pub fn model(&self) -> &str {
        self.model
            .as_deref()
            .unwrap_or(provider_defaults(&self.provider).model)
    }

    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .unwrap_or(provider_defaults(&self.provider).base_url)
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            api_key_env: None,
            model: None,
            base_url: None,
            temperature: 0.0,
            max_tokens: default_max_tokens(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Most table lines shown at once; smaller terminals show fewer and scroll
    #[serde(default = "default_table_height")]
    pub table_height: u16,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_table_height() -> u16 {
    20
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            table_height: default_table_height(),
        }
    }
}
