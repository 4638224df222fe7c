use super::Config;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Load configuration from file or return defaults, then resolve the API key
pub fn load_config(path: Option<&Path>) -> Result<Config> {
    let config_path = path
        .map(Path::to_path_buf)
        .unwrap_or_else(default_config_path);

    let mut config = if config_path.exists() {
        let contents = std::fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::debug!("Loaded config from {}", config_path.display());
        config
    } else {
        // Create default config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        Config::default()
    };

    // A missing key is not an error here; the client reports it on first use
    config.llm.api_key = std::env::var(config.llm.api_key_env())
        .ok()
        .filter(|key| !key.trim().is_empty());

    Ok(config)
}

/// Get the path to the config file
pub fn default_config_path() -> PathBuf {
    directories::ProjectDirs::from("", "", "cookiefinder")
        .map(|dirs| dirs.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("~/.config/cookiefinder/config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.model(), "gpt-4o");
        assert_eq!(config.llm.api_key_env(), "OPENAI_API_KEY");
        assert_eq!(config.llm.temperature, 0.0);
        assert_eq!(config.ui.table_height, 20);
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_load_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[llm]\nmodel = \"gpt-4o-mini\"\napi_key_env = \"COOKIEFINDER_TEST_KEY_PARTIAL\"\n\n[ui]\ntheme = \"dark\""
        )
        .unwrap();

        std::env::set_var("COOKIEFINDER_TEST_KEY_PARTIAL", "sk-test");
        let config = load_config(Some(file.path())).unwrap();
        std::env::remove_var("COOKIEFINDER_TEST_KEY_PARTIAL");

        assert_eq!(config.llm.model(), "gpt-4o-mini");
        assert_eq!(config.llm.provider, "openai");
        assert_eq!(config.llm.base_url(), "https://api.openai.com/v1");
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.ui.table_height, 20);
        assert_eq!(config.llm.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_missing_file_and_key_is_not_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.llm.model(), "gpt-4o");
        assert!(path.parent().unwrap().exists());
    }

    #[test]
    fn test_unset_key_env_resolves_to_none() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[llm]\napi_key_env = \"COOKIEFINDER_TEST_KEY_UNSET\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert!(config.llm.api_key.is_none());
    }

    #[test]
    fn test_provider_switch_uses_provider_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[llm]\nprovider = \"anthropic\"").unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.llm.api_key_env(), "ANTHROPIC_API_KEY");
        assert_eq!(config.llm.model(), "claude-sonnet-4-5-20250929");
        assert_eq!(config.llm.base_url(), "https://api.anthropic.com/v1");
    }

    #[test]
    fn test_explicit_values_override_provider_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[llm]\nprovider = \"anthropic\"\nmodel = \"claude-haiku-4-5\"\napi_key_env = \"MY_KEY\""
        )
        .unwrap();

        let config = load_config(Some(file.path())).unwrap();
        assert_eq!(config.llm.model(), "claude-haiku-4-5");
        assert_eq!(config.llm.api_key_env(), "MY_KEY");
        assert_eq!(config.llm.base_url(), "https://api.anthropic.com/v1");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[llm\nmodel = ").unwrap();
        assert!(load_config(Some(file.path())).is_err());
    }
}
