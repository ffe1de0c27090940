use crate::core::client::DEFAULT_API_BASE;
use crate::core::ConfigProvider;
use crate::utils::error::{ProvisioningError, Result};
use crate::utils::secret::Token;
use crate::utils::validation::{
    reject_unresolved_placeholder, validate_non_empty_string, validate_url, Validate,
};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub api: ApiConfig,
    pub project: Option<ProjectConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiConfig {
    pub base_url: Option<String>,
    pub token: Option<Token>,
    pub team_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
    pub id: String,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| ProvisioningError::config(format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| ProvisioningError::config(format!("invalid placeholder pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    pub fn project_id(&self) -> Option<&str> {
        self.project.as_ref().map(|p| p.id.as_str())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.api.base_url {
            reject_unresolved_placeholder("api.base_url", base_url, base_url)?;
            validate_url("api.base_url", base_url)?;
        }

        if let Some(token) = &self.api.token {
            reject_unresolved_placeholder("api.token", token.expose(), "[REDACTED]")?;
        }

        if let Some(team_id) = &self.api.team_id {
            reject_unresolved_placeholder("api.team_id", team_id, team_id)?;
        }

        if let Some(project) = &self.project {
            validate_non_empty_string("project.id", &project.id)?;
            reject_unresolved_placeholder("project.id", &project.id, &project.id)?;
        }

        Ok(())
    }
}

impl ConfigProvider for TomlConfig {
    fn api_base(&self) -> &str {
        self.api.base_url.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    fn token(&self) -> Option<Token> {
        self.api.token.clone()
    }

    fn team_id(&self) -> Option<&str> {
        self.api.team_id.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
base_url = "http://localhost:9000"
token = "tok"
team_id = "team_123"

[project]
id = "prj1"
"#,
        )
        .unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_base(), "http://localhost:9000");
        assert_eq!(config.team_id(), Some("team_123"));
        assert_eq!(config.project_id(), Some("prj1"));
        assert_eq!(config.token().unwrap().expose(), "tok");
        assert!(!format!("{:?}", config).contains("\"tok\""));
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = TomlConfig::from_toml_str("").unwrap();

        assert!(config.validate().is_ok());
        assert_eq!(config.api_base(), DEFAULT_API_BASE);
        assert!(config.token().is_none());
        assert_eq!(config.project_id(), None);
    }

    #[test]
    fn test_unresolved_token_placeholder_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[api]
token = "${DOMAIN_PROVISIONER_TEST_SURELY_UNSET_VAR}"
"#,
        )
        .unwrap();

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("api.token"));
        assert!(err.to_string().contains("[REDACTED]"));
    }

    #[test]
    fn test_invalid_toml() {
        let err = TomlConfig::from_toml_str("[api\nbase_url = ").unwrap_err();
        assert!(matches!(err, ProvisioningError::ConfigError { .. }));
    }
}
