pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::core::client::DEFAULT_API_BASE;
    use crate::core::{ConfigProvider, ProvisioningRequest};
    use crate::utils::error::Result;
    use crate::utils::secret::Token;
    use crate::utils::validation::{reject_unresolved_placeholder, validate_url, Validate};
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "provision-domain")]
    #[command(about = "Attach a custom domain to a hosting platform project")]
    pub struct CliConfig {
        /// Domain name to attach
        #[arg(long)]
        pub domain: String,

        /// Target project id (falls back to [project] id in the config file)
        #[arg(long)]
        pub project_id: Option<String>,

        #[arg(long, env = "DOMAIN_API_TOKEN", hide_env_values = true)]
        pub token: Option<Token>,

        #[arg(long, env = "DOMAIN_API_TEAM_ID")]
        pub team_id: Option<String>,

        #[arg(long, env = "DOMAIN_API_BASE")]
        pub api_base: Option<String>,

        /// Path to TOML configuration file
        #[arg(short, long)]
        pub config: Option<PathBuf>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub json_logs: bool,

        /// Print the target URL without sending anything
        #[arg(long)]
        pub dry_run: bool,
    }

    impl CliConfig {
        /// Fills every value not given on the command line from the file.
        pub fn merge_file(mut self, file: TomlConfig) -> Self {
            if self.project_id.is_none() {
                self.project_id = file.project_id().map(str::to_string);
            }
            if self.token.is_none() {
                self.token = file.api.token;
            }
            if self.team_id.is_none() {
                self.team_id = file.api.team_id;
            }
            if self.api_base.is_none() {
                self.api_base = file.api.base_url;
            }
            self
        }

        pub fn to_request(&self) -> Result<ProvisioningRequest> {
            let request = ProvisioningRequest::new(
                self.project_id.clone().unwrap_or_default(),
                self.domain.clone(),
                self.token.clone().unwrap_or_else(|| Token::new("")),
            )?;

            Ok(match &self.team_id {
                Some(team_id) => request.with_team_id(team_id.clone()),
                None => request,
            })
        }
    }

    /// Checks the merged values, so a flag or env value that overrides a
    /// file placeholder is what gets validated.
    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            if let Some(api_base) = &self.api_base {
                reject_unresolved_placeholder("api_base", api_base, api_base)?;
                validate_url("api_base", api_base)?;
            }
            if let Some(token) = &self.token {
                reject_unresolved_placeholder("token", token.expose(), "[REDACTED]")?;
            }
            if let Some(team_id) = &self.team_id {
                reject_unresolved_placeholder("team_id", team_id, team_id)?;
            }
            if let Some(project_id) = &self.project_id {
                reject_unresolved_placeholder("project_id", project_id, project_id)?;
            }
            Ok(())
        }
    }

    impl ConfigProvider for CliConfig {
        fn api_base(&self) -> &str {
            self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
        }

        fn token(&self) -> Option<Token> {
            self.token.clone()
        }

        fn team_id(&self) -> Option<&str> {
            self.team_id.as_deref()
        }
    }

}
