pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::toml_config::TomlConfig;
pub use core::client::{ProvisioningClient, DEFAULT_API_BASE};
pub use domain::model::{ProvisioningRequest, ProvisioningResult};
pub use domain::ports::{ConfigProvider, DomainProvisioner};
pub use utils::error::{ProvisioningError, Result};
pub use utils::secret::Token;
