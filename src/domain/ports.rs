use crate::domain::model::{ProvisioningRequest, ProvisioningResult};
use crate::utils::error::Result;
use crate::utils::secret::Token;
use async_trait::async_trait;

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn token(&self) -> Option<Token>;
    fn team_id(&self) -> Option<&str>;
}

/// Attaches custom domains to hosting projects.
///
/// Each call is a single attempt; implementations keep no state between calls.
#[async_trait]
pub trait DomainProvisioner: Send + Sync {
    async fn add_project_domain(&self, request: ProvisioningRequest) -> Result<ProvisioningResult>;
}
