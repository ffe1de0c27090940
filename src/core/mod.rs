pub mod client;

pub use crate::domain::model::{AddDomainBody, ProvisioningRequest, ProvisioningResult};
pub use crate::domain::ports::{ConfigProvider, DomainProvisioner};
pub use crate::utils::error::Result;
