use crate::core::{ConfigProvider, DomainProvisioner, ProvisioningRequest, ProvisioningResult};
use crate::utils::error::{ProvisioningError, Result};
use crate::utils::validation::validate_url;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.vercel.com";

/// REST client for the hosting platform's project domains endpoint.
///
/// Cloning is cheap and clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ProvisioningClient {
    client: Client,
    api_base: Url,
}

impl ProvisioningClient {
    pub fn new() -> Result<Self> {
        Self::with_api_base(DEFAULT_API_BASE)
    }

    pub fn with_api_base(api_base: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            api_base: validate_url("api_base", api_base)?,
        })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_api_base(config.api_base())
    }

    pub fn api_base(&self) -> &Url {
        &self.api_base
    }

    /// `<base>/v9/projects/{projectId}/domains`, with `teamId` only when set.
    pub fn project_domains_url(&self, request: &ProvisioningRequest) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.set_query(None);
        url.set_fragment(None);

        url.path_segments_mut()
            .map_err(|_| ProvisioningError::config("API base URL cannot carry a path"))?
            .pop_if_empty()
            .extend(["v9", "projects", request.project_id(), "domains"]);

        if let Some(team_id) = request.team_id() {
            url.query_pairs_mut().append_pair("teamId", team_id);
        }

        Ok(url)
    }

    pub async fn add_project_domain(
        &self,
        request: ProvisioningRequest,
    ) -> Result<ProvisioningResult> {
        let url = self.project_domains_url(&request)?;

        tracing::debug!(
            "POST {} (project: {}, domain: {})",
            url,
            request.project_id(),
            request.domain()
        );

        let response = self
            .client
            .post(url)
            .bearer_auth(request.token().expose())
            .header(CONTENT_TYPE, "application/json")
            .json(&request.body())
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Domain API response status: {}", status);

        if !status.is_success() {
            let body = response.text().await?;
            return Err(ProvisioningError::ApiError {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        let result: ProvisioningResult = serde_json::from_str(&body)?;
        Ok(result)
    }
}

#[async_trait::async_trait]
impl DomainProvisioner for ProvisioningClient {
    async fn add_project_domain(&self, request: ProvisioningRequest) -> Result<ProvisioningResult> {
        ProvisioningClient::add_project_domain(self, request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(team_id: Option<&str>) -> ProvisioningRequest {
        let request = ProvisioningRequest::new("prj1", "example.com", "tok").unwrap();
        match team_id {
            Some(team) => request.with_team_id(team),
            None => request,
        }
    }

    #[test]
    fn test_url_without_team_has_no_query() {
        let client = ProvisioningClient::new().unwrap();
        let url = client.project_domains_url(&request(None)).unwrap();

        assert_eq!(url.as_str(), "https://api.vercel.com/v9/projects/prj1/domains");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_url_with_team() {
        let client = ProvisioningClient::new().unwrap();
        let url = client.project_domains_url(&request(Some("team_123"))).unwrap();

        assert_eq!(url.path(), "/v9/projects/prj1/domains");
        assert_eq!(url.query(), Some("teamId=team_123"));
    }

    #[test]
    fn test_url_keeps_base_path_prefix() {
        let client = ProvisioningClient::with_api_base("http://localhost:8080/proxy/").unwrap();
        let url = client.project_domains_url(&request(None)).unwrap();

        assert_eq!(url.as_str(), "http://localhost:8080/proxy/v9/projects/prj1/domains");
    }

    #[test]
    fn test_url_encodes_project_id() {
        let client = ProvisioningClient::new().unwrap();
        let request = ProvisioningRequest::new("prj/1 x", "example.com", "tok").unwrap();
        let url = client.project_domains_url(&request).unwrap();

        assert_eq!(url.path(), "/v9/projects/prj%2F1%20x/domains");
    }

    #[test]
    fn test_rejects_bad_api_base() {
        assert!(ProvisioningClient::with_api_base("not a url").is_err());
        assert!(ProvisioningClient::with_api_base("ftp://example.com").is_err());
    }
}
