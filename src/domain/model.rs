use crate::utils::error::Result;
use crate::utils::secret::Token;
use crate::utils::validation::require_fields;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One "attach this domain to that project" call.
///
/// Construction rejects blank `project_id`, `domain` or `token`, so a value of
/// this type is always ready to be sent.
#[derive(Debug, Clone)]
pub struct ProvisioningRequest {
    project_id: String,
    team_id: Option<String>,
    domain: String,
    token: Token,
}

impl ProvisioningRequest {
    pub fn new(
        project_id: impl Into<String>,
        domain: impl Into<String>,
        token: impl Into<Token>,
    ) -> Result<Self> {
        let project_id = project_id.into();
        let domain = domain.into();
        let token = token.into();

        require_fields(&[
            ("projectId", &project_id),
            ("domain", &domain),
            ("token", token.expose()),
        ])?;

        Ok(Self {
            project_id,
            team_id: None,
            domain,
            token,
        })
    }

    /// Scopes the request to a team. Blank ids leave the request unscoped.
    pub fn with_team_id(mut self, team_id: impl Into<String>) -> Self {
        let team_id = team_id.into();
        self.team_id = if team_id.trim().is_empty() {
            None
        } else {
            Some(team_id)
        };
        self
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn token(&self) -> &Token {
        &self.token
    }

    pub fn body(&self) -> AddDomainBody<'_> {
        AddDomainBody { name: &self.domain }
    }
}

/// Request body for the add-domain endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct AddDomainBody<'a> {
    pub name: &'a str,
}

/// Domain record returned by the platform, kept as an open JSON object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProvisioningResult(Map<String, Value>);

impl ProvisioningResult {
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for ProvisioningResult {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl PartialEq<Value> for ProvisioningResult {
    fn eq(&self, other: &Value) -> bool {
        other.as_object() == Some(&self.0)
    }
}
