use crate::utils::error::{ProvisioningError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<Url> {
    if url_str.trim().is_empty() {
        return Err(ProvisioningError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(ProvisioningError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(ProvisioningError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ProvisioningError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// Rejects values still carrying a `${VAR}` placeholder after env substitution.
///
/// `shown` is what goes into the error, so callers can pass a mask for secrets.
pub fn reject_unresolved_placeholder(field_name: &str, value: &str, shown: &str) -> Result<()> {
    if value.contains("${") {
        return Err(ProvisioningError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: shown.to_string(),
            reason: "unresolved environment variable placeholder".to_string(),
        });
    }
    Ok(())
}

/// Fails with a `ValidationError` listing every field whose value is blank.
///
/// Only field names end up in the message, so secrets can be checked here too.
pub fn require_fields(fields: &[(&str, &str)]) -> Result<()> {
    let missing: Vec<&str> = fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| *name)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ProvisioningError::validation(format!(
            "missing required field(s): {}",
            missing.join(", ")
        )))
    }
}
