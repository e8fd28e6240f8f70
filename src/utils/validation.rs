use crate::utils::error::{CatalogError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(CatalogError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Collection names become a URL path segment, so slashes and Firebase's
/// reserved key characters are rejected.
pub fn validate_collection(field_name: &str, collection: &str) -> Result<()> {
    validate_non_empty_string(field_name, collection)?;

    if let Some(bad) = collection
        .chars()
        .find(|c| matches!(c, '.' | '$' | '#' | '[' | ']' | '/'))
    {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: collection.to_string(),
            reason: format!("Character '{}' is not allowed in a collection name", bad),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| CatalogError::MissingConfigError {
        field: field_name.to_string(),
    })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CatalogError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_skill_names(field_name: &str, names: &[String]) -> Result<()> {
    for name in names {
        validate_non_empty_string(field_name, name)?;
    }
    Ok(())
}
