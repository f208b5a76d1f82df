//! Blob storage configuration

use serde::Deserialize;

use super::error::ValidationError;

/// Blob storage configuration (filesystem-backed)
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Root directory for stored objects
    #[serde(default = "default_root")]
    pub root: String,

    /// Public base URL under which objects are served
    pub base_url: String,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.base_url.is_empty() {
            return Err(ValidationError::MissingRequired("STORAGE_BASE_URL"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidStorageBaseUrl);
        }
        Ok(())
    }
}

fn default_root() -> String {
    "./data/blobs".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn https_base_url_passes() {
        let config = StorageConfig {
            root: default_root(),
            base_url: "https://files.example.com".to_string(),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn relative_base_url_fails() {
        let config = StorageConfig {
            root: default_root(),
            base_url: "/files".to_string(),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidStorageBaseUrl)
        ));
    }
}
