//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;

/// Authentication configuration (JWT verification)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HS256 signing secret shared with the account service
    pub jwt_secret: SecretString,
}

impl AuthConfig {
    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("AUTH_JWT_SECRET"));
        }
        if self.jwt_secret.expose_secret().len() < 32 {
            return Err(ValidationError::JwtSecretTooShort);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_secret_passes() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("0123456789abcdef0123456789abcdef".to_string()),
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn short_secret_fails() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("too-short".to_string()),
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::JwtSecretTooShort)
        ));
    }

    #[test]
    fn debug_does_not_leak_secret() {
        let config = AuthConfig {
            jwt_secret: SecretString::new("0123456789abcdef0123456789abcdef".to_string()),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("0123456789abcdef"));
    }
}
