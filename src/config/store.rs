//! Remote booking store configuration

use secrecy::SecretString;
use serde::Deserialize;

use super::error::ValidationError;

/// Remote booking service. Optional section.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Base URL of the booking service
    pub url: String,

    /// Bearer key for the service
    pub service_key: Option<SecretString>,
}

impl StoreConfig {
    pub fn validate(&self, production: bool) -> Result<(), ValidationError> {
        if self.url.trim().is_empty() {
            return Err(ValidationError::MissingRequired("STORE__URL"));
        }
        if !self.url.starts_with("http://") && !self.url.starts_with("https://") {
            return Err(ValidationError::InvalidStoreUrl);
        }
        if production && !self.url.starts_with("https://") {
            return Err(ValidationError::StoreUrlMustBeHttps);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> StoreConfig {
        StoreConfig {
            url: url.to_string(),
            service_key: None,
        }
    }

    #[test]
    fn test_valid_urls() {
        assert!(config("http://localhost:4000").validate(false).is_ok());
        assert!(config("https://bookings.example.com").validate(true).is_ok());
    }

    #[test]
    fn test_invalid_urls() {
        assert_eq!(config("").validate(false), Err(ValidationError::MissingRequired("STORE__URL")));
        assert_eq!(config("ftp://x").validate(false), Err(ValidationError::InvalidStoreUrl));
        assert_eq!(
            config("http://bookings.example.com").validate(true),
            Err(ValidationError::StoreUrlMustBeHttps)
        );
    }
}
