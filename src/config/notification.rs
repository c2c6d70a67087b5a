//! Notification configuration

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Where booking notifications go.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMode {
    /// Render emails into the log
    #[default]
    Log,
    /// POST signed JSON to `webhook_url`
    Webhook,
    Disabled,
}

/// Notification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(default)]
    pub mode: NotificationMode,

    /// Target for webhook mode
    pub webhook_url: Option<String>,

    /// HMAC key for the signature header
    pub signing_secret: Option<SecretString>,

    /// Webhook timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Inbox receiving new-booking alerts
    #[serde(default = "default_team_email")]
    pub team_email: String,

    #[serde(default = "default_from_email")]
    pub from_email: String,

    #[serde(default = "default_from_name")]
    pub from_name: String,
}

impl NotificationConfig {
    /// Get formatted "From" header value
    pub fn from_header(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.from_email.contains('@') {
            return Err(ValidationError::InvalidFromEmail);
        }
        match self.mode {
            NotificationMode::Log => {
                if !self.team_email.contains('@') {
                    return Err(ValidationError::InvalidTeamEmail);
                }
            }
            NotificationMode::Webhook => {
                let url = self
                    .webhook_url
                    .as_deref()
                    .ok_or(ValidationError::MissingRequired("NOTIFICATION__WEBHOOK_URL"))?;
                if !url.starts_with("http://") && !url.starts_with("https://") {
                    return Err(ValidationError::InvalidWebhookUrl);
                }
                if self.timeout_secs == 0 || self.timeout_secs > 60 {
                    return Err(ValidationError::InvalidNotificationTimeout);
                }
            }
            NotificationMode::Disabled => {}
        }
        Ok(())
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            mode: NotificationMode::default(),
            webhook_url: None,
            signing_secret: None,
            timeout_secs: default_timeout(),
            team_email: default_team_email(),
            from_email: default_from_email(),
            from_name: default_from_name(),
        }
    }
}

fn default_timeout() -> u64 {
    5
}

fn default_team_email() -> String {
    "team@consultancy.example".to_string()
}

fn default_from_email() -> String {
    "bookings@consultancy.example".to_string()
}

fn default_from_name() -> String {
    "Consultancy Bookings".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_log_to_team_inbox() {
        let config = NotificationConfig::default();
        assert_eq!(config.mode, NotificationMode::Log);
        assert_eq!(config.from_header(), "Consultancy Bookings <bookings@consultancy.example>");
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_webhook_mode_requires_url() {
        let mut config = NotificationConfig {
            mode: NotificationMode::Webhook,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("NOTIFICATION__WEBHOOK_URL"))
        );

        config.webhook_url = Some("hooks.example.com".to_string());
        assert_eq!(config.validate(), Err(ValidationError::InvalidWebhookUrl));

        config.webhook_url = Some("https://hooks.example.com/bookings".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_log_mode_requires_team_email() {
        let config = NotificationConfig {
            team_email: "nobody".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::InvalidTeamEmail));

        let disabled = NotificationConfig {
            mode: NotificationMode::Disabled,
            team_email: String::new(),
            ..Default::default()
        };
        assert!(disabled.validate().is_ok());
    }
}
