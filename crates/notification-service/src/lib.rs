mod smtp;
mod templates;

pub use smtp::SmtpNotifier;
pub use templates::EmailTemplate;

use async_trait::async_trait;
use signal_core::Notifier;

/// Errors from the notification system.
#[derive(Debug, thiserror::Error)]
pub enum NotificationError {
    #[error("SMTP error: {0}")]
    Smtp(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Configuration for the notification service.
#[derive(Debug, Clone)]
pub struct NotificationConfig {
    pub smtp_host: Option<String>,
    pub smtp_port: u16,
    pub smtp_username: Option<String>,
    pub smtp_password: Option<String>,
    pub smtp_from: Option<String>,
    pub smtp_to: Vec<String>,
    pub smtp_tls: SmtpTls,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SmtpTls {
    #[default]
    StartTls,
    Tls,
    None,
}

impl SmtpTls {
    pub fn parse(value: &str) -> Self {
        match value {
            "tls" => SmtpTls::Tls,
            "none" => SmtpTls::None,
            _ => SmtpTls::StartTls,
        }
    }
}

impl NotificationConfig {
    /// Load from environment variables. Missing variables leave the
    /// channel unconfigured rather than failing.
    pub fn from_env() -> Self {
        let smtp_to = std::env::var("EMAIL_TO")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self {
            smtp_host: std::env::var("SMTP_HOST").ok().filter(|s| !s.is_empty()),
            smtp_port: std::env::var("SMTP_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(587),
            smtp_username: std::env::var("SMTP_USERNAME")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_password: std::env::var("SMTP_PASSWORD")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_from: std::env::var("SMTP_FROM_ADDRESS")
                .ok()
                .filter(|s| !s.is_empty()),
            smtp_to,
            smtp_tls: SmtpTls::parse(&std::env::var("SMTP_TLS").unwrap_or_default()),
        }
    }

    fn smtp_complete(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_from.is_some() && !self.smtp_to.is_empty()
    }
}

/// The main notification service. Holds the SMTP channel when configured;
/// without one, every send resolves to a logged "not sent" outcome.
pub struct NotificationService {
    channel: Option<SmtpNotifier>,
}

impl NotificationService {
    pub fn new(config: &NotificationConfig) -> Self {
        let channel = if config.smtp_complete() {
            match SmtpNotifier::new(config) {
                Ok(notifier) => {
                    tracing::info!(
                        "Email notifications enabled (SMTP -> {} recipients)",
                        config.smtp_to.len()
                    );
                    Some(notifier)
                }
                Err(e) => {
                    tracing::warn!("Failed to initialize SMTP notifier: {}", e);
                    None
                }
            }
        } else {
            tracing::info!(
                "No SMTP transport configured (set SMTP_HOST, SMTP_FROM_ADDRESS, EMAIL_TO)"
            );
            None
        };

        Self { channel }
    }

    pub fn is_configured(&self) -> bool {
        self.channel.is_some()
    }
}

#[async_trait]
impl Notifier for NotificationService {
    async fn send(&self, subject: &str, body: &str) -> bool {
        match &self.channel {
            None => {
                tracing::info!("Notification not sent (no transport configured)");
                false
            }
            Some(smtp) => match smtp.send(subject, body).await {
                Ok(()) => true,
                Err(e) => {
                    tracing::warn!("Failed to send notification via smtp: {}", e);
                    false
                }
            },
        }
    }
}
