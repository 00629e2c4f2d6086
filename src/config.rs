//! Runtime configuration
//!
//! Read once from environment variables at startup. Local development needs
//! nothing set: SQLite file in the working directory, admin API disabled,
//! contact mail written to the log instead of sent.

use anyhow::{anyhow, Context, Result};
use std::path::PathBuf;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_DATABASE_URL: &str = "sqlite://lit_site.db?mode=rwc";
pub const DEFAULT_MAIL_FROM: &str = "noreply@liveitech.com";
pub const DEFAULT_MAIL_TO: &str = "info@liveitech.com";

#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub static_dir: PathBuf,
    pub media_dir: PathBuf,
    /// Bearer token for `/admin`; the admin routes are not mounted without one.
    pub admin_token: Option<String>,
    pub mail: MailSettings,
}

#[derive(Debug, Clone)]
pub struct MailSettings {
    pub from: String,
    pub to: String,
    /// `None` selects the log-only mailer.
    pub smtp: Option<SmtpSettings>,
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub tls: SmtpTls,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmtpTls {
    /// Plain connection upgraded with STARTTLS (port 587).
    StartTls,
    /// Implicit TLS (port 465).
    Tls,
    /// No encryption; local relays and mail catchers only.
    None,
}

impl SmtpTls {
    fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "starttls" => Ok(SmtpTls::StartTls),
            "tls" | "ssl" => Ok(SmtpTls::Tls),
            "none" | "plain" => Ok(SmtpTls::None),
            other => Err(anyhow!("SMTP_TLS must be starttls, tls or none (got {:?})", other)),
        }
    }

    fn default_port(self) -> u16 {
        match self {
            SmtpTls::StartTls => 587,
            SmtpTls::Tls => 465,
            SmtpTls::None => 25,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = match get("PORT") {
            Some(p) => p.trim().parse().with_context(|| format!("PORT is not a port number: {}", p))?,
            None => DEFAULT_PORT,
        };

        let smtp = match get("SMTP_HOST") {
            Some(host) => {
                let tls = match get("SMTP_TLS") {
                    Some(v) => SmtpTls::parse(&v)?,
                    None => SmtpTls::StartTls,
                };
                let port = match get("SMTP_PORT") {
                    Some(p) => p
                        .trim()
                        .parse()
                        .with_context(|| format!("SMTP_PORT is not a port number: {}", p))?,
                    None => tls.default_port(),
                };
                Some(SmtpSettings {
                    host,
                    port,
                    username: get("SMTP_USERNAME"),
                    password: get("SMTP_PASSWORD"),
                    tls,
                })
            }
            None => None,
        };

        Ok(Self {
            port,
            database_url: get("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            static_dir: PathBuf::from(get("STATIC_DIR").unwrap_or_else(|| "static".to_string())),
            media_dir: PathBuf::from(get("MEDIA_DIR").unwrap_or_else(|| "media".to_string())),
            admin_token: get("ADMIN_TOKEN"),
            mail: MailSettings {
                from: get("MAIL_FROM").unwrap_or_else(|| DEFAULT_MAIL_FROM.to_string()),
                to: get("MAIL_TO").unwrap_or_else(|| DEFAULT_MAIL_TO.to_string()),
                smtp,
            },
        })
    }

    /// Log the effective configuration without secrets.
    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  DATABASE_URL: {}", self.database_url);
        tracing::info!("  STATIC_DIR: {}", self.static_dir.display());
        tracing::info!("  MEDIA_DIR: {}", self.media_dir.display());
        tracing::info!(
            "  ADMIN: {}",
            if self.admin_token.is_some() { "enabled" } else { "disabled (ADMIN_TOKEN unset)" }
        );
        tracing::info!("  MAIL: {} -> {}", self.mail.from, self.mail.to);
        match &self.mail.smtp {
            Some(smtp) => tracing::info!(
                "  SMTP: {}:{} ({:?}, auth: {})",
                smtp.host,
                smtp.port,
                smtp.tls,
                if smtp.username.is_some() { "yes" } else { "no" }
            ),
            None => tracing::info!("  SMTP: not configured, contact mail is logged only"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(vars: &[(&str, &str)]) -> Result<Settings> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Settings::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let s = settings(&[]).unwrap();
        assert_eq!(s.port, DEFAULT_PORT);
        assert_eq!(s.database_url, DEFAULT_DATABASE_URL);
        assert!(s.admin_token.is_none());
        assert!(s.mail.smtp.is_none());
        assert_eq!(s.mail.to, DEFAULT_MAIL_TO);
    }

    #[test]
    fn test_blank_values_are_unset() {
        let s = settings(&[("ADMIN_TOKEN", "  "), ("SMTP_HOST", "")]).unwrap();
        assert!(s.admin_token.is_none());
        assert!(s.mail.smtp.is_none());
    }

    #[test]
    fn test_smtp_port_follows_tls_mode() {
        let s = settings(&[("SMTP_HOST", "smtp.example.com"), ("SMTP_TLS", "tls")]).unwrap();
        let smtp = s.mail.smtp.unwrap();
        assert_eq!(smtp.tls, SmtpTls::Tls);
        assert_eq!(smtp.port, 465);

        let s = settings(&[("SMTP_HOST", "localhost"), ("SMTP_TLS", "none"), ("SMTP_PORT", "1025")]).unwrap();
        assert_eq!(s.mail.smtp.unwrap().port, 1025);
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(settings(&[("PORT", "eighty")]).is_err());
        assert!(settings(&[("SMTP_HOST", "h"), ("SMTP_TLS", "maybe")]).is_err());
    }
}
