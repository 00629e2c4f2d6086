//! Contact Intake
//!
//! A contact form submission is a flat set of text fields. Nothing is
//! validated beyond presence: missing fields become empty strings. The
//! submission is rendered into a fixed plain-text message and handed to a
//! [`Mailer`] once; there is no retry and no queue.

pub mod mailer;

pub use mailer::{build_message, mailer_from_settings, LogMailer, MailError, Mailer, OutgoingMail, SmtpMailer};

use crate::config::MailSettings;
use serde::Serialize;
use std::collections::HashMap;

/// Values of a checkbox that mean "unchecked" when the field is present.
const FALSE_VALUES: &[&str] = &["", "off", "false", "no", "0"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub company: String,
    pub title: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub system_of_interest: String,
    pub message: String,
    pub current_customer: bool,
}

impl ContactSubmission {
    /// Build a submission from raw form fields.
    ///
    /// `system` and `system_of_interest` are both accepted for the system
    /// field. The checkbox is true when present, unless its value is one of
    /// `FALSE_VALUES` (empty, "off", "false", "no" or "0").
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let text = |key: &str| fields.get(key).map(|v| v.trim().to_string()).unwrap_or_default();

        let system_of_interest = fields
            .get("system")
            .or_else(|| fields.get("system_of_interest"))
            .map(|v| v.trim().to_string())
            .unwrap_or_default();

        let current_customer = fields
            .get("current_customer")
            .map(|v| !FALSE_VALUES.contains(&v.trim().to_ascii_lowercase().as_str()))
            .unwrap_or(false);

        Self {
            name: text("name"),
            email: text("email"),
            company: text("company"),
            title: text("title"),
            phone: text("phone"),
            address: text("address"),
            city: text("city"),
            state: text("state"),
            zip: text("zip"),
            system_of_interest,
            message: text("message"),
            current_customer,
        }
    }

    pub fn subject(&self) -> String {
        format!("New Contact Form Submission from {}", self.name)
    }

    /// Plain-text body embedding every field.
    pub fn body(&self) -> String {
        format!(
            "New contact form submission from the LIVE i TECH website.\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Title: {}\n\
             Phone: {}\n\
             Address: {}\n\
             City: {}\n\
             State: {}\n\
             Zip: {}\n\
             System of Interest: {}\n\
             Current Customer: {}\n\
             \n\
             Message:\n\
             {}\n",
            self.name,
            self.email,
            self.company,
            self.title,
            self.phone,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.system_of_interest,
            if self.current_customer { "Yes" } else { "No" },
            self.message,
        )
    }

    /// Message addressed to the configured recipient, replying to the submitter.
    pub fn to_mail(&self, settings: &MailSettings) -> OutgoingMail {
        OutgoingMail {
            from: settings.from.clone(),
            to: settings.to.clone(),
            reply_to: Some(self.email.clone()).filter(|e| !e.is_empty()),
            subject: self.subject(),
            body: self.body(),
        }
    }
}

/// JSON body returned by `POST /send-mail/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailStatus {
    pub status: &'static str,
    pub message: String,
}

impl MailStatus {
    pub fn success() -> Self {
        Self {
            status: "success",
            message: "Thank you! Your message has been sent.".to_string(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error",
            message: message.into(),
        }
    }
}

/// Send one submission. The caller decides how to report failure.
pub async fn dispatch(
    mailer: &dyn Mailer,
    settings: &MailSettings,
    submission: &ContactSubmission,
) -> Result<(), MailError> {
    let mail = submission.to_mail(settings);
    mailer.send(&mail).await?;
    tracing::info!("Contact submission from {:?} sent to {}", submission.name, settings.to);
    Ok(())
}
