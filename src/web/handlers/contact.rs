// Contact form intake

use crate::contact::{dispatch, ContactSubmission, MailStatus};
use crate::web::{AppError, AppState};
use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request, State},
    http::{header::CONTENT_TYPE, StatusCode},
    response::Json,
    Form,
};
use std::collections::HashMap;

/// Flat text fields of a contact form, posted urlencoded or as multipart.
#[derive(Debug, Default)]
pub struct ContactFields(pub HashMap<String, String>);

#[async_trait]
impl<S> FromRequest<S> for ContactFields
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|v| v.starts_with("multipart/form-data"))
            .unwrap_or(false);

        if !is_multipart {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            return Ok(Self(fields));
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;

        let mut fields = HashMap::new();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?
        {
            // Files are not part of the contact form
            if field.file_name().is_some() {
                continue;
            }
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };
            let value = field
                .text()
                .await
                .map_err(|e| AppError::BadRequest(e.body_text()))?;
            fields.insert(name, value);
        }
        Ok(Self(fields))
    }
}

/// Mail the submission. Success is 200; a transport failure is logged and
/// answered with 502 and `status: "error"`.
pub async fn send_mail(
    State(state): State<AppState>,
    ContactFields(fields): ContactFields,
) -> (StatusCode, Json<MailStatus>) {
    let submission = ContactSubmission::from_fields(&fields);

    match dispatch(state.mailer.as_ref(), &state.settings.mail, &submission).await {
        Ok(()) => (StatusCode::OK, Json(MailStatus::success())),
        Err(e) => {
            tracing::error!("Failed to send contact mail: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(MailStatus::error(
                    "Sorry, your message could not be sent. Please call us instead.",
                )),
            )
        }
    }
}
