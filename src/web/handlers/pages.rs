// Page handlers for HTML rendering with Askama

use crate::composer::{compose, PageContext};
use crate::web::{filters, AppError, AppState};
use askama::Template;
use axum::extract::State;
use axum::response::Html;

// ============================================================================
// Home Page
// ============================================================================

#[derive(Template)]
#[template(path = "pages/index.html")]
pub struct IndexTemplate {
    pub title: String,
    pub page: PageContext,
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let template = IndexTemplate {
        title: "LIVE i TECH".to_string(),
        page: compose(&state.db).await?,
    };
    Ok(Html(template.render()?))
}

// ============================================================================
// Contact Pages
// ============================================================================

#[derive(Template)]
#[template(path = "pages/contactus.html")]
pub struct ContactTemplate {
    pub title: String,
}

pub async fn contact_page() -> Result<Html<String>, AppError> {
    let template = ContactTemplate {
        title: "Contact Us".to_string(),
    };
    Ok(Html(template.render()?))
}

#[derive(Template)]
#[template(path = "pages/emailsent.html")]
pub struct EmailSentTemplate {
    pub title: String,
}

pub async fn email_sent() -> Result<Html<String>, AppError> {
    let template = EmailSentTemplate {
        title: "Message Sent".to_string(),
    };
    Ok(Html(template.render()?))
}
