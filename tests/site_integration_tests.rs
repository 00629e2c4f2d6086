// Site Integration Tests
//
// Drive the full router against an in-memory SQLite database with a
// recording (or failing) mailer in place of SMTP.
// Run with: cargo test --test site_integration_tests

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use lit_site::contact::{MailError, Mailer, OutgoingMail};
use lit_site::content::entities::*;
use lit_site::content::repository;
use lit_site::storage::{self, seed};
use lit_site::{create_router, AppState, Settings};
use sea_orm::DatabaseConnection;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tower::ServiceExt; // for oneshot

const TOKEN: &str = "test-admin-token";

// Mailer that keeps every message it is asked to send
#[derive(Default)]
struct RecordingMailer {
    sent: Mutex<Vec<OutgoingMail>>,
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send(&self, mail: &OutgoingMail) -> Result<(), MailError> {
        self.sent.lock().unwrap().push(mail.clone());
        Ok(())
    }
}

struct FailingMailer;

#[async_trait]
impl Mailer for FailingMailer {
    async fn send(&self, _mail: &OutgoingMail) -> Result<(), MailError> {
        Err(MailError::Transport("connection refused".to_string()))
    }
}

struct TestSite {
    app: Router,
    db: DatabaseConnection,
    mailer: Arc<RecordingMailer>,
    media: tempfile::TempDir,
}

fn test_settings(media_dir: &std::path::Path, admin: bool) -> Settings {
    let mut vars: HashMap<&str, String> = HashMap::new();
    vars.insert("MEDIA_DIR", media_dir.display().to_string());
    vars.insert("MAIL_TO", "sales@example.com".to_string());
    vars.insert("MAIL_FROM", "website@example.com".to_string());
    if admin {
        vars.insert("ADMIN_TOKEN", TOKEN.to_string());
    }
    Settings::from_lookup(|key| vars.get(key).cloned()).unwrap()
}

async fn test_site(admin: bool) -> TestSite {
    let db = storage::init_db("sqlite::memory:").await.unwrap();
    let media = tempfile::tempdir().unwrap();
    let mailer = Arc::new(RecordingMailer::default());
    let state = AppState::new(db.clone(), mailer.clone(), test_settings(media.path(), admin));
    TestSite {
        app: create_router(state),
        db,
        mailer,
        media,
    }
}

async fn send(app: &Router, request: Request<Body>) -> axum::response::Response {
    app.clone().oneshot(request).await.unwrap()
}

// Helper: Read body as text
async fn text_response(response: axum::response::Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(body.to_vec()).expect("Body is not UTF-8")
}

// Helper: Parse JSON response
async fn json_response(response: axum::response::Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");
    serde_json::from_slice(&body).expect("Failed to parse JSON")
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn admin(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN));
    match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

fn multipart_body(boundary: &str, parts: &[(&str, Option<&str>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file_name, data) in parts {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        match file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());
    body
}

// =========================================================================
// Section 1: Health Check
// =========================================================================

#[tokio::test]
async fn test_health_check() {
    let site = test_site(false).await;
    let response = send(&site.app, get("/health")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["timestamp"].is_string());
}

// =========================================================================
// Section 2: Homepage Composition
// =========================================================================

#[tokio::test]
async fn test_homepage_renders_with_empty_store() {
    let site = test_site(false).await;
    let response = send(&site.app, get("/")).await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = text_response(response).await;
    assert!(html.contains("<title>LIVE i TECH</title>"));
    assert!(!html.contains("id=\"about\""));
}

#[tokio::test]
async fn test_homepage_renders_seeded_content_in_order() {
    let site = test_site(false).await;
    seed::populate(&site.db).await.unwrap();

    let html = text_response(send(&site.app, get("/")).await).await;

    let cctv = html.find("<h3>CCTV</h3>").expect("CCTV service missing");
    let access = html.find("<h3>Access Control</h3>").expect("Access Control missing");
    assert!(cctv < access, "services must follow their order");

    assert!(html.contains("BioConnect Suprema"));
    assert!(html.contains("i5n6OMiVgEU"));
    assert!(html.contains("href=\"tel:9544450712\""));
    // Subtitle rich text is rendered as HTML
    assert!(html.contains("<h6>Schedule a free assessment.</h6>"));
}

#[tokio::test]
async fn test_homepage_hides_inactive_records() {
    let site = test_site(true).await;

    for (name, active) in [("Visible Partner", true), ("Retired Partner", false)] {
        let form = partner_item::Form {
            name: Some(name.to_string()),
            is_active: Some(active),
            ..Default::default()
        };
        repository::create::<partner_item::Entity>(&site.db, form).await.unwrap();
    }

    let html = text_response(send(&site.app, get("/")).await).await;
    assert!(html.contains("Visible Partner"));
    assert!(!html.contains("Retired Partner"));
}

#[tokio::test]
async fn test_homepage_strips_outer_paragraph_from_subtitles() {
    let site = test_site(false).await;
    let form = examples_section::Form {
        subtitle: Some("<p>Our work, in action.</p>".to_string()),
        ..Default::default()
    };
    repository::create::<examples_section::Entity>(&site.db, form).await.unwrap();

    let html = text_response(send(&site.app, get("/")).await).await;
    assert!(html.contains("<div class=\"lead\">Our work, in action.</div>"));
}

#[tokio::test]
async fn test_static_pages() {
    let site = test_site(false).await;

    for uri in ["/contact/", "/send-mail/"] {
        let response = send(&site.app, get(uri)).await;
        assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        assert!(text_response(response).await.contains("id=\"contact-form\""));
    }

    let response = send(&site.app, get("/email-sent/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_response(response).await.contains("Your message has been sent"));
}

// =========================================================================
// Section 3: Contact Intake
// =========================================================================

#[tokio::test]
async fn test_contact_submission_is_mailed() {
    let site = test_site(false).await;
    let form = "name=Jane+Doe&email=jane%40example.com&company=Acme&title=CTO&phone=555-0100\
                &address=1+Main+St&city=Miami&state=FL&zip=33101&system=CCTV\
                &current_customer=on&message=Need+cameras";

    let response = send(
        &site.app,
        Request::builder()
            .method("POST")
            .uri("/send-mail/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_response(response).await;
    assert_eq!(body["status"], "success");

    let sent = site.mailer.sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    let mail = &sent[0];
    assert_eq!(mail.to, "sales@example.com");
    assert_eq!(mail.from, "website@example.com");
    assert_eq!(mail.subject, "New Contact Form Submission from Jane Doe");
    for value in ["Jane Doe", "jane@example.com", "Acme", "CTO", "555-0100", "1 Main St", "Miami", "FL", "33101", "CCTV", "Need cameras"] {
        assert!(mail.body.contains(value), "missing {:?}", value);
    }
    assert!(mail.body.contains("Current Customer: Yes"));
}

#[tokio::test]
async fn test_contact_submission_accepts_multipart() {
    let site = test_site(false).await;
    let boundary = "contactboundary";
    let body = multipart_body(
        boundary,
        &[("name", None, b"Sam"), ("email", None, b"sam@example.com"), ("message", None, b"Hello")],
    );

    let response = send(
        &site.app,
        Request::builder()
            .method("POST")
            .uri("/send-mail/")
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
            .body(Body::from(body))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let sent = site.mailer.sent.lock().unwrap();
    assert!(sent[0].body.contains("Name: Sam"));
    assert!(sent[0].body.contains("Current Customer: No"));
}

#[tokio::test]
async fn test_contact_mail_failure_is_reported() {
    let db = storage::init_db("sqlite::memory:").await.unwrap();
    let media = tempfile::tempdir().unwrap();
    let state = AppState::new(db, Arc::new(FailingMailer), test_settings(media.path(), false));
    let app = create_router(state);

    let response = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/send-mail/")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Jane&message=hi"))
            .unwrap(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_response(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["message"].is_string());
}

// =========================================================================
// Section 4: Admin Authentication
// =========================================================================

#[tokio::test]
async fn test_admin_disabled_without_token() {
    let site = test_site(false).await;
    let response = send(&site.app, admin("GET", "/admin/api/schema", None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_requires_bearer_token() {
    let site = test_site(true).await;

    let response = send(&site.app, get("/admin/api/schema")).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = send(
        &site.app,
        Request::builder()
            .uri("/admin/api/schema")
            .header(header::AUTHORIZATION, "Bearer wrong")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_schema_and_overview() {
    let site = test_site(true).await;

    let response = send(&site.app, admin("GET", "/admin/api/schema", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let schema = json_response(response).await;
    let sections = schema.as_array().unwrap();
    assert_eq!(sections.len(), 11);
    assert_eq!(sections[0]["slug"], "hero");
    assert_eq!(sections[3]["kind"], "list");
    assert_eq!(sections[3]["upload_folder"], "services");

    let response = send(&site.app, admin("GET", "/admin/", None)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text_response(response).await;
    assert!(html.contains("Service Items"));
    assert!(html.contains("0 active / 0"));
}

// =========================================================================
// Section 5: Admin CRUD
// =========================================================================

#[tokio::test]
async fn test_admin_service_item_lifecycle() {
    let site = test_site(true).await;

    let response = send(
        &site.app,
        admin("POST", "/admin/api/service-items", Some(json!({"title": "CCTV", "order": 2, "anchor_id": "cctv"}))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = json_response(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["is_active"], true);
    assert_eq!(created["description"], "");

    let response = send(
        &site.app,
        admin("PUT", &format!("/admin/api/service-items/{}", id), Some(json!({"title": "Video Surveillance"}))),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = json_response(response).await;
    assert_eq!(updated["title"], "Video Surveillance");
    assert_eq!(updated["order"], 2);

    let response = send(&site.app, admin("GET", "/admin/api/service-items", None)).await;
    assert_eq!(json_response(response).await.as_array().unwrap().len(), 1);

    let response = send(&site.app, admin("DELETE", &format!("/admin/api/service-items/{}", id), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = send(&site.app, admin("GET", &format!("/admin/api/service-items/{}", id), None)).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(json_response(response).await["error"].is_string());
}

#[tokio::test]
async fn test_admin_rejects_unknown_fields() {
    let site = test_site(true).await;
    let response = send(
        &site.app,
        admin("POST", "/admin/api/partner-items", Some(json!({"name": "Axis", "colour": "blue"}))),
    )
    .await;
    assert!(response.status().is_client_error());
    assert!(repository::list::<partner_item::Entity, _>(&site.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_admin_singleton_keeps_one_active_row() {
    let site = test_site(true).await;

    for logo in ["hero/old.png", "hero/new.png"] {
        let response = send(&site.app, admin("POST", "/admin/api/hero", Some(json!({"logo_image": logo})))).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = send(&site.app, admin("GET", "/admin/api/hero", None)).await;
    let rows = json_response(response).await;
    let active: Vec<&Value> = rows.as_array().unwrap().iter().filter(|r| r["is_active"] == true).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["logo_image"], "hero/new.png");

    let html = text_response(send(&site.app, get("/")).await).await;
    assert!(html.contains("new.png"));
    assert!(!html.contains("old.png"));
}

#[tokio::test]
async fn test_admin_reorders_list_items() {
    let site = test_site(true).await;
    let mut ids = Vec::new();
    for (name, order) in [("Aiphone", 1), ("Keyscan", 2)] {
        let response = send(
            &site.app,
            admin("POST", "/admin/api/partner-items", Some(json!({"name": name, "order": order}))),
        )
        .await;
        ids.push(json_response(response).await["id"].as_i64().unwrap());
    }

    let response = send(
        &site.app,
        admin(
            "PUT",
            "/admin/api/partner-items/order",
            Some(json!([{"id": ids[0], "order": 5}, {"id": ids[1], "order": 1}])),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_response(response).await["updated"], 2);

    let partners = repository::all_active::<partner_item::Entity, _>(&site.db).await.unwrap();
    let names: Vec<&str> = partners.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Keyscan", "Aiphone"]);
}

#[tokio::test]
async fn test_admin_converts_youtube_urls() {
    let site = test_site(true).await;
    let response = send(
        &site.app,
        admin(
            "POST",
            "/admin/api/example-videos",
            Some(json!({"youtube_url": "https://www.youtube.com/watch?v=o36rO2BBWKE"})),
        ),
    )
    .await;
    let video = json_response(response).await;
    assert_eq!(video["youtube_url"], "https://www.youtube-nocookie.com/embed/o36rO2BBWKE");
}

// =========================================================================
// Section 6: Media Uploads
// =========================================================================

#[tokio::test]
async fn test_media_upload_and_cleanup_on_delete() {
    let site = test_site(true).await;
    let boundary = "uploadboundary";
    let body = multipart_body(boundary, &[("file", Some("Axis Logo.PNG"), b"\x89PNG fake")]);

    let response = send(
        &site.app,
        Request::builder()
            .method("POST")
            .uri("/admin/api/media/partners")
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
            .body(Body::from(body))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let uploaded = json_response(response).await;
    assert_eq!(uploaded["path"], "partners/axis-logo.png");
    assert_eq!(uploaded["url"], "/media/partners/axis-logo.png");
    assert!(site.media.path().join("partners/axis-logo.png").is_file());

    let response = send(
        &site.app,
        admin("POST", "/admin/api/partner-items", Some(json!({"name": "Axis", "logo": "partners/axis-logo.png"}))),
    )
    .await;
    let id = json_response(response).await["id"].as_i64().unwrap();

    let response = send(&site.app, admin("DELETE", &format!("/admin/api/partner-items/{}", id), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!site.media.path().join("partners/axis-logo.png").exists());
}

#[tokio::test]
async fn test_shared_media_survives_until_last_reference_is_deleted() {
    let site = test_site(true).await;
    let boundary = "uploadboundary";
    let body = multipart_body(boundary, &[("file", Some("shared.png"), b"\x89PNG shared")]);

    let response = send(
        &site.app,
        Request::builder()
            .method("POST")
            .uri("/admin/api/media/partners")
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
            .body(Body::from(body))
            .unwrap(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let stored = site.media.path().join("partners/shared.png");
    assert_eq!(std::fs::read(&stored).unwrap(), b"\x89PNG shared");

    let mut ids = Vec::new();
    for name in ["Axis", "Comelit"] {
        let response = send(
            &site.app,
            admin("POST", "/admin/api/partner-items", Some(json!({"name": name, "logo": "partners/shared.png"}))),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
        ids.push(json_response(response).await["id"].as_i64().unwrap());
    }

    let response = send(&site.app, admin("DELETE", &format!("/admin/api/partner-items/{}", ids[0]), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(stored.is_file(), "file still referenced by the second partner");

    let response = send(&site.app, admin("DELETE", &format!("/admin/api/partner-items/{}", ids[1]), None)).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert!(!stored.exists());
}

#[tokio::test]
async fn test_media_upload_rejects_unknown_folder_and_type() {
    let site = test_site(true).await;
    let boundary = "uploadboundary";

    let upload = |uri: &str, file_name: &str| {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {}", TOKEN))
            .header(header::CONTENT_TYPE, format!("multipart/form-data; boundary={}", boundary))
            .body(Body::from(multipart_body(boundary, &[("file", Some(file_name), b"data")])))
            .unwrap()
    };

    let response = send(&site.app, upload("/admin/api/media/secrets", "a.png")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(&site.app, upload("/admin/api/media/hero", "shell.php")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
