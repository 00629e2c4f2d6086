// Admin API: bearer-token protected CRUD over every content type

use crate::content::entities::*;
use crate::content::repository::{self, OrderEntry};
use crate::content::{sections, upload_folders, ContentEntity, SectionInfo, SectionKind};
use crate::web::{media, AppError, AppState};
use askama::Template;
use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, Request, State},
    http::{header::AUTHORIZATION, StatusCode},
    middleware::{self, Next},
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post, put},
    Router,
};
use sea_orm::{ActiveModelBehavior, ActiveModelTrait, IntoActiveModel};
use serde::Serialize;

/// Upload size limit for the admin routes.
pub const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/admin", get(overview))
        .route("/admin/", get(overview))
        .route("/admin/api/schema", get(schema))
        .route("/admin/api/media/:folder", post(upload_media))
        .merge(content_routes::<hero_section::Entity>())
        .merge(content_routes::<about_section::Entity>())
        .merge(content_routes::<services_section::Entity>())
        .merge(content_routes::<service_item::Entity>())
        .merge(content_routes::<portfolio_section::Entity>())
        .merge(content_routes::<partners_section::Entity>())
        .merge(content_routes::<partner_item::Entity>())
        .merge(content_routes::<examples_section::Entity>())
        .merge(content_routes::<example_video::Entity>())
        .merge(content_routes::<contact_section::Entity>())
        .merge(content_routes::<footer_section::Entity>())
        .route_layer(middleware::from_fn_with_state(state, require_admin_token))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// CRUD routes for one content type under `/admin/api/{slug}`.
fn content_routes<E>() -> Router<AppState>
where
    E: ContentEntity,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let base = format!("/admin/api/{}", E::SLUG);
    let mut router = Router::new()
        .route(&base, get(list_records::<E>).post(create_record::<E>))
        .route(
            &format!("{}/:id", base),
            get(get_record::<E>)
                .put(update_record::<E>)
                .delete(delete_record::<E>),
        );

    // Static `order` segment takes precedence over `:id`
    if E::KIND == SectionKind::List {
        router = router.route(&format!("{}/order", base), put(reorder_records::<E>));
    }
    router
}

// ============================================================================
// Authentication
// ============================================================================

async fn require_admin_token(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let Some(expected) = state.settings.admin_token.as_deref() else {
        return Err(AppError::Unauthorized);
    };

    let provided = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    if provided != Some(expected) {
        tracing::warn!("Rejected admin request to {}", request.uri().path());
        return Err(AppError::Unauthorized);
    }

    Ok(next.run(request).await)
}

// ============================================================================
// Overview & Schema
// ============================================================================

/// One row of the admin overview.
pub struct SectionSummary {
    pub info: SectionInfo,
    pub total: usize,
    pub active: usize,
}

impl SectionSummary {
    pub fn kind_label(&self) -> &'static str {
        match self.info.kind {
            SectionKind::Singleton => "singleton",
            SectionKind::List => "list",
        }
    }
}

#[derive(Template)]
#[template(path = "admin/index.html")]
pub struct AdminTemplate {
    pub title: String,
    pub summaries: Vec<SectionSummary>,
    pub upload_folders: Vec<&'static str>,
}

async fn summarize<E>(state: &AppState) -> Result<SectionSummary, AppError>
where
    E: ContentEntity,
{
    let records = repository::list::<E, _>(&state.db).await?;
    Ok(SectionSummary {
        info: E::info(),
        total: records.len(),
        active: records.iter().filter(|r| repository::is_active::<E>(r)).count(),
    })
}

async fn overview(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let summaries = vec![
        summarize::<hero_section::Entity>(&state).await?,
        summarize::<about_section::Entity>(&state).await?,
        summarize::<services_section::Entity>(&state).await?,
        summarize::<service_item::Entity>(&state).await?,
        summarize::<portfolio_section::Entity>(&state).await?,
        summarize::<partners_section::Entity>(&state).await?,
        summarize::<partner_item::Entity>(&state).await?,
        summarize::<examples_section::Entity>(&state).await?,
        summarize::<example_video::Entity>(&state).await?,
        summarize::<contact_section::Entity>(&state).await?,
        summarize::<footer_section::Entity>(&state).await?,
    ];

    let template = AdminTemplate {
        title: "Site Administration".to_string(),
        summaries,
        upload_folders: upload_folders(),
    };
    Ok(Html(template.render()?))
}

async fn schema() -> Json<Vec<SectionInfo>> {
    Json(sections())
}

// ============================================================================
// Record CRUD
// ============================================================================

async fn list_records<E>(State(state): State<AppState>) -> Result<Json<Vec<E::Model>>, AppError>
where
    E: ContentEntity,
    E::Model: Serialize,
{
    Ok(Json(repository::list::<E, _>(&state.db).await?))
}

async fn get_record<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<E::Model>, AppError>
where
    E: ContentEntity,
    E::Model: Serialize,
{
    repository::get::<E, _>(&state.db, id)
        .await?
        .map(Json)
        .ok_or_else(|| not_found::<E>(id))
}

async fn create_record<E>(
    State(state): State<AppState>,
    Json(form): Json<E::Form>,
) -> Result<(StatusCode, Json<E::Model>), AppError>
where
    E: ContentEntity,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let model = repository::create::<E>(&state.db, form).await?;
    tracing::info!("{}: created record", E::SLUG);
    Ok((StatusCode::CREATED, Json(model)))
}

async fn update_record<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(form): Json<E::Form>,
) -> Result<Json<E::Model>, AppError>
where
    E: ContentEntity,
    E::Model: Serialize + IntoActiveModel<E::ActiveModel>,
    E::ActiveModel: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send,
{
    let model = repository::update::<E>(&state.db, id, form)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;
    tracing::info!("{}: updated record {}", E::SLUG, id);
    Ok(Json(model))
}

async fn delete_record<E>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, AppError>
where
    E: ContentEntity,
{
    let model = repository::delete::<E>(&state.db, id)
        .await?
        .ok_or_else(|| not_found::<E>(id))?;

    let owned_media = repository::image_paths::<E>(&model);
    let mut orphaned = Vec::with_capacity(owned_media.len());
    for path in owned_media {
        // Another record may point at the same upload
        match repository::media_in_use(&state.db, &path).await {
            Ok(false) => orphaned.push(path),
            Ok(true) => tracing::info!("Keeping shared media file: {}", path),
            Err(e) => tracing::warn!("Keeping media file {}, reference check failed: {}", path, e),
        }
    }
    media::remove_media(&state.settings.media_dir, &orphaned).await;
    tracing::info!("{}: deleted record {}", E::SLUG, id);
    Ok(StatusCode::NO_CONTENT)
}

async fn reorder_records<E>(
    State(state): State<AppState>,
    Json(entries): Json<Vec<OrderEntry>>,
) -> Result<Json<serde_json::Value>, AppError>
where
    E: ContentEntity,
{
    let updated = repository::reorder::<E>(&state.db, &entries).await?;
    Ok(Json(serde_json::json!({ "updated": updated })))
}

fn not_found<E: ContentEntity>(id: i32) -> AppError {
    AppError::NotFound(format!("{} record {} not found", E::LABEL, id))
}

// ============================================================================
// Media Upload
// ============================================================================

#[derive(Debug, Serialize)]
pub struct UploadedMedia {
    /// Value to store in an image field.
    pub path: String,
    pub url: String,
}

/// Store the first file field of a multipart body under `folder`.
async fn upload_media(
    State(state): State<AppState>,
    Path(folder): Path<String>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    if !upload_folders().contains(&folder.as_str()) {
        return Err(AppError::NotFound(format!("Unknown upload folder: {}", folder)));
    }

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.body_text()))?
    {
        let Some(original) = field.file_name().map(str::to_string) else {
            continue;
        };
        let file_name = media::sanitize_file_name(&original).ok_or_else(|| {
            AppError::BadRequest(format!(
                "Unsupported file {:?}; allowed extensions: {}",
                original,
                media::ALLOWED_EXTENSIONS.join(", ")
            ))
        })?;
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Uploaded file is empty".to_string()));
        }

        let path =
            media::store_upload(&state.settings.media_dir, &folder, &file_name, &bytes).await?;
        let url = media::media_url(&path);
        return Ok((StatusCode::CREATED, Json(UploadedMedia { path, url })));
    }

    Err(AppError::BadRequest("No file field in upload".to_string()))
}
