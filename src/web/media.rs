//! Uploaded media files
//!
//! Image fields store paths relative to the media root, such as
//! `partners/axis.png`. Uploads land in a per-type folder under a sanitized,
//! collision-free name.

use std::io;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

pub const ALLOWED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "svg", "ico"];

pub fn media_url(path: &str) -> String {
    let path = path.trim().trim_start_matches('/');
    if path.is_empty() {
        String::new()
    } else {
        format!("/media/{}", path)
    }
}

/// Reduce an uploaded file name to `[a-z0-9._-]`, keeping only its last path
/// segment. `None` when nothing usable remains or the extension is not an image.
pub fn sanitize_file_name(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);

    let mut cleaned = String::with_capacity(base.len());
    for c in base.trim().chars() {
        match c {
            'a'..='z' | '0'..='9' | '.' | '-' | '_' => cleaned.push(c),
            'A'..='Z' => cleaned.push(c.to_ascii_lowercase()),
            ' ' => cleaned.push('-'),
            _ => {}
        }
    }
    let cleaned = cleaned.trim_start_matches('.').to_string();

    let (stem, extension) = cleaned.rsplit_once('.')?;
    if stem.is_empty() || !ALLOWED_EXTENSIONS.contains(&extension) {
        return None;
    }
    Some(cleaned)
}

/// Resolve a stored relative path under `media_root`, rejecting anything that
/// could escape it.
pub fn resolve(media_root: &Path, relative: &str) -> Option<PathBuf> {
    let relative = Path::new(relative.trim());
    if relative.as_os_str().is_empty() {
        return None;
    }
    let safe = relative
        .components()
        .all(|component| matches!(component, Component::Normal(_)));
    safe.then(|| media_root.join(relative))
}

/// Write `bytes` to `<media_root>/<folder>/<file_name>`, adding `-1`, `-2`, …
/// to the stem when the name is taken. Returns the stored relative path.
pub async fn store_upload(
    media_root: &Path,
    folder: &str,
    file_name: &str,
    bytes: &[u8],
) -> io::Result<String> {
    let directory = media_root.join(folder);
    tokio::fs::create_dir_all(&directory).await?;

    let (stem, extension) = file_name.rsplit_once('.').unwrap_or((file_name, ""));
    let mut candidate = file_name.to_string();
    let mut attempt = 0;
    loop {
        let target = directory.join(&candidate);
        // create_new fails if another request took the name in the meantime
        match tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&target)
            .await
        {
            Ok(mut file) => {
                // tokio completes writes in the background; flush before reporting success
                file.write_all(bytes).await?;
                file.flush().await?;
                break;
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                attempt += 1;
                candidate = format!("{}-{}.{}", stem, attempt, extension);
            }
            Err(e) => return Err(e),
        }
    }

    let stored = format!("{}/{}", folder, candidate);
    tracing::info!("Stored upload: {}", stored);
    Ok(stored)
}

/// Delete media files owned by a removed record. Failures are logged only.
pub async fn remove_media(media_root: &Path, paths: &[String]) {
    for path in paths {
        let Some(target) = resolve(media_root, path) else {
            tracing::warn!("Refusing to delete media outside the media root: {:?}", path);
            continue;
        };
        match tokio::fs::remove_file(&target).await {
            Ok(()) => tracing::info!("Deleted media file: {}", path),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to delete media file {}: {}", path, e),
        }
    }
}
