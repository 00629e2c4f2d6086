//! Askama filters used by the site templates.
//!
//! Templates bring these into scope with `use crate::web::filters;` next to
//! the template struct.

use crate::utils::strip_outer_paragraph;
use std::fmt::Display;

/// Unwrap a rich-text value from a single outer `<p>`/`<div>`.
///
/// Output is still HTML; pair with `|safe` for trusted admin content.
pub fn strip_outer_p<T: Display>(value: T) -> askama::Result<String> {
    let value = value.to_string();
    Ok(strip_outer_paragraph(&value).to_string())
}

/// Public URL of a file under the static root.
pub fn static_asset<T: Display>(path: T) -> askama::Result<String> {
    Ok(format!("/static/{}", path.to_string().trim_start_matches('/')))
}

/// Public URL of an uploaded media file; empty for "no image".
pub fn media_url<T: Display>(path: T) -> askama::Result<String> {
    Ok(super::media::media_url(&path.to_string()))
}
