//! Small pure helpers shared by the templates and the admin API
//!
//! - Rich text: outer paragraph stripping for CKEditor-style fragments
//! - YouTube: watch/share URL to embed URL conversion

pub mod rich_text;
pub mod youtube;

pub use rich_text::strip_outer_paragraph;
pub use youtube::{youtube_embed_url, youtube_video_id};
