//! Legacy PHP include templates to askama templates.
//!
//! Each rewrite step is a pure `&str -> String` function; [`convert_template`]
//! chains them and [`run`] applies the chain to every `*.html` file under a
//! templates directory.

use super::{backup_once, sibling_dir, MigrationError};
use regex_lite::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use walkdir::WalkDir;

/// First line of every file written by this tool.
pub const MARKER: &str = "{# converted #}";

pub const BACKUP_SUFFIX: &str = "_php_backup";

/// Legacy include name (under `php-pages/includes/`, without `.php`) to template path.
pub const INCLUDE_MAP: &[(&str, &str)] = &[
    ("head/head", "base/base.html"),
    ("hero", "components/hero.html"),
    ("floatbutton", "components/floatbutton.html"),
    ("carousel", "components/carousel.html"),
    ("about", "sections/about.html"),
    ("portfolio", "sections/portfolio.html"),
    ("services", "sections/services.html"),
    ("partners", "sections/partners.html"),
    ("examples", "sections/examples.html"),
    ("theteam", "sections/theteam.html"),
    ("testimonials", "sections/testimonials.html"),
    ("blog", "sections/blog.html"),
    ("contactus", "pages/contactus.html"),
    ("footer", "sections/footer.html"),
];

fn mapped_include(name: &str) -> Option<&'static str> {
    INCLUDE_MAP
        .iter()
        .find(|(legacy, _)| legacy.eq_ignore_ascii_case(name))
        .map(|(_, path)| *path)
}

macro_rules! regex {
    ($pattern:expr) => {{
        static RE: OnceLock<Regex> = OnceLock::new();
        RE.get_or_init(|| Regex::new($pattern).expect("valid regex"))
    }};
}

// ============================================================================
// Rewrite steps
// ============================================================================

pub fn is_converted(content: &str) -> bool {
    content.contains(MARKER) || content.contains("{% extends")
}

/// `<?php require_once('php-pages/includes/X.php'); ?>` to `{% include "..." %}`.
///
/// Includes missing from [`INCLUDE_MAP`] become a comment naming the legacy file.
pub fn convert_includes(content: &str) -> String {
    let re = regex!(
        r#"(?i)<\?php\s+require_once\s*\(?\s*['"]php-pages/includes/([\w/.-]+?)\.php['"]\s*\)?\s*;?\s*\?>"#
    );
    re.replace_all(content, |caps: &Captures| match mapped_include(&caps[1]) {
        Some(path) => format!("{{% include \"{}\" %}}", path),
        None => format!("{{# unmapped include: php-pages/includes/{}.php #}}", &caps[1]),
    })
    .into_owned()
}

/// Commented-out includes, in or out of a PHP block, become template comments.
pub fn convert_commented_includes(content: &str) -> String {
    let in_block = regex!(
        r#"(?i)<\?php\s*//\s*require_once\s*\(?\s*['"]php-pages/includes/([\w/.-]+?)\.php['"]\s*\)?\s*;?\s*\?>"#
    );
    let content = in_block.replace_all(content, |caps: &Captures| {
        let target = mapped_include(&caps[1])
            .map(str::to_string)
            .unwrap_or_else(|| format!("php-pages/includes/{}.php", &caps[1]));
        format!("{{# disabled include: {} #}}", target)
    });

    let bare = regex!(r"//\s*require_once\s*\([^)]+\);?");
    bare.replace_all(&content, |caps: &Captures| format!("{{# {} #}}", &caps[0]))
        .into_owned()
}

/// Local stylesheet, script and image references to the `static_asset` filter.
pub fn convert_static_references(content: &str) -> String {
    fn rewrite(caps: &Captures) -> String {
        let (attr, path) = (&caps[1], &caps[2]);
        let external = path.starts_with("http:")
            || path.starts_with("https:")
            || path.starts_with("//")
            || path.starts_with("data:")
            || path.contains("{{");
        if external {
            return caps[0].to_string();
        }
        let path = path.trim_start_matches("./").trim_start_matches('/');
        format!("{}=\"{{{{ \"{}\"|static_asset }}}}\"", attr, path)
    }

    let href = regex!(r#"(href)\s*=\s*["']([^"']*\.css)["']"#);
    let src = regex!(r#"(src)\s*=\s*["']([^"']*\.(?:js|png|jpg|gif|ico))["']"#);

    let content = href.replace_all(content, rewrite);
    src.replace_all(&content, rewrite).into_owned()
}

pub fn remove_php_blocks(content: &str) -> String {
    regex!(r"(?s)<\?php.*?\?>").replace_all(content, "").into_owned()
}

/// Title for a page without a `<title>`: `about_us.html` → `About Us - LIVEiTECH`.
pub fn title_from_file_name(file_name: &str) -> String {
    let stem = file_name.strip_suffix(".html").unwrap_or(file_name);
    let words: Vec<String> = stem
        .split(['_', '-', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
                None => String::new(),
            }
        })
        .collect();
    format!("{} - LIVEiTECH", words.join(" "))
}

/// Turn a standalone page into a child of `base/base.html`.
///
/// Content without a `<body>` is returned unchanged.
pub fn wrap_in_base(content: &str, file_name: &str) -> String {
    let Some(body) = regex!(r"(?is)<body[^>]*>(.*?)</body>").captures(content) else {
        return content.to_string();
    };

    let title = regex!(r"(?is)<title[^>]*>(.*?)</title>")
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|t| !t.is_empty())
        .unwrap_or_else(|| title_from_file_name(file_name));

    let body = body[1].trim();
    let ios_wrapper = regex!(r#"(?s)^<div[^>]*id\s*=\s*["']ioswrapper["'][^>]*>(.*)</div>$"#);
    let body = match ios_wrapper.captures(body) {
        Some(inner) => inner[1].trim().to_string(),
        None => body.to_string(),
    };

    format!(
        "{{% extends \"base/base.html\" %}}\n\n{{% block title %}}{}{{% endblock %}}\n\n{{% block content %}}\n{}\n{{% endblock %}}",
        title, body
    )
}

/// Collapse runs of blank lines to one and strip trailing whitespace.
pub fn clean_whitespace(content: &str) -> String {
    let collapsed = regex!(r"\n[ \t\r]*\n\s*\n").replace_all(content, "\n\n");
    let mut lines: Vec<&str> = collapsed.lines().map(str::trim_end).collect();
    while lines.last().is_some_and(|l| l.is_empty()) {
        lines.pop();
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Put the marker on the first line, or right after a leading `{% extends %}`.
fn add_marker(content: &str) -> String {
    if content.starts_with("{% extends") {
        match content.split_once('\n') {
            Some((extends, rest)) => format!("{}\n{}\n{}", extends, MARKER, rest),
            None => format!("{}\n{}\n", content, MARKER),
        }
    } else {
        format!("{}\n{}", MARKER, content)
    }
}

/// Full rewrite of one template. `None` when the file is already converted.
///
/// `is_index_page` selects the `<body>` to `{% extends %}` wrapping.
pub fn convert_template(content: &str, file_name: &str, is_index_page: bool) -> Option<String> {
    if is_converted(content) {
        return None;
    }

    let mut out = convert_includes(content);
    out = convert_commented_includes(&out);
    out = convert_static_references(&out);
    out = remove_php_blocks(&out);
    if is_index_page {
        out = wrap_in_base(&out, file_name);
    }
    out = clean_whitespace(&out);
    Some(add_marker(&out))
}

// ============================================================================
// Batch run
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct ConvertOptions {
    pub dry_run: bool,
    pub backup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// Rewritten (or would be, in a dry run).
    Converted,
    /// Already carries a conversion marker.
    AlreadyConverted,
    Failed(String),
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: FileStatus,
}

#[derive(Debug, Default)]
pub struct ConversionReport {
    pub files: Vec<FileOutcome>,
    pub backup_dir: Option<PathBuf>,
    pub dry_run: bool,
}

impl ConversionReport {
    fn count(&self, wanted: fn(&FileStatus) -> bool) -> usize {
        self.files.iter().filter(|f| wanted(&f.status)).count()
    }

    pub fn converted(&self) -> usize {
        self.count(|s| *s == FileStatus::Converted)
    }

    pub fn already_converted(&self) -> usize {
        self.count(|s| *s == FileStatus::AlreadyConverted)
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, FileStatus::Failed(_)))
    }
}

fn is_index_page(path: &Path) -> bool {
    path.file_name().is_some_and(|n| n == "index.html")
        && path
            .parent()
            .and_then(Path::file_name)
            .is_some_and(|n| n == "pages")
}

fn convert_file(path: &Path, dry_run: bool) -> Result<FileStatus, MigrationError> {
    let content = std::fs::read_to_string(path).map_err(|e| MigrationError::io(path, e))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(converted) = convert_template(&content, &file_name, is_index_page(path)) else {
        return Ok(FileStatus::AlreadyConverted);
    };

    if !dry_run {
        std::fs::write(path, converted).map_err(|e| MigrationError::io(path, e))?;
    }
    Ok(FileStatus::Converted)
}

/// Convert every `*.html` under `templates_dir`.
///
/// A missing directory is fatal; a file that cannot be read or written is
/// recorded as failed and the batch continues.
pub fn run(templates_dir: &Path, options: ConvertOptions) -> Result<ConversionReport, MigrationError> {
    if !templates_dir.is_dir() {
        return Err(MigrationError::TemplatesDirNotFound(templates_dir.to_path_buf()));
    }

    let mut report = ConversionReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    if options.backup && !options.dry_run {
        let backup_dir = sibling_dir(templates_dir, BACKUP_SUFFIX);
        if backup_once(templates_dir, &backup_dir)? {
            report.backup_dir = Some(backup_dir);
        }
    }

    let mut paths: Vec<PathBuf> = WalkDir::new(templates_dir)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "html"))
        .collect();
    paths.sort();

    for path in paths {
        let status = match convert_file(&path, options.dry_run) {
            Ok(status) => status,
            Err(e) => {
                tracing::error!("Error converting {}: {}", path.display(), e);
                FileStatus::Failed(e.to_string())
            }
        };
        match &status {
            FileStatus::Converted if options.dry_run => tracing::info!("Would convert: {}", path.display()),
            FileStatus::Converted => tracing::info!("Converted: {}", path.display()),
            FileStatus::AlreadyConverted => tracing::debug!("Already converted: {}", path.display()),
            FileStatus::Failed(_) => {}
        }
        report.files.push(FileOutcome { path, status });
    }

    Ok(report)
}
