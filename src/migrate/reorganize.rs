//! Move flat template files into the categorized folder layout.

use super::{backup_once, sibling_dir, tree_lines, MigrationError};
use std::path::{Path, PathBuf};

pub const BACKUP_SUFFIX: &str = "_backup";

pub const FOLDERS: &[&str] = &["base", "components", "sections", "pages", "forms", "data"];

/// Target folder and the flat file names that belong in it.
pub const LAYOUT: &[(&str, &[&str])] = &[
    ("base", &["head.html"]),
    (
        "components",
        &["hero.html", "carousel.html", "floatbutton.html", "preloader.html", "beatlesmenu.html"],
    ),
    (
        "sections",
        &[
            "about.html",
            "portfolio.html",
            "services.html",
            "partners.html",
            "examples.html",
            "theteam.html",
            "footer.html",
        ],
    ),
    ("pages", &["index.html", "blog.html", "contactus.html", "emailsent.html"]),
    ("forms", &["send_mail.html"]),
    ("data", &["JSON.html", "geo-zip-codes.html"]),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct ReorganizeOptions {
    pub dry_run: bool,
    pub backup: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub from: PathBuf,
    pub to: PathBuf,
}

#[derive(Debug, Default)]
pub struct ReorganizeReport {
    pub dry_run: bool,
    pub backup_dir: Option<PathBuf>,
    pub created_folders: Vec<PathBuf>,
    /// Moves performed, or planned in a dry run.
    pub moves: Vec<Move>,
    /// Listed files not present at the top level.
    pub missing: Vec<PathBuf>,
    /// Files left in place because the destination already exists.
    pub conflicts: Vec<Move>,
    /// Final layout; empty for a dry run.
    pub tree: Vec<String>,
}

pub fn run(templates_dir: &Path, options: ReorganizeOptions) -> Result<ReorganizeReport, MigrationError> {
    if !templates_dir.is_dir() {
        return Err(MigrationError::TemplatesDirNotFound(templates_dir.to_path_buf()));
    }

    let mut report = ReorganizeReport {
        dry_run: options.dry_run,
        ..Default::default()
    };

    if options.backup && !options.dry_run {
        let backup_dir = sibling_dir(templates_dir, BACKUP_SUFFIX);
        if backup_once(templates_dir, &backup_dir)? {
            report.backup_dir = Some(backup_dir);
        }
    }

    for folder in FOLDERS {
        let path = templates_dir.join(folder);
        if path.is_dir() {
            continue;
        }
        if !options.dry_run {
            std::fs::create_dir_all(&path).map_err(|e| MigrationError::io(&path, e))?;
        }
        report.created_folders.push(path);
    }

    for (folder, files) in LAYOUT {
        for file in *files {
            let planned = Move {
                from: templates_dir.join(file),
                to: templates_dir.join(folder).join(file),
            };

            if !planned.from.is_file() {
                tracing::warn!("Template not found: {}", planned.from.display());
                report.missing.push(planned.from);
                continue;
            }
            if planned.to.exists() {
                tracing::warn!(
                    "Not moving {}: {} already exists",
                    planned.from.display(),
                    planned.to.display()
                );
                report.conflicts.push(planned);
                continue;
            }

            if options.dry_run {
                tracing::info!("Would move: {} -> {}", planned.from.display(), planned.to.display());
            } else {
                std::fs::rename(&planned.from, &planned.to)
                    .map_err(|e| MigrationError::io(&planned.from, e))?;
                tracing::info!("Moved: {} -> {}", planned.from.display(), planned.to.display());
            }
            report.moves.push(planned);
        }
    }

    if !options.dry_run {
        report.tree = tree_lines(templates_dir)?;
    }
    Ok(report)
}
