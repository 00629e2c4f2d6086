// Move flat templates into base/, components/, sections/, pages/, forms/ and data/
//
// Usage: cargo run --bin reorganize_templates -- [--dry-run] [--no-backup] [--templates-dir templates]

use clap::Parser;
use lit_site::migrate::reorganize::{self, ReorganizeOptions};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Reorganize templates into the categorized folder structure")]
struct Cli {
    /// Show what would be moved without moving files
    #[arg(long)]
    dry_run: bool,

    /// Skip the `<templates-dir>_backup` copy
    #[arg(long)]
    no_backup: bool,

    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    lit_site::init_tracing();
    let cli = Cli::parse();

    println!("Starting template reorganization...");
    let report = reorganize::run(
        &cli.templates_dir,
        ReorganizeOptions {
            dry_run: cli.dry_run,
            backup: !cli.no_backup,
        },
    )?;

    if let Some(backup) = &report.backup_dir {
        println!("Created backup at: {}", backup.display());
    }
    let (create, move_) = if report.dry_run {
        ("Would create folder", "Would move")
    } else {
        ("Created folder", "Moved")
    };
    for folder in &report.created_folders {
        println!("{}: {}", create, folder.display());
    }
    for planned in &report.moves {
        println!("{}: {} -> {}", move_, planned.from.display(), planned.to.display());
    }
    for conflict in &report.conflicts {
        println!("Skipped (destination exists): {}", conflict.to.display());
    }
    for missing in &report.missing {
        println!("Template not found: {}", missing.display());
    }

    if report.dry_run {
        println!("DRY RUN - No files were actually moved");
    } else {
        println!("\nFinal template structure:");
        for line in &report.tree {
            println!("{}", line);
        }
        println!("Template reorganization complete!");
    }

    Ok(())
}
