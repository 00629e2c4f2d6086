// Convert legacy PHP-include templates to askama templates
//
// Usage: cargo run --bin convert_templates -- [--dry-run] [--no-backup] [--templates-dir templates]

use clap::Parser;
use lit_site::migrate::convert::{self, ConvertOptions, FileStatus};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(about = "Convert PHP templates to askama templates")]
struct Cli {
    /// Show what would be converted without writing files
    #[arg(long)]
    dry_run: bool,

    /// Skip the `<templates-dir>_php_backup` copy
    #[arg(long)]
    no_backup: bool,

    #[arg(long, default_value = "templates")]
    templates_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    lit_site::init_tracing();
    let cli = Cli::parse();

    println!("Starting PHP to askama template conversion...");
    let report = convert::run(
        &cli.templates_dir,
        ConvertOptions {
            dry_run: cli.dry_run,
            backup: !cli.no_backup,
        },
    )?;

    if let Some(backup) = &report.backup_dir {
        println!("Created backup at: {}", backup.display());
    }
    for file in &report.files {
        match &file.status {
            FileStatus::Converted if report.dry_run => println!("Would convert: {}", file.path.display()),
            FileStatus::Converted => println!("Converted: {}", file.path.display()),
            FileStatus::AlreadyConverted => {}
            FileStatus::Failed(e) => println!("Error converting {}: {}", file.path.display(), e),
        }
    }

    if report.dry_run {
        println!("DRY RUN - Would convert {} files", report.converted());
    } else {
        println!("Converted {} template files!", report.converted());
    }
    println!(
        "{} already converted, {} failed",
        report.already_converted(),
        report.failed()
    );

    Ok(())
}
