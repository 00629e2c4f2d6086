// Seed the content store with the site's initial copy
//
// Usage: cargo run --bin populate_content [-- --database-url sqlite://lit_site.db?mode=rwc]
// Safe to re-run: existing records are skipped.

use clap::Parser;
use lit_site::config::DEFAULT_DATABASE_URL;
use lit_site::storage::{self, seed};

#[derive(Debug, Parser)]
#[command(about = "Populate the database with the initial homepage content")]
struct Cli {
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    database_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    lit_site::init_tracing();
    let cli = Cli::parse();

    println!("Starting content population...");
    let db = storage::init_db(&cli.database_url).await?;
    let report = seed::populate(&db).await?;

    for outcome in &report.outcomes {
        match (outcome.status, outcome.note) {
            (seed::SeedStatus::Created, Some(note)) => println!("  [OK] {} created ({})", outcome.label, note),
            (seed::SeedStatus::Created, None) => println!("  [OK] {} created", outcome.label),
            (seed::SeedStatus::Skipped, _) => println!("  [SKIP] {} already exists", outcome.label),
        }
    }

    println!(
        "\n[DONE] Content population complete: {} created, {} skipped",
        report.created(),
        report.skipped()
    );
    println!("\n[IMPORTANT] Images still need uploading through /admin/api/media for:");
    for pending in seed::PENDING_UPLOADS {
        println!("   - {}", pending);
    }

    Ok(())
}
