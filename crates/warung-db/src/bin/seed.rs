//! # Development Database Bootstrapper
//!
//! Creates (or opens) a ledger database file, applies migrations, inserts
//! the seed data into empty tables, and prints a health summary.
//!
//! ## Usage
//! ```bash
//! # Default path (./warung_dev.db)
//! cargo run -p warung-db --bin seed
//!
//! # Specify database path
//! cargo run -p warung-db --bin seed -- --db ./data/warung.db
//! ```

use std::env;

use warung_db::{DbConfig, Ledger};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./warung_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Warung POS Database Bootstrapper");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./warung_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Warung POS Database Bootstrapper");
    println!("===================================");
    println!("Database: {}", db_path);
    println!();

    // Opening runs migrations and seeds empty tables
    let ledger = Ledger::open(DbConfig::new(&db_path)).await?;

    println!("✓ Connected to database");

    let (total, applied) =
        warung_db::migrations::migration_status(ledger.database().pool()).await?;
    println!("✓ Migrations applied ({applied}/{total})");

    let menu_count = ledger.database().menu().count().await?;
    let payment_count = ledger.database().payments().count().await?;
    println!("✓ Menu items: {menu_count}");
    println!("✓ Payments:   {payment_count}");

    // Verify search over the seeded catalog
    println!();
    println!("Verifying catalog search...");
    let results = ledger.search_menu_items("gudeg").await;
    println!("  Search 'gudeg': {} result(s)", results.len());
    let results = ledger.search_menu_items("Minuman").await;
    println!("  Search 'Minuman': {} result(s)", results.len());

    let report = ledger.daily_report_today().await;
    println!();
    println!(
        "Today ({}): {} transaction(s), revenue {}, average {}",
        report.date, report.transactions, report.revenue, report.average
    );

    ledger.close().await;

    println!();
    println!("✓ Ledger ready!");

    Ok(())
}
