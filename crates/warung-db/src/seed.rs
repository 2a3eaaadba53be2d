//! # Seed Data
//!
//! Fixed starting data for a fresh ledger: a small menu spanning three
//! categories and a handful of regular customers.
//!
//! Seeding is deliberately NOT a migration: a migration runs once ever,
//! while the seed must re-check emptiness on every startup so that a
//! ledger whose rows were deleted on purpose stays empty, and a populated
//! ledger is never touched.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::error::DbResult;

/// Initial menu: (name, category, price in rupiah, description).
/// All items start out available.
const SEED_MENU_ITEMS: &[(&str, &str, i64, &str)] = &[
    ("Nasi Gudeg", "Makanan Utama", 15_000, "Nasi dengan gudeg khas Yogyakarta"),
    ("Ayam Geprek", "Makanan Utama", 18_000, "Ayam goreng geprek dengan sambal"),
    ("Soto Ayam", "Makanan Utama", 12_000, "Soto ayam dengan kuah bening"),
    ("Gado-gado", "Makanan Utama", 10_000, "Salad Indonesia dengan bumbu kacang"),
    ("Es Teh Manis", "Minuman", 3_000, "Teh manis dingin"),
    ("Es Jeruk", "Minuman", 5_000, "Jus jeruk segar"),
    ("Kopi Hitam", "Minuman", 4_000, "Kopi hitam panas"),
    ("Kerupuk", "Tambahan", 2_000, "Kerupuk renyah"),
    ("Sambal Extra", "Tambahan", 1_000, "Sambal pedas tambahan"),
];

/// Initial customer directory: (name, phone, email, address).
const SEED_CUSTOMERS: &[(&str, &str, &str, &str)] = &[
    ("John Doe", "081234567890", "john@email.com", "Jl. Merdeka No. 1"),
    ("Jane Smith", "081234567891", "jane@email.com", "Jl. Sudirman No. 2"),
    ("Ahmad Rahman", "081234567892", "ahmad@email.com", "Jl. Thamrin No. 3"),
    ("Siti Nurhaliza", "081234567893", "siti@email.com", "Jl. Gatot Subroto No. 4"),
];

/// Inserts the seed rows into any table that is currently empty.
///
/// Idempotent: re-running against a populated ledger inserts nothing, so
/// repeated startups never duplicate the starting data.
pub async fn seed_if_empty(pool: &SqlitePool) -> DbResult<()> {
    seed_menu_if_empty(pool).await?;
    seed_customers_if_empty(pool).await?;
    Ok(())
}

async fn seed_menu_if_empty(pool: &SqlitePool) -> DbResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        debug!(count, "Menu already populated, skipping seed");
        return Ok(());
    }

    let now = Utc::now();
    for (name, category, price, description) in SEED_MENU_ITEMS {
        sqlx::query(
            r#"
            INSERT INTO menu_items (name, category, price, description, available, created_at)
            VALUES (?1, ?2, ?3, ?4, 1, ?5)
            "#,
        )
        .bind(name)
        .bind(category)
        .bind(price)
        .bind(description)
        .bind(now)
        .execute(pool)
        .await?;
    }

    info!(items = SEED_MENU_ITEMS.len(), "Seeded menu catalog");
    Ok(())
}

async fn seed_customers_if_empty(pool: &SqlitePool) -> DbResult<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        debug!(count, "Customers already populated, skipping seed");
        return Ok(());
    }

    let now = Utc::now();
    for (name, phone, email, address) in SEED_CUSTOMERS {
        sqlx::query(
            r#"
            INSERT INTO customers (name, phone, email, address, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(name)
        .bind(phone)
        .bind(email)
        .bind(address)
        .bind(now)
        .execute(pool)
        .await?;
    }

    info!(customers = SEED_CUSTOMERS.len(), "Seeded customer directory");
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn counts(pool: &SqlitePool) -> (i64, i64) {
        let menu: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(pool)
            .await
            .unwrap();
        let customers: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customers")
            .fetch_one(pool)
            .await
            .unwrap();
        (menu, customers)
    }

    #[tokio::test]
    async fn test_seed_populates_empty_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let (menu, customers) = counts(db.pool()).await;
        assert_eq!(menu, 9);
        assert_eq!(customers, 4);
    }

    #[tokio::test]
    async fn test_seed_twice_does_not_duplicate() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        seed_if_empty(db.pool()).await.unwrap();
        seed_if_empty(db.pool()).await.unwrap();

        let (menu, customers) = counts(db.pool()).await;
        assert_eq!(menu, 9);
        assert_eq!(customers, 4);
    }

    #[tokio::test]
    async fn test_seed_respects_deliberately_emptied_menu_rows() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        // A menu that still has any row is left alone entirely.
        sqlx::query("DELETE FROM menu_items WHERE category = 'Minuman'")
            .execute(db.pool())
            .await
            .unwrap();
        seed_if_empty(db.pool()).await.unwrap();

        let (menu, _) = counts(db.pool()).await;
        assert_eq!(menu, 6);
    }

    #[tokio::test]
    async fn test_seed_disabled_leaves_store_empty() {
        let db = Database::new(DbConfig::in_memory().seed_on_connect(false))
            .await
            .unwrap();

        let (menu, customers) = counts(db.pool()).await;
        assert_eq!(menu, 0);
        assert_eq!(customers, 0);
    }
}
