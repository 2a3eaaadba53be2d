//! # Menu Repository
//!
//! Database operations for the menu catalog.
//!
//! ## Search
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    How Menu Search Works                                │
//! │                                                                         │
//! │  User types: "gudeg"                                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  LIKE '%gudeg%' against name OR category                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────┐                            │
//! │  │ Nasi Gudeg   | Makanan Utama | 15000    │ ← MATCH (name)             │
//! │  │ Ayam Geprek  | Makanan Utama | 18000    │                            │
//! │  │ Es Teh Manis | Minuman       |  3000    │                            │
//! │  └─────────────────────────────────────────┘                            │
//! │                                                                         │
//! │  An empty term yields '%%', which matches every row - the caller        │
//! │  treats empty input as "list all" and that is literally what the        │
//! │  pattern does. Matching follows SQLite's default LIKE collation         │
//! │  (ASCII case-insensitive); `%`/`_` in the term are not escaped.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use warung_core::{MenuItem, NewMenuItem};

/// Columns of a full menu item row, in struct field order.
const MENU_COLUMNS: &str = "id, name, category, price, description, available, created_at";

/// Repository for menu catalog database operations.
///
/// ## Usage
/// ```rust,ignore
/// let repo = MenuRepository::new(pool);
///
/// // Search the catalog
/// let results = repo.search("gudeg").await?;
///
/// // Get by ID
/// let item = repo.get_by_id(3).await?;
/// ```
#[derive(Debug, Clone)]
pub struct MenuRepository {
    pool: SqlitePool,
}

impl MenuRepository {
    /// Creates a new MenuRepository.
    pub fn new(pool: SqlitePool) -> Self {
        MenuRepository { pool }
    }

    /// Lists the whole catalog, ordered by (category, name) ascending.
    ///
    /// An empty catalog yields an empty vec, never an error.
    pub async fn list(&self) -> DbResult<Vec<MenuItem>> {
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu_items ORDER BY category, name"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(items)
    }

    /// Searches the catalog by substring of name OR category.
    ///
    /// Ordered identically to [`MenuRepository::list`].
    pub async fn search(&self, term: &str) -> DbResult<Vec<MenuItem>> {
        debug!(term = %term, "Searching menu items");

        let pattern = format!("%{term}%");
        let items = sqlx::query_as::<_, MenuItem>(&format!(
            r#"
            SELECT {MENU_COLUMNS}
            FROM menu_items
            WHERE name LIKE ?1 OR category LIKE ?1
            ORDER BY category, name
            "#
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = items.len(), "Menu search returned items");
        Ok(items)
    }

    /// Gets a menu item by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(MenuItem))` - Item found
    /// * `Ok(None)` - Item not found
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<MenuItem>> {
        let item = sqlx::query_as::<_, MenuItem>(&format!(
            "SELECT {MENU_COLUMNS} FROM menu_items WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(item)
    }

    /// Inserts a new menu item and returns the assigned id.
    pub async fn insert(&self, item: &NewMenuItem) -> DbResult<i64> {
        debug!(name = %item.name, category = %item.category, "Inserting menu item");

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO menu_items (name, category, price, description, available, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.description)
        .bind(item.available)
        .bind(now)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Replaces all mutable fields of an existing menu item.
    ///
    /// ## Returns
    /// The number of rows affected: 0 means no such id existed. The id
    /// and created timestamp are never rewritten.
    pub async fn update(&self, id: i64, item: &NewMenuItem) -> DbResult<u64> {
        debug!(id, name = %item.name, "Updating menu item");

        let result = sqlx::query(
            r#"
            UPDATE menu_items
            SET name = ?2, category = ?3, price = ?4, description = ?5, available = ?6
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&item.name)
        .bind(&item.category)
        .bind(item.price)
        .bind(&item.description)
        .bind(item.available)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a menu item.
    ///
    /// Hard delete. Historical order lines that reference the item are
    /// neither removed nor blocked (the `order_items` table is dormant).
    ///
    /// ## Returns
    /// The number of rows affected: 0 means no such id existed.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting menu item");

        let result = sqlx::query("DELETE FROM menu_items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Counts menu items (for diagnostics and seeding checks).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM menu_items")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
