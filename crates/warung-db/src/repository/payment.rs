//! # Payment Repository
//!
//! Database operations for payment transactions and their aggregates.
//!
//! ## Record Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Payment Lifecycle                                  │
//! │                                                                         │
//! │  1. CREATE                                                              │
//! │     └── insert() → id assigned, status "Completed", order_date = now    │
//! │                                                                         │
//! │  2. (OPTIONAL) EDIT                                                     │
//! │     └── update() → customer_name, total_amount, method, notes only;     │
//! │                    order_date and status are never rewritten            │
//! │                                                                         │
//! │  3. (OPTIONAL) REMOVE                                                   │
//! │     └── delete() → hard delete                                          │
//! │                                                                         │
//! │  There is no state machine: a payment is recorded after the fact,       │
//! │  already complete.                                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Aggregates (daily totals, per-method breakdown) select COUNT and SUM
//! and derive averages in Rust with integer money - SQL AVG would hand
//! back floats.

use chrono::{NaiveDate, Utc};
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;
use warung_core::{
    DailyReport, MethodBreakdown, Money, NewPayment, Payment, DEFAULT_PAYMENT_STATUS,
};

/// Columns of a full payment row, in struct field order.
const PAYMENT_COLUMNS: &str = "id, customer_id, customer_name, total_amount, payment_method, \
                               payment_status, order_date, notes";

/// Repository for payment database operations.
#[derive(Debug, Clone)]
pub struct PaymentRepository {
    pool: SqlitePool,
}

impl PaymentRepository {
    /// Creates a new PaymentRepository.
    pub fn new(pool: SqlitePool) -> Self {
        PaymentRepository { pool }
    }

    /// Inserts a new payment and returns the assigned id.
    ///
    /// The store assigns the id, sets `payment_status` to
    /// [`DEFAULT_PAYMENT_STATUS`], stamps `order_date` with the current
    /// UTC time, and leaves `customer_id` unset - the denormalized
    /// `customer_name` on the record is the authoritative copy.
    pub async fn insert(&self, payment: &NewPayment) -> DbResult<i64> {
        debug!(
            customer = %payment.customer_name,
            amount = %payment.total_amount,
            method = %payment.payment_method,
            "Inserting payment"
        );

        let now = Utc::now();
        let result = sqlx::query(
            r#"
            INSERT INTO payments (customer_name, total_amount, payment_method,
                                  payment_status, order_date, notes)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
        )
        .bind(&payment.customer_name)
        .bind(payment.total_amount)
        .bind(&payment.payment_method)
        .bind(DEFAULT_PAYMENT_STATUS)
        .bind(now)
        .bind(&payment.notes)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Lists all payments, most recent order first.
    ///
    /// Same-instant orders tie-break on id descending so the listing is
    /// deterministic.
    pub async fn list(&self) -> DbResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments ORDER BY order_date DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Searches payments by substring of the customer name OR of the
    /// decimal form of the id.
    ///
    /// Ordered identically to [`PaymentRepository::list`].
    pub async fn search(&self, term: &str) -> DbResult<Vec<Payment>> {
        debug!(term = %term, "Searching payments");

        let pattern = format!("%{term}%");
        let payments = sqlx::query_as::<_, Payment>(&format!(
            r#"
            SELECT {PAYMENT_COLUMNS}
            FROM payments
            WHERE customer_name LIKE ?1 OR CAST(id AS TEXT) LIKE ?1
            ORDER BY order_date DESC, id DESC
            "#
        ))
        .bind(&pattern)
        .fetch_all(&self.pool)
        .await?;

        debug!(count = payments.len(), "Payment search returned rows");
        Ok(payments)
    }

    /// Lists the payments whose order date falls on one calendar day,
    /// most recent first.
    pub async fn list_on(&self, date: NaiveDate) -> DbResult<Vec<Payment>> {
        let payments = sqlx::query_as::<_, Payment>(&format!(
            r#"
            SELECT {PAYMENT_COLUMNS}
            FROM payments
            WHERE DATE(order_date) = DATE(?1)
            ORDER BY order_date DESC, id DESC
            "#
        ))
        .bind(date)
        .fetch_all(&self.pool)
        .await?;

        Ok(payments)
    }

    /// Gets a payment by its ID.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<Payment>> {
        let payment = sqlx::query_as::<_, Payment>(&format!(
            "SELECT {PAYMENT_COLUMNS} FROM payments WHERE id = ?1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(payment)
    }

    /// Replaces the editable fields of an existing payment.
    ///
    /// `order_date` and `payment_status` are intentionally left alone:
    /// editing a transaction never moves it to another reporting day.
    ///
    /// ## Returns
    /// The number of rows affected: 0 means no such id existed.
    pub async fn update(&self, id: i64, payment: &NewPayment) -> DbResult<u64> {
        debug!(id, customer = %payment.customer_name, "Updating payment");

        let result = sqlx::query(
            r#"
            UPDATE payments
            SET customer_name = ?2, total_amount = ?3, payment_method = ?4, notes = ?5
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .bind(&payment.customer_name)
        .bind(payment.total_amount)
        .bind(&payment.payment_method)
        .bind(&payment.notes)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    /// Deletes a payment.
    ///
    /// ## Returns
    /// The number of rows affected: 0 means no such id existed.
    pub async fn delete(&self, id: i64) -> DbResult<u64> {
        debug!(id, "Deleting payment");

        let result = sqlx::query("DELETE FROM payments WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Aggregates the payments of one calendar day into a report.
    ///
    /// A day with no payments yields the all-zero report - COUNT is 0 and
    /// the SUM coalesces to 0, so there is never a NULL or a division
    /// error to handle downstream.
    pub async fn daily_report(&self, date: NaiveDate) -> DbResult<DailyReport> {
        let (transactions, revenue): (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COALESCE(SUM(total_amount), 0)
            FROM payments
            WHERE DATE(order_date) = DATE(?1)
            "#,
        )
        .bind(date)
        .fetch_one(&self.pool)
        .await?;

        Ok(DailyReport::from_totals(
            date,
            transactions,
            Money::from_rupiah(revenue),
        ))
    }

    /// Aggregates all payments per (calendar day, payment method).
    ///
    /// Rows are ordered date descending, then method ascending - the
    /// shape the full sales report prints.
    pub async fn method_breakdown(&self) -> DbResult<Vec<MethodBreakdown>> {
        let rows: Vec<(NaiveDate, String, i64, i64)> = sqlx::query_as(
            r#"
            SELECT DATE(order_date), payment_method, COUNT(*), COALESCE(SUM(total_amount), 0)
            FROM payments
            GROUP BY DATE(order_date), payment_method
            ORDER BY DATE(order_date) DESC, payment_method
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(date, payment_method, transactions, revenue)| {
                let revenue = Money::from_rupiah(revenue);
                MethodBreakdown {
                    date,
                    payment_method,
                    transactions,
                    revenue,
                    average: revenue.divided_by(transactions),
                }
            })
            .collect())
    }

    /// Counts payments (for diagnostics).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::{Database, DbConfig};

    async fn repo() -> PaymentRepository {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        db.payments()
    }

    fn payment(name: &str, amount: i64, method: &str) -> NewPayment {
        NewPayment::new(name, Money::from_rupiah(amount), method)
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_defaults() {
        let repo = repo().await;

        let id = repo.insert(&payment("Budi", 25_000, "Tunai")).await.unwrap();
        assert!(id > 0);

        let row = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.customer_name, "Budi");
        assert_eq!(row.total_amount.rupiah(), 25_000);
        assert_eq!(row.payment_method, "Tunai");
        assert_eq!(row.payment_status, DEFAULT_PAYMENT_STATUS);
        assert!(row.customer_id.is_none());
        assert!(row.notes.is_empty());
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let repo = repo().await;

        let first = repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();
        let second = repo.insert(&payment("Siti", 20_000, "QRIS")).await.unwrap();
        let third = repo.insert(&payment("Agus", 30_000, "Tunai")).await.unwrap();

        let listed = repo.list().await.unwrap();
        assert_eq!(listed.len(), 3);
        for pair in listed.windows(2) {
            assert!(pair[0].order_date >= pair[1].order_date);
        }
        // Same-instant inserts fall back to id order, newest first
        assert_eq!(
            listed.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![third, second, first]
        );
    }

    #[tokio::test]
    async fn test_search_matches_name_or_id_substring() {
        let repo = repo().await;

        let budi = repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();
        repo.insert(&payment("Siti", 20_000, "QRIS")).await.unwrap();

        let by_name = repo.search("udi").await.unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, budi);

        let by_id = repo.search(&budi.to_string()).await.unwrap();
        assert!(by_id.iter().any(|p| p.id == budi));

        let none = repo.search("Joko").await.unwrap();
        assert!(none.is_empty());
    }

    #[tokio::test]
    async fn test_update_replaces_editable_fields_only() {
        let repo = repo().await;

        let id = repo.insert(&payment("Budi", 25_000, "Tunai")).await.unwrap();
        let original = repo.get_by_id(id).await.unwrap().unwrap();

        let edited = NewPayment::new("Budi Santoso", Money::from_rupiah(27_000), "Kartu Debit")
            .with_notes("tambah kerupuk");
        assert_eq!(repo.update(id, &edited).await.unwrap(), 1);

        let row = repo.get_by_id(id).await.unwrap().unwrap();
        assert_eq!(row.customer_name, "Budi Santoso");
        assert_eq!(row.total_amount.rupiah(), 27_000);
        assert_eq!(row.payment_method, "Kartu Debit");
        assert_eq!(row.notes, "tambah kerupuk");
        // Untouched by updates
        assert_eq!(row.order_date, original.order_date);
        assert_eq!(row.payment_status, original.payment_status);
    }

    #[tokio::test]
    async fn test_update_and_delete_nonexistent_affect_zero_rows() {
        let repo = repo().await;

        let edited = payment("Ghost", 1_000, "Tunai");
        assert_eq!(repo.update(99_999, &edited).await.unwrap(), 0);
        assert_eq!(repo.delete(99_999).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let repo = repo().await;

        let id = repo.insert(&payment("Budi", 25_000, "Tunai")).await.unwrap();
        assert_eq!(repo.delete(id).await.unwrap(), 1);
        assert!(repo.get_by_id(id).await.unwrap().is_none());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_daily_report_aggregates_today() {
        let repo = repo().await;

        repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();
        repo.insert(&payment("Siti", 20_000, "QRIS")).await.unwrap();
        repo.insert(&payment("Agus", 31_000, "Tunai")).await.unwrap();

        let today = Utc::now().date_naive();
        let report = repo.daily_report(today).await.unwrap();
        assert_eq!(report.transactions, 3);
        assert_eq!(report.revenue.rupiah(), 61_000);
        // Integer average truncates: 61000 / 3 = 20333
        assert_eq!(report.average.rupiah(), 20_333);
    }

    #[tokio::test]
    async fn test_daily_report_empty_day_is_all_zeros() {
        let repo = repo().await;

        repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();

        let empty_day: NaiveDate = "2001-01-01".parse().unwrap();
        let report = repo.daily_report(empty_day).await.unwrap();
        assert_eq!(report.transactions, 0);
        assert_eq!(report.revenue, Money::zero());
        assert_eq!(report.average, Money::zero());
    }

    #[tokio::test]
    async fn test_list_on_filters_by_calendar_day() {
        let repo = repo().await;

        repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();
        repo.insert(&payment("Siti", 20_000, "QRIS")).await.unwrap();

        let today = Utc::now().date_naive();
        assert_eq!(repo.list_on(today).await.unwrap().len(), 2);

        let empty_day: NaiveDate = "2001-01-01".parse().unwrap();
        assert!(repo.list_on(empty_day).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_method_breakdown_groups_by_method() {
        let repo = repo().await;

        repo.insert(&payment("Budi", 10_000, "Tunai")).await.unwrap();
        repo.insert(&payment("Agus", 30_000, "Tunai")).await.unwrap();
        repo.insert(&payment("Siti", 20_000, "QRIS")).await.unwrap();

        let rows = repo.method_breakdown().await.unwrap();
        assert_eq!(rows.len(), 2);

        let today = Utc::now().date_naive();
        let qris = rows.iter().find(|r| r.payment_method == "QRIS").unwrap();
        assert_eq!(qris.date, today);
        assert_eq!(qris.transactions, 1);
        assert_eq!(qris.revenue.rupiah(), 20_000);

        let tunai = rows.iter().find(|r| r.payment_method == "Tunai").unwrap();
        assert_eq!(tunai.transactions, 2);
        assert_eq!(tunai.revenue.rupiah(), 40_000);
        assert_eq!(tunai.average.rupiah(), 20_000);
    }
}
