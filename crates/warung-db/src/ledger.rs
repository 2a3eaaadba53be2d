//! # Ledger Facade
//!
//! The public face of the Restaurant Ledger Store: every catalog,
//! payment, and report operation the presentation layer calls, with
//! soft-failure semantics.
//!
//! ## Soft Failure
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Failure Semantics                                    │
//! │                                                                         │
//! │  Repository layer        DbResult<T>  ← typed errors, `?` friendly      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Ledger (THIS MODULE)                                                   │
//! │  ├── traps every DbError                                                │
//! │  ├── logs a diagnostic via tracing                                      │
//! │  └── returns the operation's failure value:                             │
//! │        writes   → false                                                 │
//! │        creates  → None (no id)                                          │
//! │        queries  → empty Vec                                             │
//! │        reports  → all-zero report                                       │
//! │                                                                         │
//! │  No error escapes, no operation retries, no operation is fatal.         │
//! │  The presentation layer decides what to surface.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Invariant validation happens here, before any SQL: a payment with an
//! empty customer name or a non-positive total, or a menu item with an
//! empty name/category or negative price, is rejected without touching
//! the database.
//!
//! Each operation commits its own unit of work; nothing spans two public
//! calls. Construction is the one place that returns `Result`, since
//! without a store there is nothing to fail softly through.

use chrono::{NaiveDate, Utc};
use tracing::{error, warn};

use crate::error::{DbError, DbResult};
use crate::pool::{Database, DbConfig};
use warung_core::validation::{
    validate_category, validate_customer_name, validate_menu_name, validate_price,
    validate_total_amount,
};
use warung_core::{DailyReport, MenuItem, MethodBreakdown, Money, NewMenuItem, NewPayment, Payment};

/// The Restaurant Ledger Store.
///
/// Owns the database handle for the process lifetime and exposes the
/// operation contracts the presentation layer is written against.
///
/// ## Usage
/// ```rust,ignore
/// let ledger = Ledger::open(DbConfig::new("./warung.db")).await?;
///
/// let id = ledger.add_payment("Budi", Money::from_rupiah(25_000), "Tunai", "").await;
/// let report = ledger.daily_report_today().await;
///
/// ledger.close().await;
/// ```
#[derive(Debug, Clone)]
pub struct Ledger {
    db: Database,
}

impl Ledger {
    /// Opens the ledger: connects, enables foreign keys, creates the
    /// schema idempotently, and seeds empty tables.
    ///
    /// Re-opening an existing populated store re-runs none of the seed
    /// inserts.
    pub async fn open(config: DbConfig) -> DbResult<Self> {
        let db = Database::new(config).await?;
        Ok(Ledger { db })
    }

    /// The underlying database handle, for callers that want the
    /// repositories' typed errors instead of soft failures.
    pub fn database(&self) -> &Database {
        &self.db
    }

    /// Releases the connection pool. Call exactly once, on shutdown;
    /// every prior write is already committed.
    pub async fn close(&self) {
        self.db.close().await;
    }

    // =========================================================================
    // Menu operations
    // =========================================================================

    /// All menu items, ordered by (category, name) ascending.
    /// Empty on error (logged) as well as on an empty catalog.
    pub async fn list_menu_items(&self) -> Vec<MenuItem> {
        self.db
            .menu()
            .list()
            .await
            .unwrap_or_else(|e| soft_empty("listing menu items", e))
    }

    /// Adds a menu item. Returns `false` on invalid input or storage
    /// failure (both logged), `true` otherwise.
    pub async fn add_menu_item(
        &self,
        name: &str,
        category: &str,
        price: Money,
        description: &str,
        available: bool,
    ) -> bool {
        let item = NewMenuItem {
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
            available,
        };

        soft_write("adding menu item", async {
            validate_menu_item(&item)?;
            self.db.menu().insert(&item).await.map(|_| ())
        })
        .await
    }

    /// Replaces all mutable fields of a menu item.
    ///
    /// Updating an id that does not exist affects nothing and still
    /// reports `true` - zero rows is not a storage failure. Callers that
    /// need the distinction use [`crate::MenuRepository::update`].
    pub async fn update_menu_item(
        &self,
        id: i64,
        name: &str,
        category: &str,
        price: Money,
        description: &str,
        available: bool,
    ) -> bool {
        let item = NewMenuItem {
            name: name.to_string(),
            category: category.to_string(),
            price,
            description: description.to_string(),
            available,
        };

        soft_write("updating menu item", async {
            validate_menu_item(&item)?;
            self.db.menu().update(id, &item).await.map(|_| ())
        })
        .await
    }

    /// Deletes a menu item. Idempotent under the same zero-rows policy
    /// as [`Ledger::update_menu_item`].
    pub async fn delete_menu_item(&self, id: i64) -> bool {
        soft_write(
            "deleting menu item",
            async { self.db.menu().delete(id).await.map(|_| ()) },
        )
        .await
    }

    /// Menu items whose name OR category contains `term`, ordered like
    /// [`Ledger::list_menu_items`]. An empty term matches everything.
    pub async fn search_menu_items(&self, term: &str) -> Vec<MenuItem> {
        self.db
            .menu()
            .search(term)
            .await
            .unwrap_or_else(|e| soft_empty("searching menu items", e))
    }

    // =========================================================================
    // Payment operations
    // =========================================================================

    /// Records a payment and returns its new id, or `None` on invalid
    /// input or storage failure (both logged).
    pub async fn add_payment(
        &self,
        customer_name: &str,
        total_amount: Money,
        payment_method: &str,
        notes: &str,
    ) -> Option<i64> {
        let payment = NewPayment::new(customer_name, total_amount, payment_method)
            .with_notes(notes);

        let result: DbResult<i64> = async {
            validate_payment(&payment)?;
            self.db.payments().insert(&payment).await
        }
        .await;

        match result {
            Ok(id) => Some(id),
            Err(e) => {
                log_failure("adding payment", &e);
                None
            }
        }
    }

    /// All payments, most recent order date first.
    pub async fn list_payments(&self) -> Vec<Payment> {
        self.db
            .payments()
            .list()
            .await
            .unwrap_or_else(|e| soft_empty("listing payments", e))
    }

    /// Replaces a payment's editable fields (customer name, total,
    /// method, notes). `order_date` and `payment_status` stay as
    /// created. Zero-rows policy as for menu updates.
    pub async fn update_payment(
        &self,
        id: i64,
        customer_name: &str,
        total_amount: Money,
        payment_method: &str,
        notes: &str,
    ) -> bool {
        let payment = NewPayment::new(customer_name, total_amount, payment_method)
            .with_notes(notes);

        soft_write("updating payment", async {
            validate_payment(&payment)?;
            self.db.payments().update(id, &payment).await.map(|_| ())
        })
        .await
    }

    /// Deletes a payment record.
    pub async fn delete_payment(&self, id: i64) -> bool {
        soft_write(
            "deleting payment",
            async { self.db.payments().delete(id).await.map(|_| ()) },
        )
        .await
    }

    /// Payments whose customer name contains `term`, or whose id in
    /// decimal form contains `term`. Ordered like
    /// [`Ledger::list_payments`].
    pub async fn search_payments(&self, term: &str) -> Vec<Payment> {
        self.db
            .payments()
            .search(term)
            .await
            .unwrap_or_else(|e| soft_empty("searching payments", e))
    }

    /// The payments of one calendar day, most recent first.
    pub async fn payments_on_date(&self, date: NaiveDate) -> Vec<Payment> {
        self.db
            .payments()
            .list_on(date)
            .await
            .unwrap_or_else(|e| soft_empty("listing payments by date", e))
    }

    // =========================================================================
    // Reports
    // =========================================================================

    /// Aggregate report over the payments of the given calendar day.
    /// A day without payments - and a storage failure (logged) - both
    /// yield the all-zero report.
    pub async fn daily_report(&self, date: NaiveDate) -> DailyReport {
        self.db
            .payments()
            .daily_report(date)
            .await
            .unwrap_or_else(|e| {
                log_failure("building daily report", &e);
                DailyReport::empty(date)
            })
    }

    /// [`Ledger::daily_report`] for the current UTC date.
    pub async fn daily_report_today(&self) -> DailyReport {
        self.daily_report(Utc::now().date_naive()).await
    }

    /// Per (calendar day, payment method) sales breakdown, date
    /// descending then method ascending.
    pub async fn method_breakdown(&self) -> Vec<MethodBreakdown> {
        self.db
            .payments()
            .method_breakdown()
            .await
            .unwrap_or_else(|e| soft_empty("building method breakdown", e))
    }
}

// =============================================================================
// Soft-failure plumbing
// =============================================================================

/// Runs a write operation, collapsing its outcome to a bool.
async fn soft_write(context: &str, op: impl std::future::Future<Output = DbResult<()>>) -> bool {
    match op.await {
        Ok(()) => true,
        Err(e) => {
            log_failure(context, &e);
            false
        }
    }
}

/// Logs a trapped failure and yields the empty result for queries.
fn soft_empty<T>(context: &str, e: DbError) -> Vec<T> {
    log_failure(context, &e);
    Vec::new()
}

/// Validation failures are caller mistakes, storage failures are not;
/// log them at different levels.
fn log_failure(context: &str, e: &DbError) {
    match e {
        DbError::Validation(v) => warn!(context, reason = %v, "Rejected invalid input"),
        _ => error!(context, error = %e, "Ledger operation failed"),
    }
}

fn validate_menu_item(item: &NewMenuItem) -> Result<(), DbError> {
    validate_menu_name(&item.name)?;
    validate_category(&item.category)?;
    validate_price(item.price)?;
    Ok(())
}

fn validate_payment(payment: &NewPayment) -> Result<(), DbError> {
    validate_customer_name(&payment.customer_name)?;
    validate_total_amount(payment.total_amount)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    async fn ledger() -> Ledger {
        Ledger::open(DbConfig::in_memory()).await.unwrap()
    }

    fn rp(amount: i64) -> Money {
        Money::from_rupiah(amount)
    }

    // -------------------------------------------------------------------------
    // Menu contract
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_menu_item_then_list_contains_it() {
        let ledger = ledger().await;

        assert!(
            ledger
                .add_menu_item("Bakso", "Makanan Utama", rp(14_000), "Bakso sapi", true)
                .await
        );

        let items = ledger.list_menu_items().await;
        let bakso = items.iter().find(|i| i.name == "Bakso").unwrap();
        assert_eq!(bakso.category, "Makanan Utama");
        assert_eq!(bakso.price.rupiah(), 14_000);
        assert!(items.iter().all(|i| i.id != bakso.id || i.name == "Bakso"));
    }

    #[tokio::test]
    async fn test_add_menu_item_rejects_invalid_input() {
        let ledger = ledger().await;

        assert!(!ledger.add_menu_item("", "Minuman", rp(1_000), "", true).await);
        assert!(!ledger.add_menu_item("Jus Alpukat", "", rp(1_000), "", true).await);
        assert!(
            !ledger
                .add_menu_item("Jus Alpukat", "Minuman", rp(-1), "", true)
                .await
        );
        assert_eq!(ledger.list_menu_items().await.len(), 9); // seeds only
    }

    #[tokio::test]
    async fn test_update_and_delete_menu_item_zero_rows_is_success() {
        let ledger = ledger().await;

        // Nonexistent id: nothing changes, still reported as success
        assert!(
            ledger
                .update_menu_item(99_999, "Ghost", "Minuman", rp(1_000), "", true)
                .await
        );
        assert!(ledger.delete_menu_item(99_999).await);
        assert_eq!(ledger.list_menu_items().await.len(), 9);

        // Deleting twice errors neither time
        let gudeg = ledger.search_menu_items("gudeg").await[0].id;
        assert!(ledger.delete_menu_item(gudeg).await);
        assert!(ledger.delete_menu_item(gudeg).await);
        assert_eq!(ledger.list_menu_items().await.len(), 8);
    }

    #[tokio::test]
    async fn test_search_menu_items_seeded_catalog() {
        let ledger = ledger().await;

        let gudeg = ledger.search_menu_items("gudeg").await;
        assert_eq!(gudeg.len(), 1);
        assert_eq!(gudeg[0].name, "Nasi Gudeg");
        assert_eq!(gudeg[0].category, "Makanan Utama");
        assert_eq!(gudeg[0].price.rupiah(), 15_000);

        let beverages = ledger.search_menu_items("Minuman").await;
        assert_eq!(beverages.len(), 3);
        assert!(beverages.iter().all(|i| i.category == "Minuman"));

        // Empty term is a literal substring match on everything
        assert_eq!(ledger.search_menu_items("").await.len(), 9);
    }

    // -------------------------------------------------------------------------
    // Payment contract
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_add_payment_then_list_contains_exactly_it() {
        let ledger = ledger().await;

        let id = ledger
            .add_payment("Budi", rp(25_000), "Tunai", "")
            .await
            .unwrap();

        let payments = ledger.list_payments().await;
        assert_eq!(payments.len(), 1);
        assert_eq!(payments[0].id, id);
        assert_eq!(payments[0].customer_name, "Budi");
        assert_eq!(payments[0].total_amount.rupiah(), 25_000);
        assert_eq!(payments[0].payment_method, "Tunai");
        assert_eq!(payments[0].payment_status, "Completed");
    }

    #[tokio::test]
    async fn test_add_payment_rejects_invalid_input() {
        let ledger = ledger().await;

        assert!(ledger.add_payment("", rp(25_000), "Tunai", "").await.is_none());
        assert!(ledger.add_payment("Budi", rp(0), "Tunai", "").await.is_none());
        assert!(ledger.add_payment("Budi", rp(-5), "Tunai", "").await.is_none());
        assert!(ledger.list_payments().await.is_empty());
    }

    #[tokio::test]
    async fn test_list_payments_later_order_date_first() {
        let ledger = ledger().await;

        for (name, amount) in [("Budi", 10_000), ("Siti", 20_000), ("Agus", 30_000)] {
            ledger.add_payment(name, rp(amount), "Tunai", "").await.unwrap();
        }

        let payments = ledger.list_payments().await;
        for pair in payments.windows(2) {
            assert!(pair[0].order_date >= pair[1].order_date);
        }
    }

    #[tokio::test]
    async fn test_update_payment_roundtrip_and_delete() {
        let ledger = ledger().await;

        let id = ledger
            .add_payment("Budi", rp(25_000), "Tunai", "")
            .await
            .unwrap();

        assert!(
            ledger
                .update_payment(id, "Budi Santoso", rp(27_000), "QRIS", "tambah es teh")
                .await
        );
        let updated = &ledger.search_payments(&id.to_string()).await[0];
        assert_eq!(updated.customer_name, "Budi Santoso");
        assert_eq!(updated.total_amount.rupiah(), 27_000);
        assert_eq!(updated.payment_method, "QRIS");

        // Invalid edits are rejected and change nothing
        assert!(!ledger.update_payment(id, "", rp(27_000), "QRIS", "").await);
        assert!(!ledger.update_payment(id, "Budi", rp(0), "QRIS", "").await);

        assert!(ledger.delete_payment(id).await);
        assert!(ledger.list_payments().await.is_empty());
    }

    #[tokio::test]
    async fn test_search_payments_by_name_and_id() {
        let ledger = ledger().await;

        let budi = ledger.add_payment("Budi", rp(10_000), "Tunai", "").await.unwrap();
        ledger.add_payment("Siti", rp(20_000), "QRIS", "").await.unwrap();

        let by_name = ledger.search_payments("Bud").await;
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, budi);

        let by_id = ledger.search_payments(&budi.to_string()).await;
        assert!(by_id.iter().any(|p| p.id == budi));
    }

    // -------------------------------------------------------------------------
    // Reports
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_daily_report_zero_day_is_zeros_not_error() {
        let ledger = ledger().await;

        let report = ledger.daily_report("2001-01-01".parse().unwrap()).await;
        assert_eq!(report.transactions, 0);
        assert_eq!(report.revenue, Money::zero());
        assert_eq!(report.average, Money::zero());
    }

    #[tokio::test]
    async fn test_daily_report_today_counts_fresh_payments() {
        let ledger = ledger().await;

        ledger.add_payment("Budi", rp(10_000), "Tunai", "").await.unwrap();
        ledger.add_payment("Siti", rp(20_000), "QRIS", "").await.unwrap();

        let report = ledger.daily_report_today().await;
        assert_eq!(report.transactions, 2);
        assert_eq!(report.revenue.rupiah(), 30_000);
        assert_eq!(report.average.rupiah(), 15_000);

        let today = Utc::now().date_naive();
        assert_eq!(ledger.payments_on_date(today).await.len(), 2);
    }

    #[tokio::test]
    async fn test_method_breakdown_via_facade() {
        let ledger = ledger().await;

        ledger.add_payment("Budi", rp(10_000), "Tunai", "").await.unwrap();
        ledger.add_payment("Agus", rp(30_000), "Tunai", "").await.unwrap();
        ledger.add_payment("Siti", rp(20_000), "QRIS", "").await.unwrap();

        let rows = ledger.method_breakdown().await;
        assert_eq!(rows.len(), 2);
        let tunai = rows.iter().find(|r| r.payment_method == "Tunai").unwrap();
        assert_eq!(tunai.transactions, 2);
        assert_eq!(tunai.revenue.rupiah(), 40_000);
    }

    // -------------------------------------------------------------------------
    // Soft failure on storage errors
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_operations_soft_fail_after_close() {
        let ledger = ledger().await;
        ledger.close().await;

        // Storage is gone; every operation reports its failure value
        // instead of panicking or propagating.
        assert!(ledger.list_menu_items().await.is_empty());
        assert!(!ledger.add_menu_item("Bakso", "Makanan Utama", rp(14_000), "", true).await);
        assert!(ledger.add_payment("Budi", rp(25_000), "Tunai", "").await.is_none());
        assert!(ledger.list_payments().await.is_empty());
        assert!(!ledger.delete_payment(1).await);

        let report = ledger.daily_report_today().await;
        assert_eq!(report.transactions, 0);
        assert_eq!(report.revenue, Money::zero());
        assert_eq!(report.average, Money::zero());
    }

    #[tokio::test]
    async fn test_reopening_does_not_reseed() {
        // Two opens against the same file: second must not duplicate seeds.
        let path = std::env::temp_dir().join(format!(
            "warung-test-{}-{}.db",
            std::process::id(),
            Utc::now().timestamp_nanos_opt().unwrap_or_default()
        ));

        let first = Ledger::open(DbConfig::new(&path)).await.unwrap();
        let after_first = first.list_menu_items().await.len();
        first.close().await;

        let second = Ledger::open(DbConfig::new(&path)).await.unwrap();
        assert_eq!(second.list_menu_items().await.len(), after_first);
        assert_eq!(after_first, 9);
        second.close().await;

        let _ = std::fs::remove_file(&path);
    }
}
