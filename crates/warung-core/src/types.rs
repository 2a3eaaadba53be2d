//! # Domain Types
//!
//! Core domain types used throughout Warung POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    MenuItem     │   │    Payment      │   │   OrderItem     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (i64)       │   │  id (i64)       │   │  id (i64)       │        │
//! │  │  name           │   │  customer_name  │   │  payment_id     │        │
//! │  │  category       │   │  total_amount   │   │  menu_item_id   │        │
//! │  │  price          │   │  payment_method │   │  quantity       │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Customer     │   │  DailyReport    │   │ PaymentMethod   │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id (i64)       │   │  transactions   │   │  Tunai          │        │
//! │  │  name, phone…   │   │  revenue, avg   │   │  KartuDebit …   │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Identities are SQLite `INTEGER PRIMARY KEY AUTOINCREMENT` values:
//! unique, immutable once assigned, and never reused after deletion.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Catalog Constants
// =============================================================================

/// Category suggestions offered by the presentation layer.
///
/// The category column itself is free-form text; this list only feeds the
/// editable dropdown in the menu form.
pub const MENU_CATEGORIES: &[&str] = &[
    "Makanan Utama",
    "Minuman",
    "Appetizer",
    "Dessert",
    "Tambahan",
    "Paket",
    "Promo",
];

/// Status a payment is created with. Nothing in the ledger transitions a
/// payment to any other status.
pub const DEFAULT_PAYMENT_STATUS: &str = "Completed";

// =============================================================================
// Menu Item
// =============================================================================

/// An entry in the menu catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct MenuItem {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,

    /// Display name shown to staff and on receipts.
    pub name: String,

    /// Free-form category (see [`MENU_CATEGORIES`] for suggestions).
    pub category: String,

    /// Price in whole rupiah. Never negative.
    pub price: Money,

    /// Optional longer description; empty string when unset.
    pub description: String,

    /// Whether the item is currently orderable.
    pub available: bool,

    /// When the item was created.
    pub created_at: DateTime<Utc>,
}

/// Field set for creating a menu item or replacing the mutable fields of
/// an existing one. The id and created timestamp are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub category: String,
    pub price: Money,
    pub description: String,
    pub available: bool,
}

impl NewMenuItem {
    /// Convenience constructor with the common defaults
    /// (empty description, available).
    pub fn new(name: impl Into<String>, category: impl Into<String>, price: Money) -> Self {
        NewMenuItem {
            name: name.into(),
            category: category.into(),
            price,
            description: String::new(),
            available: true,
        }
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer directory entry.
///
/// The ledger exposes no customer CRUD beyond initial seeding; payments
/// reference customers weakly (see [`Payment::customer_id`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Payment Method
// =============================================================================

/// The fixed set of payment methods offered by the payment form.
///
/// The ledger stores `payment_method` as plain text and does not enforce
/// this enumeration; it exists for callers that want the canonical list
/// (dropdowns, per-method reporting labels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Physical cash.
    Tunai,
    /// Debit card.
    KartuDebit,
    /// Credit card.
    KartuKredit,
    /// Bank transfer.
    TransferBank,
    /// E-wallet (GoPay, OVO, Dana, ...).
    EWallet,
    /// QRIS standardized QR payment.
    Qris,
}

impl PaymentMethod {
    /// All methods, in the order the payment form lists them.
    pub const ALL: [PaymentMethod; 6] = [
        PaymentMethod::Tunai,
        PaymentMethod::KartuDebit,
        PaymentMethod::KartuKredit,
        PaymentMethod::TransferBank,
        PaymentMethod::EWallet,
        PaymentMethod::Qris,
    ];

    /// The label stored in the `payment_method` column.
    pub const fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Tunai => "Tunai",
            PaymentMethod::KartuDebit => "Kartu Debit",
            PaymentMethod::KartuKredit => "Kartu Kredit",
            PaymentMethod::TransferBank => "Transfer Bank",
            PaymentMethod::EWallet => "E-Wallet",
            PaymentMethod::Qris => "QRIS",
        }
    }
}

impl std::fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Payment
// =============================================================================

/// A payment transaction record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Payment {
    /// Unique identifier, assigned by the store on creation.
    pub id: i64,

    /// Weak back-reference to a customer record. No ownership, no
    /// enforced integrity on delete; left unset by the payment form.
    pub customer_id: Option<i64>,

    /// Denormalized customer name captured directly on the payment.
    /// This, not `customer_id`, is the authoritative copy.
    pub customer_name: String,

    /// Transaction total in whole rupiah. Always positive.
    pub total_amount: Money,

    /// Payment method label (free text; see [`PaymentMethod`]).
    pub payment_method: String,

    /// Always [`DEFAULT_PAYMENT_STATUS`] for rows created by this ledger.
    pub payment_status: String,

    /// When the order was placed. Set at creation, never updated.
    pub order_date: DateTime<Utc>,

    /// Free-form notes; empty string when unset.
    pub notes: String,
}

/// Field set for creating a payment or replacing the mutable fields of an
/// existing one. Id, status, and order date are store-assigned; updates
/// never touch `order_date` or `payment_status`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPayment {
    pub customer_name: String,
    pub total_amount: Money,
    pub payment_method: String,
    pub notes: String,
}

impl NewPayment {
    /// Convenience constructor with empty notes.
    pub fn new(
        customer_name: impl Into<String>,
        total_amount: Money,
        payment_method: impl Into<String>,
    ) -> Self {
        NewPayment {
            customer_name: customer_name.into(),
            total_amount,
            payment_method: payment_method.into(),
            notes: String::new(),
        }
    }

    /// Sets the notes field.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

// =============================================================================
// Order Item
// =============================================================================

/// A line item of a payment, snapshotting the menu item name and unit
/// price at order time.
///
/// The `order_items` table is a documented extension point: the schema
/// and foreign keys exist, but no ledger operation creates, reads, or
/// deletes rows yet.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub payment_id: i64,
    pub menu_item_id: i64,
    /// Menu item name at order time (frozen).
    pub menu_item_name: String,
    pub quantity: i64,
    /// Unit price at order time (frozen).
    pub unit_price: Money,
    pub subtotal: Money,
}

impl OrderItem {
    /// Recomputes the line total from quantity and unit price.
    #[inline]
    pub const fn line_total(&self) -> Money {
        self.unit_price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Reports
// =============================================================================

/// Aggregate statistics over the payments of one calendar day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DailyReport {
    /// The calendar date the report covers.
    pub date: NaiveDate,

    /// Number of payments on that date.
    pub transactions: i64,

    /// Sum of `total_amount` over those payments.
    pub revenue: Money,

    /// `revenue / transactions` (integer division), zero when there are
    /// no transactions. Never a division error, never absent.
    pub average: Money,
}

impl DailyReport {
    /// Builds a report from raw aggregates, deriving the average.
    pub fn from_totals(date: NaiveDate, transactions: i64, revenue: Money) -> Self {
        DailyReport {
            date,
            transactions,
            revenue,
            average: revenue.divided_by(transactions),
        }
    }

    /// The all-zero report for a day with no payments.
    pub fn empty(date: NaiveDate) -> Self {
        DailyReport::from_totals(date, 0, Money::zero())
    }
}

/// One row of the per-method sales breakdown: the payments of one
/// calendar day that used one payment method.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodBreakdown {
    pub date: NaiveDate,
    pub payment_method: String,
    pub transactions: i64,
    pub revenue: Money,
    /// `revenue / transactions` for this (date, method) group.
    pub average: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
