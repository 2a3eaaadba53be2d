//! # warung-db: Ledger Store for Warung POS
//!
//! This crate provides database access for the Warung POS system.
//! It uses SQLite for local storage with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Warung POS Data Flow                              │
//! │                                                                         │
//! │  Presentation layer (menu form, payment form, report view)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                     warung-db (THIS CRATE)                      │    │
//! │  │                                                                 │    │
//! │  │   ┌────────────┐   ┌──────────────┐   ┌──────────────────┐     │    │
//! │  │   │   Ledger   │   │ Repositories │   │ Migrations+Seed  │     │    │
//! │  │   │ (facade,   │──►│ (menu.rs,    │   │ (embedded SQL,   │     │    │
//! │  │   │  soft      │   │  payment.rs) │   │  seed-if-empty)  │     │    │
//! │  │   │  failure)  │   │              │   │                  │     │    │
//! │  │   └────────────┘   └──────┬───────┘   └──────────────────┘     │    │
//! │  │                          │                                     │    │
//! │  │                   ┌──────▼───────┐                             │    │
//! │  │                   │   Database   │  SqlitePool (size 1)        │    │
//! │  │                   │  (pool.rs)   │  WAL, foreign keys on       │    │
//! │  │                   └──────────────┘                             │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database file (warung.db)                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`seed`] - Seed data inserted into empty tables
//! - [`error`] - Database error types
//! - [`repository`] - Repository implementations (menu, payment)
//! - [`ledger`] - The soft-failure store facade
//!
//! ## Usage
//!
//! ```rust,ignore
//! use warung_db::{DbConfig, Ledger};
//! use warung_core::Money;
//!
//! // Open the ledger (creates schema and seed data on first use)
//! let ledger = Ledger::open(DbConfig::new("path/to/warung.db")).await?;
//!
//! // Record a payment
//! let id = ledger.add_payment("Budi", Money::from_rupiah(25_000), "Tunai", "").await;
//!
//! // Today's numbers
//! let report = ledger.daily_report_today().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod ledger;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod seed;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use ledger::Ledger;
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::menu::MenuRepository;
pub use repository::payment::PaymentRepository;
