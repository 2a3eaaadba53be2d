//! # Repository Module
//!
//! Database repository implementations for the Warung POS ledger.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Pattern Explained                         │
//! │                                                                         │
//! │  The Repository pattern abstracts database access behind a clean API.   │
//! │                                                                         │
//! │  Ledger facade                                                          │
//! │       │                                                                 │
//! │       │  db.menu().search("gudeg")                                      │
//! │       ▼                                                                 │
//! │  MenuRepository                                                         │
//! │  ├── list(&self)                                                        │
//! │  ├── search(&self, term)                                                │
//! │  ├── insert(&self, item)                                                │
//! │  └── update(&self, id, item)                                            │
//! │       │                                                                 │
//! │       │  SQL Query                                                      │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! │                                                                         │
//! │  Benefits:                                                              │
//! │  • SQL is isolated in one place                                         │
//! │  • Typed `DbResult` errors for callers that need the distinction        │
//! │    the soft facade erases                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`menu::MenuRepository`] - Menu catalog CRUD and search
//! - [`payment::PaymentRepository`] - Payment CRUD, search, and reports

pub mod menu;
pub mod payment;
