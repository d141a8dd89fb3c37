//! # myorm
//!
//! Statement-builder and execution core for the myorm MySQL code generator.
//! Generated per-entity accessor code composes predicate trees and drives a
//! [`Builder`]; callers never hand-write SQL.
//!
//! ## Features
//!
//! - **Composable predicates**: AND/OR trees via the `qb` factories, with
//!   bracketing that keeps mixed nesting unambiguous
//! - **Positional arguments**: `?` placeholders, argument order always
//!   matching placeholder order
//! - **Safe defaults**: UPDATE requires WHERE, inserts reject rows missing
//!   columns instead of silently binding defaults
//! - **Reusable builders**: every terminal operation resets the statement
//!   state, keeping the instance bound to its table and executor
//!
//! ## Example
//!
//! ```ignore
//! use myorm::{Builder, qb};
//! use myorm::qb::SortBy;
//!
//! let mut users = Builder::new(conn, "users");
//!
//! // SELECT
//! let rows = users
//!     .select(&["id", "name"])
//!     .filter(qb::eq("status", "active"))
//!     .filter(qb::or(vec![qb::gt("age", 18), qb::is_null("guardian_id")]))
//!     .order_by("id", SortBy::Desc)
//!     .limit(20)
//!     .fetch()
//!     .await?;
//!
//! // UPDATE (refused without a filter)
//! users
//!     .filter(qb::eq("id", 7))
//!     .exec_update_one(Record::from([("status".into(), "inactive".into())]))
//!     .await?;
//! ```

pub mod builder;
pub mod error;
pub mod executor;
pub mod hook;
pub mod ident;
pub mod qb;

pub use builder::{Builder, Model};
pub use error::{OrmError, OrmResult};
pub use executor::Executor;
pub use hook::{NoopHook, SqlHook};
pub use ident::quote;
pub use qb::{Composite, Connector, Expr, Predicate, Record, SortBy};

#[cfg(feature = "tracing")]
pub use hook::TracingSqlHook;

// Re-export the driver types that appear in the public API.
pub use mysql_async::{Row, Value};
