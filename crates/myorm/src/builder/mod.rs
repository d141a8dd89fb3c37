//! Stateful statement builder bound to one table and one executor.
//!
//! A [`Builder`] is a single-writer accumulator: configuration methods
//! mutate and return the same instance for chaining, a terminal operation
//! ([`Builder::to_sql`], [`Builder::insert_many`], [`Builder::update`], ...)
//! renders the statement and resets the mutable state, and the instance is
//! then ready for the next statement against the same table.
//!
//! Predicates and composites are immutable and may be shared across
//! builders; the builder itself is not safe for concurrent configuration.
//!
//! ```
//! use myorm::{Builder, qb};
//! use myorm::qb::SortBy;
//!
//! let mut users = Builder::new((), "users");
//! let (sql, args) = users
//!     .select(&["id", "name"])
//!     .filter(qb::eq("status", "active"))
//!     .order_by("id", SortBy::Desc)
//!     .limit(10)
//!     .to_sql()
//!     .unwrap();
//! assert_eq!(
//!     sql,
//!     "SELECT `users`.`id`, `users`.`name` FROM `users` \
//!      WHERE `users`.`status` = ? ORDER BY `users`.`id` DESC LIMIT 10"
//! );
//! assert_eq!(args.len(), 1);
//! ```

mod insert;
mod select;
mod update;


use std::sync::Arc;

use mysql_async::Value;

use crate::hook::SqlHook;
use crate::ident::quote;
use crate::qb::{Expr, SortBy};

/// Implemented by generated entity types to name their table.
pub trait Model {
    fn table_name() -> &'static str;
}

/// Statement builder for one table, holding the executor it will run
/// statements on.
pub struct Builder<E> {
    pub(crate) executor: E,

    table: String,

    pub(crate) args: Vec<Value>,
    pub(crate) exprs: Vec<Expr>,

    pub(crate) cols: Vec<String>,

    pub(crate) offset: i64,
    pub(crate) limit: i64,

    pub(crate) order: String,
    pub(crate) group: String,

    pub(crate) having: Vec<Expr>,

    pub(crate) joins: Vec<String>,

    hook: Option<Arc<dyn SqlHook>>,
}

impl<E> Builder<E> {
    /// Create a builder bound to `table`, running statements on `executor`.
    pub fn new(executor: E, table: &str) -> Self {
        let mut builder = Self {
            executor,
            table: table.to_string(),
            args: Vec::new(),
            exprs: Vec::new(),
            cols: Vec::new(),
            offset: -1,
            limit: -1,
            order: String::new(),
            group: String::new(),
            having: Vec::new(),
            joins: Vec::new(),
            hook: None,
        };
        builder.reset();
        builder
    }

    /// Create a builder for a [`Model`]'s table.
    pub fn for_model<M: Model>(executor: E) -> Self {
        Self::new(executor, M::table_name())
    }

    /// Install a statement observer, called with (text, arguments) by every
    /// terminal operation. Survives [`reset`](Self::reset).
    pub fn with_hook(mut self, hook: Arc<dyn SqlHook>) -> Self {
        self.hook = Some(hook);
        self
    }

    /// The table this builder is bound to.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Clear all statement state. Table, executor, and hook persist.
    pub(crate) fn reset(&mut self) {
        self.args = Vec::new();

        self.cols = Vec::new();
        self.exprs = Vec::new();

        self.group = String::new();
        self.having = Vec::new();

        self.order = String::new();

        self.offset = -1;
        self.limit = -1;

        self.joins = Vec::new();
    }

    pub(crate) fn observe(&self, sql: &str, args: &[Value]) {
        if let Some(hook) = &self.hook {
            hook.on_statement(sql, args);
        }
    }

    /// Set the selected columns. An empty slice leaves the selection
    /// unchanged (default: all columns).
    pub fn select(&mut self, cols: &[&str]) -> &mut Self {
        if !cols.is_empty() {
            self.cols = cols.iter().map(|s| s.to_string()).collect();
        }
        self
    }

    /// Append a WHERE condition. Top-level conditions are AND-combined.
    pub fn filter(&mut self, expr: Expr) -> &mut Self {
        self.exprs.push(expr);
        self
    }

    /// Set the GROUP BY columns.
    pub fn group_by(&mut self, cols: &[&str]) -> &mut Self {
        let group: Vec<String> = cols.iter().map(|col| quote(&self.table, col)).collect();
        self.group = group.join(", ");
        self
    }

    /// Append a HAVING condition. Only emitted when grouping is configured.
    pub fn having(&mut self, expr: Expr) -> &mut Self {
        self.having.push(expr);
        self
    }

    /// Set the ORDER BY column and direction. Last call wins; an empty
    /// column clears the ordering.
    pub fn order_by(&mut self, col: &str, sort_by: SortBy) -> &mut Self {
        if col.is_empty() {
            self.order = String::new();
            return self;
        }

        let mut raw = quote(&self.table, col);
        match sort_by {
            SortBy::Asc => raw.push_str(" ASC"),
            SortBy::Desc => raw.push_str(" DESC"),
        }

        self.order = raw;
        self
    }

    /// Set a raw ORDER BY fragment, emitted verbatim. Last call wins.
    pub fn order_by_raw(&mut self, raw: &str) -> &mut Self {
        self.order = raw.to_string();
        self
    }

    /// Set the row offset. `-1` means unset; only emitted together with a
    /// limit.
    pub fn offset(&mut self, n: i64) -> &mut Self {
        self.offset = n;
        self
    }

    /// Set the row limit. `-1` means unset.
    pub fn limit(&mut self, n: i64) -> &mut Self {
        self.limit = n;
        self
    }

    /// `INNER JOIN target USING (col)`
    pub fn join_using(&mut self, target: &str, col: &str) -> &mut Self {
        self.join_fragment("INNER", target, col, "")
    }

    /// `INNER JOIN target ON (table.first = target.second)`
    pub fn join(&mut self, target: &str, first: &str, second: &str) -> &mut Self {
        self.join_fragment("INNER", target, first, second)
    }

    /// `LEFT JOIN target USING (col)`
    pub fn left_join_using(&mut self, target: &str, col: &str) -> &mut Self {
        self.join_fragment("LEFT", target, col, "")
    }

    /// `LEFT JOIN target ON (table.first = target.second)`
    pub fn left_join(&mut self, target: &str, first: &str, second: &str) -> &mut Self {
        self.join_fragment("LEFT", target, first, second)
    }

    /// `RIGHT JOIN target USING (col)`
    pub fn right_join_using(&mut self, target: &str, col: &str) -> &mut Self {
        self.join_fragment("RIGHT", target, col, "")
    }

    /// `RIGHT JOIN target ON (table.first = target.second)`
    pub fn right_join(&mut self, target: &str, first: &str, second: &str) -> &mut Self {
        self.join_fragment("RIGHT", target, first, second)
    }

    /// `OUTER JOIN target USING (col)`
    pub fn outer_join_using(&mut self, target: &str, col: &str) -> &mut Self {
        self.join_fragment("OUTER", target, col, "")
    }

    /// `OUTER JOIN target ON (table.first = target.second)`
    pub fn outer_join(&mut self, target: &str, first: &str, second: &str) -> &mut Self {
        self.join_fragment("OUTER", target, first, second)
    }

    fn join_fragment(&mut self, kind: &str, target: &str, first: &str, second: &str) -> &mut Self {
        let mut fragment = String::new();

        fragment.push_str(kind);
        fragment.push_str(" JOIN ");
        fragment.push_str(&quote(target, ""));

        if second.is_empty() {
            fragment.push_str(" USING (");
            fragment.push_str(&quote(first, ""));
            fragment.push(')');
        } else {
            fragment.push_str(" ON (");
            fragment.push_str(&quote(&self.table, first));
            fragment.push_str(" = ");
            fragment.push_str(&quote(target, second));
            fragment.push(')');
        }

        self.joins.push(fragment);
        self
    }
}
