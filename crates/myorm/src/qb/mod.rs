//! Predicate factories and the clause compiler.
//!
//! Conditions are built from small factory functions and composed with
//! [`and`] / [`or`]:
//!
//! ```
//! use myorm::qb;
//!
//! let filter = qb::or(vec![
//!     qb::and(vec![qb::eq("status", "active"), qb::gt("age", 18)]),
//!     qb::is_null("deleted_at"),
//! ]);
//! let (sql, args) = filter.render("users").unwrap();
//! assert_eq!(
//!     sql,
//!     "((`users`.`status` = ? AND `users`.`age` > ?) OR (`users`.`deleted_at` IS NULL))"
//! );
//! assert_eq!(args.len(), 2);
//! ```

mod expr;

pub use expr::{ClauseFn, Composite, Connector, Expr, Predicate, SortBy, compile};

use std::collections::BTreeMap;
use std::sync::Arc;

use mysql_async::Value;

use crate::error::OrmResult;
use crate::ident::quote;

/// Row carrier for INSERT/UPDATE: column name to bound value.
///
/// An ordered map, so the column order derived from the first row is
/// deterministic regardless of how the row was assembled.
pub type Record = BTreeMap<String, Value>;

fn cmp(col: &str, op: &'static str, val: impl Into<Value>) -> Expr {
    Expr::Leaf(Predicate {
        column: col.to_string(),
        op,
        args: vec![val.into()],
        ..Predicate::default()
    })
}

/// `column = value`
pub fn eq(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, "=", val)
}

/// `column <> value`
pub fn neq(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, "<>", val)
}

/// `column > value`
pub fn gt(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, ">", val)
}

/// `column < value`
pub fn lt(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, "<", val)
}

/// `column >= value`
pub fn gte(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, ">=", val)
}

/// `column <= value`
pub fn lte(col: &str, val: impl Into<Value>) -> Expr {
    cmp(col, "<=", val)
}

/// `column BETWEEN a AND b`
pub fn between(col: &str, a: impl Into<Value>, b: impl Into<Value>) -> Expr {
    Expr::Leaf(Predicate {
        column: col.to_string(),
        suffix: " BETWEEN ? AND ?".to_string(),
        args: vec![a.into(), b.into()],
        ..Predicate::default()
    })
}

/// `column IS NULL`
pub fn is_null(col: &str) -> Expr {
    Expr::Leaf(Predicate {
        column: col.to_string(),
        suffix: " IS NULL".to_string(),
        ..Predicate::default()
    })
}

/// `column IS NOT NULL`
pub fn not_null(col: &str) -> Expr {
    Expr::Leaf(Predicate {
        column: col.to_string(),
        suffix: " IS NOT NULL".to_string(),
        ..Predicate::default()
    })
}

/// `column LIKE %value%` (contains)
pub fn like(col: &str, val: &str) -> Expr {
    cmp(col, "LIKE", format!("%{val}%"))
}

/// `column LIKE value%` (prefix match)
pub fn starts_with(col: &str, val: &str) -> Expr {
    cmp(col, "LIKE", format!("{val}%"))
}

/// `column LIKE %value` (suffix match)
pub fn ends_with(col: &str, val: &str) -> Expr {
    cmp(col, "LIKE", format!("%{val}"))
}

/// A raw clause fragment emitted verbatim, with its arguments attached in
/// order. The fragment must carry one `?` per argument.
pub fn raw<I>(sql: &str, args: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    Expr::Leaf(Predicate {
        suffix: sql.to_string(),
        args: args.into_iter().map(Into::into).collect(),
        ..Predicate::default()
    })
}

/// A predicate rendered by a custom clause builder.
///
/// The builder receives the enclosing table name and returns clause text plus
/// bound arguments. Used for operators whose placeholder count depends on the
/// data, such as membership tests.
pub fn custom<F>(f: F) -> Expr
where
    F: Fn(&str) -> OrmResult<(String, Vec<Value>)> + Send + Sync + 'static,
{
    Expr::Leaf(Predicate {
        builder: Some(Arc::new(f) as ClauseFn),
        ..Predicate::default()
    })
}

/// `column IN (?, ?, …)` with one placeholder per element.
///
/// An empty collection renders the always-false clause `1=0`, since an empty
/// IN list is not valid SQL.
pub fn in_list<I>(col: &str, values: I) -> Expr
where
    I: IntoIterator,
    I::Item: Into<Value>,
{
    let column = col.to_string();
    let values: Vec<Value> = values.into_iter().map(Into::into).collect();

    custom(move |table| {
        if values.is_empty() {
            return Ok(("1=0".to_string(), Vec::new()));
        }
        let placeholders = vec!["?"; values.len()].join(", ");
        Ok((
            format!("{} IN ({placeholders})", quote(table, &column)),
            values.clone(),
        ))
    })
}

/// AND group: all children must hold.
pub fn and(children: Vec<Expr>) -> Expr {
    Expr::Group(Composite {
        connector: Connector::And,
        children,
    })
}

/// OR group: at least one child must hold.
pub fn or(children: Vec<Expr>) -> Expr {
    Expr::Group(Composite {
        connector: Connector::Or,
        children,
    })
}

#[cfg(test)]
mod tests;
