//! Expression layer for WHERE/HAVING conditions.
//!
//! An [`Expr`] is either a leaf [`Predicate`] (one condition) or a
//! [`Composite`] (an AND/OR group of child expressions). Both render through
//! the same `render(table)` capability, returning clause text plus the bound
//! arguments in placeholder order.
//!
//! [`compile`] is the recursive renderer. When a subgroup mixes bare leaves
//! with nested groups it parenthesizes runs of leaves so operator precedence
//! stays unambiguous.

use std::fmt;
use std::sync::Arc;

use mysql_async::Value;

use crate::error::{OrmError, OrmResult};
use crate::ident::quote;

/// Connector joining the children of a [`Composite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    /// All children must hold.
    And,
    /// At least one child must hold.
    Or,
}

impl Connector {
    /// The connector token as emitted between rendered children.
    pub(crate) fn token(self) -> &'static str {
        match self {
            Connector::And => " AND ",
            Connector::Or => " OR ",
        }
    }
}

/// Sort direction for `ORDER BY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortBy {
    Asc,
    Desc,
}

/// Clause-producing function for predicates whose placeholder count is
/// data-dependent (e.g. membership tests). Receives the enclosing table name.
pub type ClauseFn = Arc<dyn Fn(&str) -> OrmResult<(String, Vec<Value>)> + Send + Sync>;

/// A leaf condition.
///
/// Exactly one of three rendering paths applies: a set `column` renders as
/// `` `table`.`column` <op> ? `` (or the literal `suffix` when present, e.g.
/// `" IS NULL"`); a set `builder` delegates entirely to the closure; otherwise
/// `suffix` is emitted as fully raw text with its arguments attached verbatim.
#[derive(Clone, Default)]
pub struct Predicate {
    pub(crate) column: String,
    pub(crate) op: &'static str,
    pub(crate) suffix: String,
    pub(crate) args: Vec<Value>,
    pub(crate) builder: Option<ClauseFn>,
}

impl Predicate {
    pub(crate) fn render(&self, table: &str) -> OrmResult<(String, Vec<Value>)> {
        if !self.column.is_empty() {
            let col = quote(table, &self.column);
            if self.suffix.is_empty() {
                return Ok((format!("{col} {} ?", self.op), self.args.clone()));
            }
            return Ok((format!("{col}{}", self.suffix), self.args.clone()));
        }

        if let Some(builder) = &self.builder {
            return builder(table).map_err(|err| match err {
                e @ OrmError::FilterCompile(_) => e,
                other => OrmError::filter_compile(other.to_string()),
            });
        }

        Ok((self.suffix.clone(), self.args.clone()))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Predicate")
            .field("column", &self.column)
            .field("op", &self.op)
            .field("suffix", &self.suffix)
            .field("args", &self.args)
            .field("builder", &self.builder.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// An ordered, AND/OR-joined group of child expressions.
///
/// Rendering never reorders children; argument order in the returned list
/// always matches left-to-right placeholder order in the returned text.
#[derive(Clone, Debug)]
pub struct Composite {
    pub(crate) connector: Connector,
    pub(crate) children: Vec<Expr>,
}

impl Composite {
    pub(crate) fn render(&self, table: &str) -> OrmResult<(String, Vec<Value>)> {
        compile(table, self.connector, true, &self.children)
    }
}

/// Expression node: a leaf condition or a nested group.
#[derive(Clone, Debug)]
pub enum Expr {
    Leaf(Predicate),
    Group(Composite),
}

impl Expr {
    pub(crate) fn is_group(&self) -> bool {
        matches!(self, Expr::Group(_))
    }

    /// Render this expression against the given table.
    pub fn render(&self, table: &str) -> OrmResult<(String, Vec<Value>)> {
        match self {
            Expr::Leaf(predicate) => predicate.render(table),
            Expr::Group(composite) => composite.render(table),
        }
    }
}

/// Render a sequence of expressions joined by `connector`.
///
/// `sub` marks a nested group. A subgroup that mixes bare leaves with nested
/// groups enters bracketing mode: consecutive leaves are wrapped in a shared
/// parenthesis span so they stay visually and semantically separate from the
/// group children beside them. Any span left open at the end of the child
/// list is closed, even when it holds a single leaf. A subgroup with more
/// than one child wraps its entire output in parentheses so it composes
/// safely inside an outer group.
pub fn compile(
    table: &str,
    connector: Connector,
    sub: bool,
    children: &[Expr],
) -> OrmResult<(String, Vec<Value>)> {
    let mut sql = String::new();
    let mut args: Vec<Value> = Vec::new();
    let token = connector.token();

    let bracket = sub && children.iter().any(Expr::is_group);
    let mut span_open = false;

    for (i, child) in children.iter().enumerate() {
        if child.is_group() {
            if span_open {
                sql.push(')');
                span_open = false;
            }
            if i > 0 {
                sql.push_str(token);
            }
        } else if span_open {
            sql.push_str(token);
        } else {
            if i > 0 {
                sql.push_str(token);
            }
            if bracket {
                sql.push('(');
                span_open = true;
            }
        }

        let (text, child_args) = child.render(table)?;
        sql.push_str(&text);
        args.extend(child_args);
    }

    if span_open {
        sql.push(')');
    }

    if sub && children.len() > 1 {
        sql = format!("({sql})");
    }

    Ok((sql, args))
}
