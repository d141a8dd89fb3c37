//! SELECT assembly and execution.

use mysql_async::{Row, Value};

use crate::builder::Builder;
use crate::error::OrmResult;
use crate::executor::Executor;
use crate::ident::quote;
use crate::qb::{Connector, compile};

/// Strip a single stray leading connector token.
///
/// Compiled filter text can start with a connector when the first rendered
/// token was itself one (e.g. a raw fragment); the builder strips one such
/// token before emitting WHERE/HAVING.
pub(crate) fn strip_leading_connector(cond: &str) -> &str {
    cond.strip_prefix(" AND ")
        .or_else(|| cond.strip_prefix(" OR "))
        .unwrap_or(cond)
}

impl<E> Builder<E> {
    /// Render the configured SELECT statement.
    ///
    /// Returns the statement text and the bound arguments in placeholder
    /// order, then resets the builder for the next statement.
    pub fn to_sql(&mut self) -> OrmResult<(String, Vec<Value>)> {
        let (cond, where_args) = compile(self.table(), Connector::And, false, &self.exprs)?;

        let mut sql = String::from("SELECT ");

        if self.cols.is_empty() {
            sql.push('*');
        } else {
            let cols: Vec<String> = self.cols.iter().map(|col| quote(self.table(), col)).collect();
            sql.push_str(&cols.join(", "));
        }

        sql.push_str(" FROM ");
        sql.push_str(&quote(self.table(), ""));

        for join in &self.joins {
            sql.push(' ');
            sql.push_str(join);
        }

        let cond = strip_leading_connector(&cond);
        if !cond.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(cond);
            self.args.extend(where_args);
        }

        if !self.group.is_empty() {
            sql.push_str(" GROUP BY ");
            sql.push_str(&self.group);

            let (having, having_args) =
                compile(self.table(), Connector::And, false, &self.having)?;
            let having = strip_leading_connector(&having);
            if !having.is_empty() {
                sql.push_str(" HAVING ");
                sql.push_str(having);
                self.args.extend(having_args);
            }
        }

        if !self.order.is_empty() {
            sql.push_str(" ORDER BY ");
            sql.push_str(&self.order);
        }

        if self.limit > -1 {
            sql.push_str(" LIMIT ");

            if self.offset > -1 {
                sql.push_str(&self.offset.to_string());
                sql.push_str(", ");
            }

            sql.push_str(&self.limit.to_string());
        }

        let args = std::mem::take(&mut self.args);

        self.observe(&sql, &args);
        self.reset();

        Ok((sql, args))
    }
}

impl<E: Executor> Builder<E> {
    /// Render the SELECT statement and run it on the bound executor.
    pub async fn fetch(&mut self) -> OrmResult<Vec<Row>> {
        let (sql, args) = self.to_sql()?;
        self.executor.query(&sql, args).await
    }
}
