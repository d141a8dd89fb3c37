//! UPDATE assembly and execution.

use mysql_async::Value;

use crate::builder::Builder;
use crate::builder::select::strip_leading_connector;
use crate::error::{OrmError, OrmResult};
use crate::executor::Executor;
use crate::ident::quote;
use crate::qb::{Connector, Record, compile};

impl<E> Builder<E> {
    /// Render an UPDATE limited to a single row (`LIMIT 1`).
    pub fn update_one(&mut self, values: Record) -> OrmResult<(String, Vec<Value>)> {
        self.limit(1);
        self.update(values)
    }

    /// Render an UPDATE over the configured filter.
    ///
    /// Refuses to proceed when the compiled filter is empty
    /// ([`OrmError::UnsafeUpdate`]): an UPDATE with no WHERE clause would
    /// mutate the whole table. SET columns are bound in the [`Record`]'s
    /// order, filter arguments follow the SET arguments, and a positive
    /// limit is emitted as a trailing `LIMIT`.
    pub fn update(&mut self, values: Record) -> OrmResult<(String, Vec<Value>)> {
        let (cond, where_args) = compile(self.table(), Connector::And, false, &self.exprs)?;
        let cond = strip_leading_connector(&cond);

        if cond.is_empty() {
            return Err(OrmError::UnsafeUpdate);
        }
        if values.is_empty() {
            return Err(OrmError::EmptyValues);
        }

        let mut sql = String::from("UPDATE ");
        sql.push_str(&quote(self.table(), ""));
        sql.push_str(" SET ");

        let mut args: Vec<Value> = Vec::with_capacity(values.len() + where_args.len());
        for (i, (col, value)) in values.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&quote(self.table(), col));
            sql.push_str(" = ?");
            args.push(value.clone());
        }

        sql.push_str(" WHERE ");
        sql.push_str(cond);
        args.extend(where_args);

        if self.limit > 0 {
            sql.push_str(" LIMIT ");
            sql.push_str(&self.limit.to_string());
        }

        let mut out = std::mem::take(&mut self.args);
        out.extend(args);

        self.observe(&sql, &out);
        self.reset();

        Ok((sql, out))
    }
}

impl<E: Executor> Builder<E> {
    /// Render and run an UPDATE, returning the affected row count.
    pub async fn exec_update(&mut self, values: Record) -> OrmResult<u64> {
        let (sql, args) = self.update(values)?;
        self.executor.execute(&sql, args).await
    }

    /// Render and run a single-row UPDATE, returning the affected row count.
    pub async fn exec_update_one(&mut self, values: Record) -> OrmResult<u64> {
        let (sql, args) = self.update_one(values)?;
        self.executor.execute(&sql, args).await
    }
}
