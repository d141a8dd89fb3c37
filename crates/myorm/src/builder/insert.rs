//! INSERT assembly and execution.

use mysql_async::Value;

use crate::builder::Builder;
use crate::error::{OrmError, OrmResult};
use crate::executor::Executor;
use crate::ident::quote;
use crate::qb::Record;

impl<E> Builder<E> {
    /// Render an INSERT for a single row.
    pub fn insert(&mut self, row: Record) -> OrmResult<(String, Vec<Value>)> {
        self.insert_many(vec![row])
    }

    /// Render a multi-row INSERT.
    ///
    /// The column list is fixed once from the first row; every row's values
    /// are bound in that column order. A row missing one of those columns
    /// fails with [`OrmError::MissingColumn`] and leaves the builder state
    /// untouched.
    pub fn insert_many(&mut self, rows: Vec<Record>) -> OrmResult<(String, Vec<Value>)> {
        let Some(first) = rows.first() else {
            return Err(OrmError::EmptyRows);
        };

        let columns: Vec<String> = first.keys().cloned().collect();

        let mut sql = String::from("INSERT INTO ");
        sql.push_str(&quote(self.table(), ""));
        sql.push_str(" (");

        for (i, col) in columns.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&quote(col, ""));
        }

        sql.push_str(") VALUES ");

        let tuple = format!("({})", vec!["?"; columns.len()].join(", "));

        let mut args: Vec<Value> = Vec::with_capacity(rows.len() * columns.len());
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                sql.push_str(", ");
            }
            sql.push_str(&tuple);

            for col in &columns {
                let Some(value) = row.get(col) else {
                    return Err(OrmError::missing_column(i, col.clone()));
                };
                args.push(value.clone());
            }
        }

        let mut out = std::mem::take(&mut self.args);
        out.extend(args);

        self.observe(&sql, &out);
        self.reset();

        Ok((sql, out))
    }
}

impl<E: Executor> Builder<E> {
    /// Render and run a single-row INSERT, returning the affected row count.
    pub async fn exec_insert(&mut self, row: Record) -> OrmResult<u64> {
        let (sql, args) = self.insert(row)?;
        self.executor.execute(&sql, args).await
    }

    /// Render and run a multi-row INSERT, returning the affected row count.
    pub async fn exec_insert_many(&mut self, rows: Vec<Record>) -> OrmResult<u64> {
        let (sql, args) = self.insert_many(rows)?;
        self.executor.execute(&sql, args).await
    }
}
