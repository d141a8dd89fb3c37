//! Execution boundary between the statement builder and the database driver.
//!
//! The builder itself never performs I/O; rendered statements are handed to
//! an [`Executor`], implemented here for a direct connection and for a
//! transaction so accessor code can run inside either.

use mysql_async::prelude::Queryable;
use mysql_async::{Params, Row, Value};

use crate::error::OrmResult;

/// Runs rendered statements.
///
/// `execute` is for mutating statements and returns the affected row count;
/// `query` is for SELECT and returns the result rows. Arguments are bound
/// positionally against the statement's `?` placeholders.
pub trait Executor {
    /// Run a mutating statement.
    fn execute(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<u64>> + Send;

    /// Run a query returning rows.
    fn query(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<Vec<Row>>> + Send;
}

impl Executor for mysql_async::Conn {
    fn execute(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<u64>> + Send {
        async move {
            let result = self.exec_iter(sql, Params::Positional(args)).await?;
            let affected = result.affected_rows();
            result.drop_result().await?;
            Ok(affected)
        }
    }

    fn query(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<Vec<Row>>> + Send {
        async move {
            let rows: Vec<Row> = self.exec(sql, Params::Positional(args)).await?;
            Ok(rows)
        }
    }
}

impl Executor for mysql_async::Transaction<'_> {
    fn execute(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<u64>> + Send {
        async move {
            let result = self.exec_iter(sql, Params::Positional(args)).await?;
            let affected = result.affected_rows();
            result.drop_result().await?;
            Ok(affected)
        }
    }

    fn query(
        &mut self,
        sql: &str,
        args: Vec<Value>,
    ) -> impl std::future::Future<Output = OrmResult<Vec<Row>>> + Send {
        async move {
            let rows: Vec<Row> = self.exec(sql, Params::Positional(args)).await?;
            Ok(rows)
        }
    }
}
