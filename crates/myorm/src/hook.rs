//! Statement observation hooks.
//!
//! Every terminal operation on a [`Builder`](crate::Builder) reports the
//! rendered statement text and its bound arguments to the installed
//! [`SqlHook`] before returning them, so tests and observability layers can
//! see emitted statements without capturing process-wide output.

use mysql_async::Value;

/// Observer for rendered statements.
pub trait SqlHook: Send + Sync {
    /// Called with the statement text and its arguments, in placeholder
    /// order, before the terminal operation returns.
    fn on_statement(&self, sql: &str, args: &[Value]);
}

/// Hook that discards every statement.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHook;

impl SqlHook for NoopHook {
    fn on_statement(&self, _sql: &str, _args: &[Value]) {}
}

#[cfg(feature = "tracing")]
pub use self::tracing_hook::TracingSqlHook;

#[cfg(feature = "tracing")]
mod tracing_hook {
    use super::SqlHook;
    use mysql_async::Value;
    use tracing::Level;

    /// A `tracing`-based hook that emits every rendered statement.
    ///
    /// Enable via the crate feature: `myorm = { features = ["tracing"] }`.
    #[derive(Debug, Clone)]
    pub struct TracingSqlHook {
        /// Tracing event level to emit at.
        pub level: Level,
        /// Truncate long SQL strings (in bytes). `None` means no truncation.
        pub max_sql_length: Option<usize>,
    }

    impl Default for TracingSqlHook {
        fn default() -> Self {
            Self {
                level: Level::DEBUG,
                max_sql_length: Some(200),
            }
        }
    }

    impl TracingSqlHook {
        /// Create a new hook with defaults.
        pub fn new() -> Self {
            Self::default()
        }

        /// Override the tracing event level.
        pub fn level(mut self, level: Level) -> Self {
            self.level = level;
            self
        }

        /// Disable SQL truncation.
        pub fn no_truncate(mut self) -> Self {
            self.max_sql_length = None;
            self
        }

        fn truncate_sql<'a>(&self, sql: &'a str) -> &'a str {
            match self.max_sql_length {
                Some(max) if sql.len() > max => {
                    let mut end = max;
                    while end > 0 && !sql.is_char_boundary(end) {
                        end -= 1;
                    }
                    &sql[..end]
                }
                _ => sql,
            }
        }
    }

    impl SqlHook for TracingSqlHook {
        fn on_statement(&self, sql: &str, args: &[Value]) {
            /// Dispatch a tracing event at a runtime-determined level.
            macro_rules! emit_at_level {
                ($level:expr, $($field:tt)*) => {
                    match $level {
                        Level::ERROR => tracing::error!($($field)*),
                        Level::WARN  => tracing::warn!($($field)*),
                        Level::INFO  => tracing::info!($($field)*),
                        Level::DEBUG => tracing::debug!($($field)*),
                        Level::TRACE => tracing::trace!($($field)*),
                    }
                };
            }

            emit_at_level!(
                self.level,
                target: "myorm.sql",
                arg_count = args.len(),
                sql = %self.truncate_sql(sql),
            );
        }
    }
}
