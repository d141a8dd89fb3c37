//! Safe SQL identifier quoting.
//!
//! MySQL backtick quoting for table and column names. [`quote`] is used
//! everywhere a table or column name reaches statement text, and is
//! idempotent: quoting already-quoted input strips the old delimiters first.
//!
//! # Example
//! ```
//! use myorm::ident::quote;
//!
//! assert_eq!(quote("users", ""), "`users`");
//! assert_eq!(quote("users", "id"), "`users`.`id`");
//! assert_eq!(quote("users", "orders.id"), "`orders`.`id`");
//! ```

/// Quote a table name, or a table-qualified column name, with backticks.
///
/// - `b` empty: returns `` `a` ``.
/// - `b` containing `.`: treated as already qualified; each segment is
///   re-wrapped individually and `a` is ignored.
/// - otherwise: returns `` `a`.`b` ``.
///
/// Pre-existing backticks are stripped before wrapping, so the function is
/// idempotent on its own output.
pub fn quote(a: &str, b: &str) -> String {
    if b.is_empty() {
        return format!("`{}`", strip(a));
    }

    if b.contains('.') {
        let parts: Vec<String> = b.split('.').map(|part| format!("`{}`", strip(part))).collect();
        return parts.join(".");
    }

    format!("`{}`.`{}`", strip(a), strip(b))
}

fn strip(s: &str) -> &str {
    s.trim_matches('`')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_table() {
        assert_eq!(quote("users", ""), "`users`");
    }

    #[test]
    fn quote_column() {
        assert_eq!(quote("users", "id"), "`users`.`id`");
    }

    #[test]
    fn quote_is_idempotent() {
        let once = quote("users", "");
        assert_eq!(quote(&once, ""), once);
    }

    #[test]
    fn quote_strips_prequoted_column() {
        assert_eq!(quote("users", "`id`"), "`users`.`id`");
    }

    #[test]
    fn quote_qualified_column_passes_through() {
        assert_eq!(quote("users", "orders.user_id"), "`orders`.`user_id`");
    }

    #[test]
    fn quote_qualified_column_rewraps_delimiters() {
        assert_eq!(quote("users", "`orders`.`user_id`"), "`orders`.`user_id`");
    }
}
