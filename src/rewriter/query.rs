//! OFFSET/FETCH to TOP rewriting for a single SQL Server query.
//!
//! Only one literal shape is recognized:
//!
//! ```text
//! SELECT <columns> FROM [<table>] WHERE <predicate> ORDER BY [Id] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY
//! ```
//!
//! which becomes `SELECT TOP (@limit) <columns> FROM [<table>] WHERE <predicate>`.
//! Queries ordered by any column other than `[Id]` are left alone. The result
//! caps the row count but no longer skips `@offset` rows.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

static OFFSET_FETCH_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(SELECT) ([^"]*) (FROM \[[^\]]*\] WHERE [^"]*) ORDER BY \[Id\] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY"#,
    )
    .expect("OFFSET/FETCH pattern is a valid regex")
});

const TOP_REPLACEMENT: &str = "${1} TOP (@limit) ${2} ${3}";

/// Rewrite every OFFSET/FETCH occurrence in `query` into the TOP form.
///
/// Returns the input borrowed and unchanged when nothing matches.
///
/// # Examples
///
/// ```
/// use fix_sql_queries::rewriter::transform_query;
///
/// let sql = "SELECT [Id] FROM [Users] WHERE [Active]=1 ORDER BY [Id] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY";
/// assert_eq!(
///     transform_query(sql),
///     "SELECT TOP (@limit) [Id] FROM [Users] WHERE [Active]=1"
/// );
///
/// let other = "SELECT * FROM [Logs] WHERE 1=1 ORDER BY [Ts] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY";
/// assert_eq!(transform_query(other), other);
/// ```
pub fn transform_query(query: &str) -> Cow<'_, str> {
    OFFSET_FETCH_PATTERN.replace_all(query, TOP_REPLACEMENT)
}
