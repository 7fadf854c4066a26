//! Document rewriter.
//!
//! This module holds the whole pipeline:
//! - `load`: read and parse the JSON document
//! - `process`: rewrite every matching `sqlQuery` in `tools` then `resources`
//! - `save`: write the document back over the original file
//! - `DocumentRewriter`: runs the three steps against one path
//!
//! The file is read once and written once. There is no locking, so two runs
//! against the same file at the same time can lose each other's changes.

pub mod query;

pub use query::transform_query;

use crate::error::{FixError, FixResult};
use crate::models::{ChangeReport, Collection, Document, SQL_QUERY_FIELD, record_name};
use serde::Serialize;
use serde_json::Value as JsonValue;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Read and parse the document at `path`.
pub fn load(path: impl AsRef<Path>) -> FixResult<Document> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| FixError::read(path, e))?;
    let value: JsonValue =
        serde_json::from_str(&contents).map_err(|e| FixError::parse(path, e))?;

    let document = Document::from_value(value).map_err(|other| {
        FixError::invalid_document(
            path,
            format!("expected a JSON object at the top level, found {}", kind(&other)),
        )
    })?;

    debug!(
        path = %path.display(),
        tools = document.records(Collection::Tools).len(),
        resources = document.records(Collection::Resources).len(),
        "Loaded document"
    );
    Ok(document)
}

fn kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "a boolean",
        JsonValue::Number(_) => "a number",
        JsonValue::String(_) => "a string",
        JsonValue::Array(_) => "an array",
        JsonValue::Object(_) => "an object",
    }
}

/// Rewrite every matching `sqlQuery` in place.
///
/// Records are visited in `tools` then `resources` order, and reports come
/// back in that order. Only string `sqlQuery` values that actually change
/// are touched; everything else in the document stays as it was.
pub fn process(document: &mut Document) -> Vec<ChangeReport> {
    let mut reports = Vec::new();

    for collection in Collection::ALL {
        let Some(records) = document.records_mut(collection) else {
            continue;
        };

        for (index, record) in records.iter_mut().enumerate() {
            let Some(record) = record.as_object_mut() else {
                continue;
            };
            let Some(JsonValue::String(old_query)) = record.get(SQL_QUERY_FIELD) else {
                continue;
            };

            let new_query = match transform_query(old_query) {
                Cow::Owned(rewritten) if rewritten != *old_query => rewritten,
                _ => continue,
            };

            let report = ChangeReport {
                collection,
                name: record_name(record).to_string(),
                index,
                old_query: old_query.clone(),
                new_query: new_query.clone(),
            };
            debug!(
                collection = %collection,
                name = %report.name,
                index,
                "Rewrote OFFSET/FETCH query"
            );

            record.insert(SQL_QUERY_FIELD.to_string(), JsonValue::String(new_query));
            reports.push(report);
        }
    }

    reports
}

/// Serialize `document` with two-space indentation and overwrite `path`.
pub fn save(document: &Document, path: impl AsRef<Path>) -> FixResult<()> {
    let path = path.as_ref();
    let contents = serde_json::to_string_pretty(document.as_map()).map_err(FixError::serialize)?;
    fs::write(path, contents).map_err(|e| FixError::write(path, e))?;

    info!(path = %path.display(), "Saved document");
    Ok(())
}

/// Outcome of one rewriter run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub path: PathBuf,
    pub reports: Vec<ChangeReport>,
    /// Whether the file was written.
    pub saved: bool,
    pub dry_run: bool,
}

impl RunSummary {
    pub fn changed(&self) -> usize {
        self.reports.len()
    }
}

/// Runs load, process and save against a single document path.
#[derive(Debug, Clone)]
pub struct DocumentRewriter {
    path: PathBuf,
    dry_run: bool,
}

impl DocumentRewriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            dry_run: false,
        }
    }

    /// Process and report without writing the file.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Load, rewrite and save the document.
    ///
    /// The document is always written back unless this is a dry run, even
    /// when no query changed. Reports are returned rather than printed, so
    /// callers only show them once the save has succeeded.
    pub fn run(&self) -> FixResult<RunSummary> {
        let mut document = load(&self.path)?;
        let reports = process(&mut document);

        let saved = if self.dry_run {
            info!(changed = reports.len(), "Dry run, leaving document untouched");
            false
        } else {
            if reports.is_empty() {
                info!(path = %self.path.display(), "No queries to fix");
            }
            save(&document, &self.path)?;
            true
        };

        Ok(RunSummary {
            path: self.path.clone(),
            reports,
            saved,
            dry_run: self.dry_run,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const PAGED: &str = "SELECT [Id],[Name] FROM [Users] WHERE [Active]=1 ORDER BY [Id] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY";
    const TOP: &str = "SELECT TOP (@limit) [Id],[Name] FROM [Users] WHERE [Active]=1";
    const LOGS: &str = "SELECT * FROM [Logs] WHERE [Level]='ERROR' ORDER BY [Ts] OFFSET @offset ROWS FETCH NEXT @limit ROWS ONLY";

    fn doc(value: JsonValue) -> Document {
        Document::from_value(value).unwrap()
    }

    #[test]
    fn test_record_without_query_skipped() {
        let mut d = doc(json!({ "tools": [{ "name": "ping" }] }));
        let before = d.clone();
        assert!(process(&mut d).is_empty());
        assert_eq!(d, before);
    }

    #[test]
    fn test_tool_matches_resource_does_not() {
        let mut d = doc(json!({
            "tools": [{ "name": "list_users", "sqlQuery": PAGED }],
            "resources": [{ "name": "error_logs", "sqlQuery": LOGS }]
        }));

        let reports = process(&mut d);

        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].collection, Collection::Tools);
        assert_eq!(reports[0].name, "list_users");
        assert_eq!(reports[0].old_query, PAGED);
        assert_eq!(reports[0].new_query, TOP);
        assert_eq!(d.records(Collection::Tools)[0]["sqlQuery"], TOP);
        assert_eq!(d.records(Collection::Resources)[0]["sqlQuery"], LOGS);
    }

    #[test]
    fn test_reports_in_processing_order() {
        let mut d = doc(json!({
            "resources": [{ "name": "r1", "sqlQuery": PAGED }],
            "tools": [
                { "name": "t1", "sqlQuery": PAGED },
                { "sqlQuery": PAGED }
            ]
        }));

        let reports = process(&mut d);
        let seen: Vec<(Collection, &str, usize)> = reports
            .iter()
            .map(|r| (r.collection, r.name.as_str(), r.index))
            .collect();

        assert_eq!(
            seen,
            [
                (Collection::Tools, "t1", 0),
                (Collection::Tools, "unknown", 1),
                (Collection::Resources, "r1", 0),
            ]
        );
    }

    #[test]
    fn test_non_string_query_untouched() {
        let mut d = doc(json!({
            "tools": [{ "name": "odd", "sqlQuery": 7 }, "not a record", null]
        }));
        let before = d.clone();
        assert!(process(&mut d).is_empty());
        assert_eq!(d, before);
    }

    #[test]
    fn test_other_fields_and_order_preserved() {
        let mut d = doc(json!({
            "servers": [{ "id": "s1" }],
            "tools": [{
                "server_id": "s1",
                "name": "list_users",
                "description": "List users",
                "inputSchema": { "type": "object" },
                "sqlQuery": PAGED,
                "operation": "SELECT"
            }]
        }));

        process(&mut d);

        let tool = d.records(Collection::Tools)[0].as_object().unwrap();
        let keys: Vec<&str> = tool.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["server_id", "name", "description", "inputSchema", "sqlQuery", "operation"]
        );
        assert_eq!(tool["inputSchema"], json!({ "type": "object" }));
        assert_eq!(d.as_map()["servers"], json!([{ "id": "s1" }]));
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(kind(&json!([])), "an array");
        assert_eq!(kind(&JsonValue::Null), "null");
    }
}
