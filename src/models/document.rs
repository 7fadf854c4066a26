//! Document model: the JSON object holding tool and resource records.

use serde::Serialize;
use serde_json::{Map, Value as JsonValue};

/// Field holding the SQL statement template inside a record.
pub const SQL_QUERY_FIELD: &str = "sqlQuery";
/// Field used to identify a record in reports.
pub const NAME_FIELD: &str = "name";
/// Name reported for records without a string `name`.
pub const UNKNOWN_NAME: &str = "unknown";

/// A record collection scanned by the rewriter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Tools,
    Resources,
}

impl Collection {
    /// Collections in processing order.
    pub const ALL: [Collection; 2] = [Collection::Tools, Collection::Resources];

    /// The top-level JSON key holding this collection.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Tools => "tools",
            Self::Resources => "resources",
        }
    }

    /// Singular label used in report lines.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Tools => "tool",
            Self::Resources => "resource",
        }
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// The in-memory JSON document.
///
/// Key order is kept exactly as read, so writing the document back only
/// differs from the input where a value was replaced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Document {
    root: Map<String, JsonValue>,
}

impl Document {
    /// Build a document from a parsed JSON value. Returns the value back if
    /// it is not an object.
    pub fn from_value(value: JsonValue) -> Result<Self, JsonValue> {
        match value {
            JsonValue::Object(root) => Ok(Self { root }),
            other => Err(other),
        }
    }

    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.root
    }

    /// Records of a collection. Missing or non-array collections yield an empty slice.
    pub fn records(&self, collection: Collection) -> &[JsonValue] {
        match self.root.get(collection.key()) {
            Some(JsonValue::Array(items)) => items.as_slice(),
            _ => &[],
        }
    }

    /// Mutable access to a collection's records, if the collection is an array.
    pub fn records_mut(&mut self, collection: Collection) -> Option<&mut Vec<JsonValue>> {
        match self.root.get_mut(collection.key()) {
            Some(JsonValue::Array(items)) => Some(items),
            _ => None,
        }
    }

    /// Total number of records across both collections.
    pub fn record_count(&self) -> usize {
        Collection::ALL
            .iter()
            .map(|c| self.records(*c).len())
            .sum()
    }
}

/// Name of a record for reporting, or `"unknown"`.
pub fn record_name(record: &Map<String, JsonValue>) -> &str {
    record
        .get(NAME_FIELD)
        .and_then(JsonValue::as_str)
        .unwrap_or(UNKNOWN_NAME)
}

/// One rewritten `sqlQuery`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeReport {
    pub collection: Collection,
    pub name: String,
    /// Position of the record within its collection.
    pub index: usize,
    pub old_query: String,
    pub new_query: String,
}

impl std::fmt::Display for ChangeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fixed query for {}: {}", self.collection, self.name)
    }
}
