//! fix-sql-queries Library
//!
//! Rewrites the SQL Server `OFFSET/FETCH` pagination idiom stored in a JSON
//! document's `tools` and `resources` records into the `TOP` idiom.

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod rewriter;

pub use config::Config;
pub use error::FixError;
pub use rewriter::{DocumentRewriter, RunSummary};
