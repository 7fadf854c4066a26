//! Data models for fix-sql-queries.
//!
//! This module re-exports all model types used throughout the application.

pub mod document;

pub use document::{
    ChangeReport, Collection, Document, NAME_FIELD, SQL_QUERY_FIELD, UNKNOWN_NAME, record_name,
};
