//! Storage layer for the local match store
//!
//! Organized into:
//! - `schema`: Database connection and schema management
//! - `queries`: Snapshot import/export and field-level mutations
//!
//! Mutations touch only the rows they own (one rating cell, one voter
//! row) so two raters working on the same match never overwrite each other.

pub mod queries;
pub mod schema;


pub use schema::MatchDatabase;
