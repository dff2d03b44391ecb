//! Data model for schema-driven tabular conversion.
//!
//! The model is deliberately small: a [`Schema`] of [`ColumnSpec`]s drives
//! conversion of raw string rows into [`Record`]s of [`TypedValue`]s. All
//! types here are inert data; coercion and pipeline behavior live in
//! `tabcast-core`, config parsing in `tabcast-ingest`.

mod record;
mod schema;
mod value;

pub use record::Record;
pub use schema::{ColumnSpec, ColumnType, Schema, TypePolicy};
pub use value::{DATE_FORMAT, DATETIME_FORMAT, TypedValue};

/// One raw input row: string fields in file order, indexed from zero.
pub type RawRow = Vec<String>;
