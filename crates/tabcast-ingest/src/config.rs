//! Schema configuration loading.
//!
//! The schema is a YAML document:
//!
//! ```yaml
//! header: true
//! ignore_duplicates: true
//! columns:
//!   - index: 0
//!     field: id
//!     label: ID
//!     type: int
//!     type_policy: strict
//!     default: "0"
//! ```
//!
//! Type and policy names stay plain strings during deserialization so an
//! unrecognized name can degrade with a warning instead of failing the
//! whole load: unknown `type` becomes `string`, unknown or missing
//! `type_policy` becomes `flexible`.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use tabcast_model::{ColumnSpec, ColumnType, Schema, TypePolicy};

use crate::error::ConfigError;

/// Raw config document as written on disk.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    header: bool,
    #[serde(default)]
    ignore_duplicates: bool,
    #[serde(default)]
    columns: Vec<ColumnEntry>,
}

/// Raw per-column entry.
#[derive(Debug, Deserialize)]
struct ColumnEntry {
    index: usize,
    field: String,
    label: String,
    #[serde(default, rename = "type")]
    ty: Option<String>,
    #[serde(default)]
    type_policy: Option<String>,
    #[serde(default)]
    default: String,
    #[serde(default)]
    format: Option<String>,
}

/// Load and validate a conversion schema from `path`.
pub fn load_schema(path: &Path) -> Result<Schema, ConfigError> {
    let text = fs::read_to_string(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;
    let file: ConfigFile = serde_yaml::from_str(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(schema_from_file(file))
}

fn schema_from_file(file: ConfigFile) -> Schema {
    let schema = Schema {
        columns: file.columns.into_iter().map(column_from_entry).collect(),
        has_header: file.header,
        ignore_duplicates: file.ignore_duplicates,
    };
    let duplicates = schema.duplicate_indices();
    if !duplicates.is_empty() {
        warn!(
            indices = ?duplicates,
            "schema configures the same column index more than once"
        );
    }
    schema
}

fn column_from_entry(entry: ColumnEntry) -> ColumnSpec {
    let ty = match entry.ty.as_deref() {
        None => ColumnType::String,
        Some(name) => ColumnType::parse(name).unwrap_or_else(|| {
            warn!(field = %entry.field, ty = %name, "unknown column type, treating as string");
            ColumnType::String
        }),
    };
    let policy = match entry.type_policy.as_deref() {
        None => TypePolicy::Flexible,
        Some(name) => TypePolicy::parse(name).unwrap_or_else(|| {
            warn!(field = %entry.field, policy = %name, "unknown type policy, treating as flexible");
            TypePolicy::Flexible
        }),
    };
    ColumnSpec {
        index: entry.index,
        field: entry.field,
        label: entry.label,
        ty,
        policy,
        default: entry.default,
        format: entry.format,
    }
}
