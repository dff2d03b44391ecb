//! Per-row processing.

use tracing::warn;

use tabcast_model::{Record, Schema};

use crate::cast::cast_value;
use crate::dedupe::DuplicateTracker;
use crate::error::CastError;
use crate::key::row_key;

/// What became of one row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    /// Row converted into a record, possibly with columns missing.
    Accepted(Record),
    /// Row's key was already seen; nothing produced.
    Skipped,
}

/// Convert one raw row into a labeled record.
///
/// When duplicate suppression is on, the composite key is claimed before
/// any casting so a losing racer pays only the key derivation. A column
/// index beyond the row's bounds is logged and left out of the record;
/// the row itself is still accepted. A strict cast failure propagates as
/// `Err` and the caller stops the run.
pub fn process_row(
    row_index: usize,
    row: &[String],
    schema: &Schema,
    tracker: &DuplicateTracker,
) -> Result<RowOutcome, CastError> {
    if schema.ignore_duplicates && !tracker.test_and_insert(&row_key(row, schema)) {
        return Ok(RowOutcome::Skipped);
    }

    let mut record = Record::with_capacity(schema.columns.len());
    for column in &schema.columns {
        match row.get(column.index) {
            Some(value) => {
                record.insert(column.label.clone(), cast_value(value, column)?);
            }
            None => {
                warn!(
                    row = row_index,
                    column = column.index,
                    field = %column.field,
                    "column index out of range for row"
                );
            }
        }
    }
    Ok(RowOutcome::Accepted(record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabcast_model::{ColumnSpec, ColumnType, TypePolicy, TypedValue};

    fn column(index: usize, label: &str, ty: ColumnType, policy: TypePolicy) -> ColumnSpec {
        ColumnSpec {
            index,
            field: label.to_lowercase(),
            label: label.to_string(),
            ty,
            policy,
            default: String::new(),
            format: None,
        }
    }

    fn row(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_accepted_record_in_schema_order() {
        let schema = Schema {
            columns: vec![
                column(1, "Name", ColumnType::String, TypePolicy::Flexible),
                column(0, "ID", ColumnType::Int, TypePolicy::Strict),
            ],
            has_header: false,
            ignore_duplicates: false,
        };
        let tracker = DuplicateTracker::new();
        let outcome = process_row(0, &row(&["3", "ada"]), &schema, &tracker).unwrap();

        let RowOutcome::Accepted(record) = outcome else {
            panic!("expected accepted row");
        };
        let labels: Vec<&str> = record.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["Name", "ID"]);
        assert_eq!(record.get("ID"), Some(&TypedValue::Int(3)));
        assert_eq!(
            record.get("Name"),
            Some(&TypedValue::Text("ada".to_string()))
        );
    }

    #[test]
    fn test_duplicate_row_skipped() {
        let schema = Schema {
            columns: vec![column(0, "ID", ColumnType::Int, TypePolicy::Strict)],
            has_header: false,
            ignore_duplicates: true,
        };
        let tracker = DuplicateTracker::new();

        let first = process_row(0, &row(&["1"]), &schema, &tracker).unwrap();
        assert!(matches!(first, RowOutcome::Accepted(_)));

        let second = process_row(1, &row(&["1"]), &schema, &tracker).unwrap();
        assert_eq!(second, RowOutcome::Skipped);
    }

    #[test]
    fn test_duplicates_kept_when_disabled() {
        let schema = Schema {
            columns: vec![column(0, "ID", ColumnType::Int, TypePolicy::Strict)],
            has_header: false,
            ignore_duplicates: false,
        };
        let tracker = DuplicateTracker::new();

        for index in 0..3 {
            let outcome = process_row(index, &row(&["1"]), &schema, &tracker).unwrap();
            assert!(matches!(outcome, RowOutcome::Accepted(_)));
        }
        // The keyer must not run at all when suppression is off.
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_short_row_omits_column() {
        let schema = Schema {
            columns: vec![
                column(0, "ID", ColumnType::Int, TypePolicy::Strict),
                column(5, "Missing", ColumnType::String, TypePolicy::Flexible),
            ],
            has_header: false,
            ignore_duplicates: false,
        };
        let tracker = DuplicateTracker::new();
        let outcome = process_row(0, &row(&["9"]), &schema, &tracker).unwrap();

        let RowOutcome::Accepted(record) = outcome else {
            panic!("expected accepted row");
        };
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("ID"), Some(&TypedValue::Int(9)));
        assert!(!record.contains("Missing"));
    }

    #[test]
    fn test_strict_failure_propagates() {
        let schema = Schema {
            columns: vec![column(0, "ID", ColumnType::Int, TypePolicy::Strict)],
            has_header: false,
            ignore_duplicates: false,
        };
        let tracker = DuplicateTracker::new();
        let error = process_row(0, &row(&["oops"]), &schema, &tracker).unwrap_err();
        assert_eq!(error.value, "oops");
        assert_eq!(error.ty, ColumnType::Int);
    }
}
