//! Duplicate-detection keys.

use tabcast_model::Schema;

/// Separator between column values in a composite key.
const KEY_SEPARATOR: char = '|';

/// Build the duplicate-detection key for `row`: the raw value at each
/// schema column's index, in schema order, pipe-joined. An out-of-bounds
/// index contributes an empty segment so short rows still key uniformly.
///
/// Only meaningful when duplicate suppression is enabled; callers skip
/// this entirely otherwise.
pub fn row_key(row: &[String], schema: &Schema) -> String {
    let mut key = String::new();
    for (pos, column) in schema.columns.iter().enumerate() {
        if pos > 0 {
            key.push(KEY_SEPARATOR);
        }
        if let Some(value) = row.get(column.index) {
            key.push_str(value);
        }
    }
    key
}
