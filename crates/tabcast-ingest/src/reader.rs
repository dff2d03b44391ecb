//! Delimited-text row reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tabcast_model::RawRow;

use crate::error::InputError;

/// Read every physical row of `path` into memory.
///
/// Rows may be ragged: no field-count consistency is enforced. Header
/// handling belongs to the pipeline, so the first row is returned like any
/// other. A UTF-8 BOM on the first field is stripped; UTF-16 input is
/// rejected outright.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, InputError> {
    validate_encoding(path)?;

    let file = open_input(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|source| InputError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(str::to_string).collect::<RawRow>());
    }

    if let Some(first_field) = rows.first_mut().and_then(|row| row.first_mut()) {
        if let Some(stripped) = first_field.strip_prefix('\u{feff}') {
            *first_field = stripped.to_string();
        }
    }

    Ok(rows)
}

/// Reject UTF-16 input by BOM sniff. UTF-8 (with or without BOM) passes.
fn validate_encoding(path: &Path) -> Result<(), InputError> {
    let mut file = open_input(path)?;
    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|source| InputError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes_read >= 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(InputError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

fn open_input(path: &Path) -> Result<File, InputError> {
    File::open(path).map_err(|source| {
        if source.kind() == std::io::ErrorKind::NotFound {
            InputError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            InputError::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    })
}
