//! End-of-run summary output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    let telemetry = &result.telemetry;
    println!("Output: {}", result.output_path.display());

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("Total"),
        header_cell("Processed"),
        header_cell("Ignored"),
        header_cell("Seconds"),
        header_cell("Rows/s"),
    ]);
    table.add_row(vec![
        Cell::new(telemetry.total_rows),
        Cell::new(telemetry.processed_rows),
        count_cell(telemetry.ignored_rows, Color::Yellow),
        Cell::new(format!("{:.2}", telemetry.elapsed.as_secs_f64())),
        Cell::new(format!("{:.2}", telemetry.rows_per_second())),
    ]);
    for index in 0..5 {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{table}");

    println!(
        "Processed {} rows in {:.2} seconds",
        telemetry.total_rows,
        telemetry.elapsed.as_secs_f64()
    );
    if result.ignore_duplicates {
        println!("Ignored {} duplicate rows", telemetry.ignored_rows);
        println!("Found {} unique rows", telemetry.processed_rows);
    }
    println!(
        "Average processing speed: {:.2} rows/second",
        telemetry.rows_per_second()
    );
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
