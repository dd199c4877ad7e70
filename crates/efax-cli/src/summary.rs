use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use efax_model::CleanReport;

/// Line printed once the output file is in place.
pub fn completion_message(report: &CleanReport) -> String {
    format!(
        "Cleaned data saved to {}. Total records: {}",
        report.output_path.display(),
        report.records
    )
}

pub fn print_summary(report: &CleanReport) {
    println!("{}", completion_message(report));
    println!("{}", summary_table(report));
}

/// Per-stage counts for a completed run.
pub fn summary_table(report: &CleanReport) -> Table {
    let counts = &report.counts;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Rows loaded"), Cell::new(counts.rows_loaded)]);
    table.add_row(vec![
        Cell::new("Dropped by status filter"),
        count_cell(counts.rows_dropped, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Schema tokens removed"),
        count_cell(counts.tokens_removed, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Sentinels replaced"),
        count_cell(counts.sentinels_replaced, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Defaults filled"),
        count_cell(counts.defaults_filled, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Null values written"),
        count_cell(counts.nulls_normalized, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.records).add_attribute(Attribute::Bold),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
