use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use rulegen_core::DEFAULT_PALETTE;
use rulegen_model::GenerateResponse;

/// Print the generation statistics to stderr, keeping stdout clean for the
/// generated code.
pub fn print_stats(response: &GenerateResponse) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patterns"),
        header_cell("Priority levels"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    for index in 0..3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        count_cell(response.pattern_count),
        count_cell(response.priorities),
        count_cell(response.csv_rows),
    ]);
    eprintln!("{table}");
}

pub fn print_palette() {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Index"), header_cell("Color")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for (index, color) in DEFAULT_PALETTE.iter().enumerate() {
        table.add_row(vec![Cell::new(index), Cell::new(*color)]);
    }
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(value: Option<usize>) -> Cell {
    match value {
        Some(count) => Cell::new(count),
        None => Cell::new("-").fg(Color::DarkGrey),
    }
}
