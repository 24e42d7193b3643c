use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{TrendOutcome, ValueKind};

pub fn print_summary(outcome: &TrendOutcome) {
    println!("{}", outcome.title);

    let mut table = Table::new();
    table.set_header(vec![header_cell("Month"), header_cell(outcome.value_label)]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for point in &outcome.series.points {
        table.add_row(vec![
            Cell::new(point.month.to_string()),
            Cell::new(format_value(point.value, outcome.value_kind)),
        ]);
    }
    println!("{table}");

    match &outcome.baseline {
        Some(stat) => {
            let (lo, hi) = stat.band();
            println!(
                "Baseline mean: {}",
                format_stat(stat.mean, outcome.value_kind)
            );
            println!(
                "95% CI half-width: {}",
                format_stat(stat.ci95, outcome.value_kind)
            );
            println!(
                "Baseline band: {} to {}",
                format_stat(lo, outcome.value_kind),
                format_stat(hi, outcome.value_kind)
            );
        }
        None => println!("Baseline: not computed (series too short)"),
    }
    for path in &outcome.written {
        println!("Wrote: {}", path.display());
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn format_value(value: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Count => format!("{value:.0}"),
        ValueKind::Ratio => format!("{value:.4}"),
    }
}

// Baseline statistics are fractional even for count series.
fn format_stat(value: f64, kind: ValueKind) -> String {
    match kind {
        ValueKind::Count => format!("{value:.2}"),
        ValueKind::Ratio => format!("{value:.4}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_render_as_integers() {
        assert_eq!(format_value(244.0, ValueKind::Count), "244");
    }

    #[test]
    fn ratios_render_with_four_decimals() {
        assert_eq!(format_value(0.0375, ValueKind::Ratio), "0.0375");
        assert_eq!(format_value(0.25, ValueKind::Ratio), "0.2500");
    }

    #[test]
    fn count_statistics_keep_two_decimals() {
        assert_eq!(format_stat(243.58, ValueKind::Count), "243.58");
    }
}
