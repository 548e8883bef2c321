use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};

use crate::{health::processor::CellHealthMetric, quantity::resistance::Milliohms};

/// Render the per-cell health report.
pub fn build_metrics_table(rows: &[(CellHealthMetric, bool)]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED).apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.enforce_styling();
    table.set_header(vec!["Cell", "SoC", "SoH", "Resistance", "Temperature", "Verdict"]);
    for (metric, passes) in rows {
        table.add_row(vec![
            Cell::new(metric.cell_id).add_attribute(Attribute::Bold),
            Cell::new(metric.soc).set_alignment(CellAlignment::Right),
            Cell::new(metric.soh).set_alignment(CellAlignment::Right).fg(if metric.soh.0 >= 90.0 {
                Color::Green
            } else if metric.soh.0 >= 80.0 {
                Color::DarkYellow
            } else {
                Color::Red
            }),
            Cell::new(metric.internal_resistance).set_alignment(CellAlignment::Right).fg(
                if metric.internal_resistance == Milliohms::ZERO {
                    // Zero means «could not be estimated», not a perfect cell.
                    Color::Grey
                } else {
                    Color::Reset
                },
            ),
            Cell::new(metric.temperature).set_alignment(CellAlignment::Right),
            if *passes {
                Cell::new("pass").fg(Color::Green)
            } else {
                Cell::new("FAIL").fg(Color::Red).add_attribute(Attribute::Bold)
            },
        ]);
    }
    table
}
