use anyhow::{Context, Result};
use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use serde_json::json;

use attend_metrics::EventSummary;

use crate::cli::ReportFormatArg;
use crate::types::ReportResult;

pub fn print_report(result: &ReportResult, format: ReportFormatArg) -> Result<()> {
    match format {
        ReportFormatArg::Table => print_summary(result),
        ReportFormatArg::Json => print_json(result)?,
    }
    Ok(())
}

fn print_json(result: &ReportResult) -> Result<()> {
    let value = json!({
        "summary": result.report.summary,
        "warnings": result.report.warnings,
        "charts": result.charts,
        "output": result.output,
    });
    let text = serde_json::to_string_pretty(&value).context("serialize summary")?;
    println!("{text}");
    Ok(())
}

fn print_summary(result: &ReportResult) {
    let summary = &result.report.summary;
    print_overview(summary);
    print_category_table(summary);
    print_arrival_table(summary);
    if let Some(path) = &result.charts {
        println!("Charts: {}", path.display());
    }
    if let Some(path) = &result.output {
        println!("Merged set: {}", path.display());
    }
    if !result.report.warnings.is_empty() {
        eprintln!("Warnings:");
        for warning in &result.report.warnings {
            eprintln!("- {warning}");
        }
    }
}

fn print_overview(summary: &EventSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Registered"),
        Cell::new(summary.attendance.total).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new("Attended"),
        count_cell(summary.attendance.attended, Color::Green),
    ]);
    table.add_row(vec![
        Cell::new("No-shows"),
        count_cell(summary.no_shows.no_shows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Attendance rate"),
        Cell::new(percent(summary.attendance.rate)),
    ]);
    table.add_row(vec![
        Cell::new("No-show rate"),
        Cell::new(percent(summary.no_shows.rate)),
    ]);
    table.add_row(vec![
        Cell::new("Average arrival"),
        match summary.average_arrival {
            Some(time) => Cell::new(time.format("%Y-%m-%d %H:%M:%S")),
            None => dim_cell("-"),
        },
    ]);
    println!("{table}");
}

fn print_category_table(summary: &EventSummary) {
    if summary.categories.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Registered"),
        header_cell("Attended"),
        header_cell("No-shows"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (category, counts) in &summary.categories {
        table.add_row(vec![
            Cell::new(category)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(counts.total),
            count_cell(counts.shows, Color::Green),
            count_cell(counts.no_shows, Color::Yellow),
        ]);
    }
    println!();
    println!("Categories:");
    println!("{table}");
}

fn print_arrival_table(summary: &EventSummary) {
    if summary.arrivals_by_hour.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Hour"), header_cell("Check-ins")]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    for (hour, count) in &summary.arrivals_by_hour {
        table.add_row(vec![Cell::new(format!("{hour:02}:00")), Cell::new(count)]);
    }
    println!();
    println!("Arrivals:");
    println!("{table}");
}

fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
