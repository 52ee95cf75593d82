use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use anyhow::Result;
use redundoc_check::{Problem, ProblemTarget};
use redundoc_cli::report::CheckReport;

pub fn print_report(report: &CheckReport) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Line"),
        header_cell("Target"),
        header_cell("Code"),
        header_cell("Message"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    for file in &report.files {
        for problem in &file.problems {
            table.add_row(vec![
                Cell::new(file.path.display()).fg(Color::Blue),
                Cell::new(problem.span.line),
                target_cell(problem),
                Cell::new(problem.kind.code()).fg(Color::Yellow),
                Cell::new(&problem.message),
            ]);
        }
    }

    let files = report.files.len();
    let problems = report.problem_count();
    let fixed = report.files.iter().filter(|file| file.fixed).count();
    if problems > 0 {
        println!("{table}");
    }
    let totals = format!("{problems} problem(s) in {files} file(s)");
    if fixed > 0 {
        println!("{totals}, fixed {fixed} file(s)");
    } else {
        println!("{totals}");
    }

    if !report.errors.is_empty() {
        eprintln!("Errors:");
        for error in &report.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn print_report_json(report: &CheckReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(report)?);
    Ok(())
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::LowerBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(28)),
            ColumnConstraint::UpperBoundary(Width::Percentage(45)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn target_cell(problem: &Problem) -> Cell {
    match problem.target {
        ProblemTarget::Comment => Cell::new("comment"),
        ProblemTarget::Tag(idx) => Cell::new(format!("tag #{}", idx + 1)).fg(Color::DarkGrey),
    }
}

pub fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
