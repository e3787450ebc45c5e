use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use regscan_cli::run::AnalysisReport;
use regscan_model::{
    DomesticImpact, DomesticStatus, MatchResult, Quadrant, ReimbursementStatus, format_krw,
};

pub fn print_analysis(report: &AnalysisReport) {
    println!("As of: {}", report.as_of);
    println!(
        "Reference tables: {} names / {} codes in master, {} reimbursed codes, {} ATC names",
        report.bridge.unique_names,
        report.bridge.unique_codes,
        report.bridge.reimbursement_codes,
        report.bridge.secondary_names,
    );
    print_status_table(report);
    print_impact_table(&report.impacts);
    if !report.imminent.is_empty() {
        println!();
        println!("Imminent: {}", report.imminent.join(", "));
    }
    if !report.high_value.is_empty() {
        println!("High-cost reimbursed: {}", report.high_value.join(", "));
    }
}

fn print_status_table(report: &AnalysisReport) {
    let summary = &report.summary;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Status"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for status in DomesticStatus::ALL {
        let count = summary.count(status);
        if count == 0 {
            continue;
        }
        table.add_row(vec![status_cell(status), Cell::new(count)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    println!(
        "Reimbursed: {} (price sum {}), with domestic trials: {}, approved abroad only: {}",
        summary.reimbursed_count,
        format_krw(summary.reimbursed_price_sum),
        summary.with_trials,
        summary.globally_approved_not_domestic,
    );
}

fn print_impact_table(impacts: &[DomesticImpact]) {
    if impacts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("INN"),
        header_cell("Status"),
        header_cell("Quadrant"),
        header_cell("Global"),
        header_cell("Korea"),
        header_cell("HIRA"),
        header_cell("Price"),
        header_cell("Trials"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    for index in [3, 4, 6, 7] {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for impact in impacts {
        table.add_row(vec![
            Cell::new(&impact.inn).add_attribute(Attribute::Bold),
            status_cell(impact.domestic_status),
            quadrant_cell(impact.quadrant()),
            Cell::new(impact.global_score),
            Cell::new(impact.korea_relevance_score),
            reimbursement_cell(impact.reimbursement_status),
            price_cell(impact.price_ceiling),
            count_cell(impact.trial_count()),
            Cell::new(impact.analysis_notes.join("; ")),
        ]);
    }
    println!();
    println!("{table}");
}

pub fn print_lookup(results: &[MatchResult]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Name"),
        header_cell("Code"),
        header_cell("Status"),
        header_cell("Method"),
        header_cell("Criteria"),
        header_cell("Price"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 5, CellAlignment::Right);
    for result in results {
        let criteria = match &result.criteria {
            Some(text) if !result.criteria_recognized => {
                Cell::new(format!("{text} (unrecognized)")).fg(Color::Yellow)
            }
            Some(text) => Cell::new(text),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&result.ingredient_name),
            result
                .ingredient_code
                .as_ref()
                .map_or_else(|| dim_cell("-"), Cell::new),
            reimbursement_cell(Some(result.status)),
            Cell::new(result.match_method),
            criteria,
            price_cell(result.price_ceiling),
        ]);
    }
    println!("{table}");
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).add_attribute(Attribute::Dim)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn price_cell(price: Option<f64>) -> Cell {
    price.map_or_else(|| dim_cell("-"), |price| Cell::new(format_krw(price)))
}

fn status_cell(status: DomesticStatus) -> Cell {
    let color = match status {
        DomesticStatus::Reimbursed => Color::Green,
        DomesticStatus::ApprovedNotReimbursed | DomesticStatus::ApprovedDeleted => Color::Yellow,
        DomesticStatus::Imminent | DomesticStatus::Expected => Color::Magenta,
        DomesticStatus::Uncertain | DomesticStatus::DomesticOnly => Color::Blue,
        DomesticStatus::NotApplicable => return dim_cell(status),
    };
    Cell::new(status).fg(color)
}

fn quadrant_cell(quadrant: Quadrant) -> Cell {
    match quadrant {
        Quadrant::TopPriority => Cell::new(quadrant)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Quadrant::Watch => Cell::new(quadrant).fg(Color::Yellow),
        Quadrant::Track => Cell::new(quadrant).fg(Color::Cyan),
        Quadrant::Normal => dim_cell(quadrant),
    }
}

fn reimbursement_cell(status: Option<ReimbursementStatus>) -> Cell {
    match status {
        Some(ReimbursementStatus::Reimbursed) => Cell::new("reimbursed").fg(Color::Green),
        Some(ReimbursementStatus::Deleted) => Cell::new("deleted").fg(Color::Red),
        Some(status) => Cell::new(status),
        None => dim_cell("-"),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
