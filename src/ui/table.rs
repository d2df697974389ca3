use tabled::{Table, Tabled, settings::Style};

use crate::scan::BindingRecord;

#[derive(Tabled)]
struct BindingRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Location")]
    location: String,
}

#[derive(Tabled)]
struct StatsRow {
    #[tabled(rename = "Metric")]
    metric: String,
    #[tabled(rename = "Value")]
    value: String,
}

/// Render extracted bindings as a table.
pub fn bindings_table(records: &[BindingRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let rows: Vec<BindingRow> = records
        .iter()
        .map(|record| BindingRow {
            name: record.name.clone(),
            location: format!("{}:{}:{}", record.path, record.line, record.column),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}

/// Render label/value pairs as a table.
pub fn stats_table(stats: &[(&str, String)]) -> String {
    let rows: Vec<StatsRow> = stats
        .iter()
        .map(|(label, value)| StatsRow {
            metric: label.to_string(),
            value: value.clone(),
        })
        .collect();

    Table::new(rows).with(Style::rounded()).to_string()
}
