use crate::model::{Severity, VulnerabilityRecord};
use anyhow::Result;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Severity")]
    severity: String,
    #[tabled(rename = "Description")]
    description: String,
}

pub fn print_record_table(records: &[VulnerabilityRecord]) -> Result<()> {
    if records.is_empty() {
        println!("No vulnerability patterns matched.");
        return Ok(());
    }

    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow {
            name: r.name.clone(),
            severity: format_severity(&r.severity),
            description: truncate(&r.description, 60),
        })
        .collect();

    let table = Table::new(rows).with(Style::rounded()).to_string();
    println!("{}", table);

    println!();
    print_summary(records);

    Ok(())
}

fn print_summary(records: &[VulnerabilityRecord]) {
    let critical = records.iter().filter(|r| r.severity == Severity::Critical).count();
    let high = records.iter().filter(|r| r.severity == Severity::High).count();
    let medium = records.iter().filter(|r| r.severity == Severity::Medium).count();
    let low = records.iter().filter(|r| r.severity == Severity::Low).count();

    println!(
        "Summary: {} patterns ({} critical, {} high, {} medium, {} low)",
        records.len(),
        critical,
        high,
        medium,
        low
    );
}

fn format_severity(severity: &Severity) -> String {
    match severity {
        Severity::Critical => "\x1b[31mCRITICAL\x1b[0m".to_string(),
        Severity::High => "\x1b[91mHIGH\x1b[0m".to_string(),
        Severity::Medium => "\x1b[33mMEDIUM\x1b[0m".to_string(),
        Severity::Low => "\x1b[32mLOW\x1b[0m".to_string(),
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...", &s[..max_len - 3])
    }
}
