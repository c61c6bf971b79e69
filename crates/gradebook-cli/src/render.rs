//! Table and JSON rendering of store results.

use anyhow::Result;
use comfy_table::{Cell, CellAlignment, Table};

use gradebook_core::codec::{MAX_COURSEWORK, MAX_EXAM, MAX_OVERALL};
use gradebook_core::config::OutputFormat;
use gradebook_core::statistics::ClassSummary;
use gradebook_core::{Grade, Record, RecordSummary};

const HEADER: [&str; 9] = [
    "Student #", "Name", "C1", "C2", "C3", "CW Total", "Exam", "Percent", "Grade",
];

/// Print a list of records, in the order given.
pub fn print_records(records: &[&Record], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let summaries: Vec<RecordSummary> = records.iter().map(|r| r.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        OutputFormat::Table => {
            if records.is_empty() {
                println!("No students");
                return Ok(());
            }
            println!("{}", records_table(records));
            println!("Displayed {} students", records.len());
        }
    }
    Ok(())
}

/// Print the "nothing to show" outcome: a message for tables, `null` for JSON.
pub fn print_empty(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("null"),
        OutputFormat::Table => println!("{message}"),
    }
}

/// Print a single record with every derived field spelled out.
pub fn print_detail(record: &Record, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&record.summary())?);
        }
        OutputFormat::Table => {
            let s = record.summary();
            let [c1, c2, c3] = s.coursework;
            println!("Name: {}", s.name);
            println!("Student #: {}", s.code);
            println!("Coursework 1: {c1}");
            println!("Coursework 2: {c2}");
            println!("Coursework 3: {c3}");
            println!(
                "Coursework Total: {} / {}",
                s.coursework_total,
                3 * MAX_COURSEWORK
            );
            println!("Exam: {} / {MAX_EXAM}", s.exam);
            println!("Overall: {} / {MAX_OVERALL}", s.overall);
            println!("Percentage: {:.2}%", s.percentage);
            println!("Grade: {}", s.grade);
        }
    }
    Ok(())
}

/// Print class statistics.
pub fn print_summary(summary: &ClassSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(summary)?);
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table.set_header(vec!["Statistic", "Value"]);
            table.add_row(vec![Cell::new("Students"), Cell::new(summary.count)]);
            table.add_row(vec![
                Cell::new("Average"),
                Cell::new(format!("{:.2}%", summary.mean_percentage)),
            ]);
            table.add_row(vec![
                Cell::new("Highest"),
                Cell::new(format!("{:.2}%", summary.max_percentage)),
            ]);
            table.add_row(vec![
                Cell::new("Lowest"),
                Cell::new(format!("{:.2}%", summary.min_percentage)),
            ]);
            table.add_row(vec![
                Cell::new("Pass rate"),
                Cell::new(format!("{:.1}%", summary.pass_rate() * 100.0)),
            ]);
            for grade in Grade::ALL {
                let count = summary.grade_distribution.get(&grade).copied().unwrap_or(0);
                table.add_row(vec![Cell::new(format!("Grade {grade}")), Cell::new(count)]);
            }
            println!("{table}");
        }
    }
    Ok(())
}

fn records_table(records: &[&Record]) -> Table {
    let mut table = Table::new();
    table.set_header(HEADER.to_vec());

    for record in records {
        let s = record.summary();
        let [c1, c2, c3] = s.coursework;
        table.add_row(vec![
            Cell::new(&s.code),
            Cell::new(&s.name),
            Cell::new(c1).set_alignment(CellAlignment::Right),
            Cell::new(c2).set_alignment(CellAlignment::Right),
            Cell::new(c3).set_alignment(CellAlignment::Right),
            Cell::new(s.coursework_total).set_alignment(CellAlignment::Right),
            Cell::new(s.exam).set_alignment(CellAlignment::Right),
            Cell::new(format!("{:.2}", s.percentage)).set_alignment(CellAlignment::Right),
            Cell::new(s.grade).set_alignment(CellAlignment::Center),
        ]);
    }

    table
}
