//! The `gradebook highest`, `lowest`, and `stats` commands.

use anyhow::Result;

use gradebook_core::config::OutputFormat;
use gradebook_core::{Record, Store};

use crate::render::{print_empty, print_records, print_summary};

pub fn highest(store: &Store, format: OutputFormat) -> Result<()> {
    print_extreme(store.highest(), "Highest", format)
}

pub fn lowest(store: &Store, format: OutputFormat) -> Result<()> {
    print_extreme(store.lowest(), "Lowest", format)
}

pub fn summary(store: &Store, format: OutputFormat) -> Result<()> {
    match store.summary() {
        Some(summary) => print_summary(&summary, format),
        None => {
            print_empty("No students", format);
            Ok(())
        }
    }
}

fn print_extreme(record: Option<&Record>, label: &str, format: OutputFormat) -> Result<()> {
    let Some(record) = record else {
        print_empty("No students", format);
        return Ok(());
    };

    print_records(&[record], format)?;
    if format == OutputFormat::Table {
        println!("{label} overall: {} - {}", record.code, record.name);
    }
    Ok(())
}
