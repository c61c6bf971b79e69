//! The `gradebook sort` command.

use anyhow::Result;

use gradebook_core::config::OutputFormat;
use gradebook_core::{SortOrder, Store};

use crate::render::print_records;

pub fn execute(store: &mut Store, descending: bool, format: OutputFormat) -> Result<()> {
    let order = if descending {
        SortOrder::Descending
    } else {
        SortOrder::Ascending
    };
    store.sort_by_percentage(order)?;

    let records: Vec<_> = store.records().iter().collect();
    print_records(&records, format)?;
    if format == OutputFormat::Table {
        println!("Sorted records ({order})");
    }
    Ok(())
}
