//! The `gradebook list` command.

use anyhow::Result;

use gradebook_core::config::OutputFormat;
use gradebook_core::Store;

use crate::render::print_records;

pub fn execute(store: &Store, format: OutputFormat) -> Result<()> {
    let records: Vec<_> = store.records().iter().collect();
    print_records(&records, format)
}
