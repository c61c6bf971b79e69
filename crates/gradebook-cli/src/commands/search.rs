//! The `gradebook search` command.

use anyhow::Result;

use gradebook_core::config::OutputFormat;
use gradebook_core::Store;

use crate::render::print_records;

pub fn execute(store: &Store, query: &str, format: OutputFormat) -> Result<()> {
    print_records(&store.search(query), format)
}
