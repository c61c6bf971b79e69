//! The `gradebook show` command.

use anyhow::Result;

use gradebook_core::config::OutputFormat;
use gradebook_core::Store;

use crate::render::{print_detail, print_empty};

pub fn execute(store: &Store, code: &str, format: OutputFormat) -> Result<()> {
    match store.find(code.trim()) {
        Some(record) => print_detail(record, format),
        None => {
            print_empty("Student not found.", format);
            Ok(())
        }
    }
}
