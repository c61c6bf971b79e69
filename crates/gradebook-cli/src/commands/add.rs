//! The `gradebook add` command.

use anyhow::Result;

use gradebook_core::{Record, Store};

pub fn execute(
    store: &mut Store,
    code: String,
    name: String,
    coursework: [u32; 3],
    exam: u32,
) -> Result<()> {
    store.add(Record::new(code, name, coursework, exam))?;

    if let Some(added) = store.records().last() {
        println!("Added student {} (grade {})", added.code, added.grade());
    }
    Ok(())
}
