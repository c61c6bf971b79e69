//! The `gradebook delete` command.

use anyhow::Result;

use gradebook_core::Store;

pub fn execute(store: &mut Store, code: &str) -> Result<()> {
    let removed = store.delete(code.trim())?;
    println!("Deleted student {} - {}", removed.code, removed.name);
    Ok(())
}
