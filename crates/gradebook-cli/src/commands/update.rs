//! The `gradebook update` command.

use anyhow::Result;

use gradebook_core::{RecordUpdate, Store, StoreError};

pub fn execute(
    store: &mut Store,
    code: &str,
    name: Option<String>,
    coursework: [Option<u32>; 3],
    exam: Option<u32>,
) -> Result<()> {
    let code = code.trim();
    let mut update = store
        .find(code)
        .map(RecordUpdate::from)
        .ok_or_else(|| StoreError::NotFound(code.to_string()))?;

    if let Some(name) = name {
        update.name = name;
    }
    for (slot, mark) in update.coursework.iter_mut().zip(coursework) {
        if let Some(mark) = mark {
            *slot = mark;
        }
    }
    if let Some(exam) = exam {
        update.exam = exam;
    }

    store.update(code, update)?;
    println!("Updated student {code}");
    Ok(())
}
