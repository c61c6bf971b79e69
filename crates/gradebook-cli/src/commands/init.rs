//! The `gradebook init` command.

use std::path::Path;

use anyhow::Result;

use gradebook_core::config::LOCAL_CONFIG;
use gradebook_core::store;

pub fn execute(data_file: &Path) -> Result<()> {
    if Path::new(LOCAL_CONFIG).exists() {
        println!("{LOCAL_CONFIG} already exists, skipping.");
    } else {
        std::fs::write(LOCAL_CONFIG, sample_config(data_file))?;
        println!("Created {LOCAL_CONFIG}");
    }

    if data_file.exists() {
        println!("{} already exists, skipping.", data_file.display());
    } else {
        store::load(data_file)?;
        println!("Created {}", data_file.display());
    }

    println!("\nNext steps:");
    println!("  1. Run: gradebook add --code S1 --name \"Ada Lovelace\" --cw1 18 --cw2 17 --cw3 19 --exam 88");
    println!("  2. Run: gradebook list");
    println!("  3. Run: gradebook stats");

    Ok(())
}

fn sample_config(data_file: &Path) -> String {
    let data_file = data_file.display().to_string().replace('\\', "/");
    format!(
        r#"# gradebook configuration

# Student records, one per line: code,name,c1,c2,c3,exam
data_file = "{data_file}"

# Output format when --format is not given: "table" or "json"
default_format = "table"
"#
    )
}
