use std::path::Path;

use anyhow::{Context, Result};
use regmirror_core::{ModuleRecord, is_local_module};

pub fn local_module(file: &Path) -> Result<()> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let records: Vec<ModuleRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse module rows in {}", file.display()))?;
    println!("{}", is_local_module(&records));
    Ok(())
}
