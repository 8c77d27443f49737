pub mod configure;
pub mod evaluate;
pub mod show;

use crate::core::data::{FinancialData, InputEnvelope};
use anyhow::{Context, Result};
use std::path::Path;

/// Read and parse a financial record from a JSON file.
///
/// By default the file is expected to wrap the record under a `"data"`
/// key; `bare` reads the record from the top level instead.
pub fn load_record(path: &Path, bare: bool) -> Result<FinancialData> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read data file: {}", path.display()))?;

    if bare {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse financial record: {}", path.display()))
    } else {
        let envelope: InputEnvelope = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse financial record: {}", path.display()))?;
        Ok(envelope.data)
    }
}
