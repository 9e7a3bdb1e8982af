//! Option list loading from JSON files.
//!
//! The demo application lets the user swap in their own option source.
//! The file format is a JSON array of `{"value": ..., "label": ...}`
//! objects; order in the file is the order the control shows.

use anyhow::{Context, Result};
use std::path::Path;

use crate::options::{ComboOption, OptionList};

/// Loads an ordered option list from a JSON file.
///
/// # Arguments
/// * `path` - Path to a JSON array of value/label objects
///
/// # Returns
/// The parsed option list, or an error describing which step failed.
pub fn load_options_from_file(path: &Path) -> Result<OptionList> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read option file: {}", path.display()))?;

    let options: Vec<ComboOption> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse option file: {}", path.display()))?;

    Ok(OptionList::new(options))
}
