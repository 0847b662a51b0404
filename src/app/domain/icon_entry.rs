use std::fs;
use std::path::Path;

use crate::app::error::{AppError, Result};

/// Default location of the icon table, relative to the working directory.
pub const DEFAULT_ICON_TABLE: &str = "freedesktop-icon.txt";

/// One row of the icon table: a symbolic icon name and what it is for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconEntry {
    pub name: String,
    pub description: String,
}

/// Parse a tab-separated `Name\tDescription` table.
///
/// The first line is a header and is skipped, as are blank lines. Every other
/// line must hold exactly two fields.
pub fn parse_icon_table(text: &str) -> Result<Vec<IconEntry>> {
    let mut entries = Vec::new();

    for (idx, raw) in text.lines().enumerate().skip(1) {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split('\t').collect();
        match fields.as_slice() {
            [name, description] if !name.is_empty() => entries.push(IconEntry {
                name: name.to_string(),
                description: description.to_string(),
            }),
            [_, _] => {
                return Err(AppError::Dataset {
                    line: idx + 1,
                    reason: "empty icon name".to_string(),
                });
            }
            other => {
                return Err(AppError::Dataset {
                    line: idx + 1,
                    reason: format!("expected 2 fields, found {}", other.len()),
                });
            }
        }
    }

    Ok(entries)
}

/// Read and parse the icon table at `path`.
pub fn load_icon_table(path: &Path) -> Result<Vec<IconEntry>> {
    let text = fs::read_to_string(path).map_err(|e| AppError::file(path, e))?;
    let entries = parse_icon_table(&text)?;
    log::info!("Loaded {} icon entries from {}", entries.len(), path.display());
    Ok(entries)
}
