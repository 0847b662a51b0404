use std::path::PathBuf;

use crate::app::domain::IconEntry;
use crate::app::infrastructure::icon_theme::IconResolver;

/// What one button of the icon browser shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRow {
    pub label: String,
    pub tooltip: String,
    pub icon: Option<PathBuf>,
}

/// One row per entry, in table order.
pub fn icon_rows(entries: &[IconEntry], resolver: &dyn IconResolver) -> Vec<IconRow> {
    let rows: Vec<IconRow> = entries
        .iter()
        .map(|entry| {
            let icon = resolver.resolve(&entry.name);
            if icon.is_none() {
                log::debug!("No themed icon for {}", entry.name);
            }
            IconRow {
                label: entry.name.clone(),
                tooltip: entry.description.clone(),
                icon,
            }
        })
        .collect();

    let resolved = rows.iter().filter(|r| r.icon.is_some()).count();
    log::info!("Resolved {} of {} icons", resolved, rows.len());
    rows
}
