use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use fltk::app;

use toolshed::app::domain::icon_entry::{DEFAULT_ICON_TABLE, load_icon_table};
use toolshed::app::domain::BrowserSettings;
use toolshed::app::infrastructure::icon_theme::{FALLBACK_THEME, ThemeIconResolver};
use toolshed::app::infrastructure::platform::detect_icon_theme;
use toolshed::app::logging;
use toolshed::app::services::icon_rows::icon_rows;
use toolshed::cli::IconBrowserArgs;
use toolshed::ui::icon_browser::build_icon_browser;

fn main() -> Result<()> {
    let args = IconBrowserArgs::parse();
    logging::init(&args.log.log_level);

    let settings = BrowserSettings::load(args.settings.as_deref());

    let table = args
        .data
        .or_else(|| settings.icon_table.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ICON_TABLE));
    let entries = load_icon_table(&table).context("loading icon table")?;

    let theme = args
        .theme
        .or_else(|| settings.icon_theme.clone())
        .or_else(detect_icon_theme)
        .unwrap_or_else(|| FALLBACK_THEME.to_string());
    let resolver = ThemeIconResolver::new(theme, settings.icon_size.unsigned_abs());
    log::info!("Using icon theme {}", resolver.theme());
    let rows = icon_rows(&entries, &resolver);

    let app = app::App::default();
    let _wind = build_icon_browser(&rows, &settings);
    app.run()?;
    Ok(())
}
