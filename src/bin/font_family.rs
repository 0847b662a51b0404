use anyhow::Result;
use clap::Parser;
use fltk::app;

use toolshed::app::domain::BrowserSettings;
use toolshed::app::infrastructure::fonts::{FltkFontInventory, FontInventory};
use toolshed::app::logging;
use toolshed::cli::FontBrowserArgs;
use toolshed::ui::font_browser::build_font_browser;

fn main() -> Result<()> {
    let args = FontBrowserArgs::parse();
    logging::init(&args.log.log_level);

    let settings = BrowserSettings::load(args.settings.as_deref());

    let app = app::App::default().load_system_fonts();
    let families = FltkFontInventory.families();
    let _wind = build_font_browser(&families, &settings);
    app.run()?;
    Ok(())
}
