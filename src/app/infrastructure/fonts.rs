use fltk::app;

use crate::app::domain::{FontFamily, group_families};

/// Source of the face names known to the graphics environment.
pub trait FontInventory {
    /// Face names in toolkit index order.
    fn font_names(&self) -> Vec<String>;

    fn families(&self) -> Vec<FontFamily> {
        let families = group_families(&self.font_names());
        log::info!("Found {} font families", families.len());
        families
    }
}

/// FLTK's font table.
///
/// System fonts must already be registered, see `App::load_system_fonts`.
pub struct FltkFontInventory;

impl FontInventory for FltkFontInventory {
    fn font_names(&self) -> Vec<String> {
        app::fonts()
    }
}
