use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    prelude::*,
    window::Window,
};

use super::escape_label;
use super::scroll_list::ScrollList;
use super::theme::style_row;
use crate::app::domain::{BrowserSettings, FontFamily};

/// Build and show the font browser: each family's name drawn in that family.
pub fn build_font_browser(families: &[FontFamily], settings: &BrowserSettings) -> Window {
    let list = ScrollList::begin("Font Families", "font-family", settings);
    let palette = *list.palette();
    let row_height = settings.row_height.max(settings.font_size + 8);

    for family in families {
        let mut label = Frame::default().with_size(0, row_height);
        label.set_label(&escape_label(&family.name));
        label.set_frame(FrameType::FlatBox);
        label.set_align(Align::Left | Align::Inside);
        label.set_label_font(Font::by_index(family.index));
        label.set_label_size(settings.font_size);
        style_row(&mut label, &palette);
    }

    list.finish()
}
