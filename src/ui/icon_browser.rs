use fltk::{
    app,
    button::Button,
    enums::{Align, FrameType},
    image::SharedImage,
    prelude::*,
    window::Window,
};

use super::escape_label;
use super::scroll_list::ScrollList;
use super::theme::style_row;
use crate::app::domain::BrowserSettings;
use crate::app::services::icon_rows::IconRow;

/// Build and show the icon browser: one button per row.
///
/// Clicking a button copies its icon name to the clipboard.
pub fn build_icon_browser(rows: &[IconRow], settings: &BrowserSettings) -> Window {
    let list = ScrollList::begin("Icon Theme Browser", "fd-icon", settings);
    let palette = *list.palette();

    for row in rows {
        let mut btn = Button::default().with_size(0, settings.row_height);
        btn.set_label(&escape_label(&row.label));
        btn.set_tooltip(&escape_label(&row.tooltip));
        btn.set_frame(FrameType::FlatBox);
        btn.set_align(Align::Left | Align::Inside | Align::ImageNextToText);
        style_row(&mut btn, &palette);

        if let Some(path) = &row.icon {
            match SharedImage::load(path) {
                Ok(mut icon) => {
                    icon.scale(settings.icon_size, settings.icon_size, true, true);
                    btn.set_image(Some(icon));
                }
                Err(e) => log::debug!("Could not load {}: {}", path.display(), e),
            }
        }

        let name = row.label.clone();
        btn.set_callback(move |_| {
            app::copy(&name);
            log::info!("Copied {} to clipboard", name);
        });
    }

    list.finish()
}
