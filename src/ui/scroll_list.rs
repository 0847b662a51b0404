use fltk::{
    group::{Pack, PackType, Scroll, ScrollType},
    prelude::*,
    window::Window,
};

use super::theme::{Palette, apply_theme, palette};
use crate::app::domain::BrowserSettings;

const SCROLLBAR_WIDTH: i32 = 16;
const MARGIN: i32 = 4;
const ROW_SPACING: i32 = 2;

/// A window holding one vertically scrolling column of widgets.
pub struct ScrollList {
    wind: Window,
    scroll: Scroll,
    pack: Pack,
    palette: Palette,
}

impl ScrollList {
    /// Open the window. Widgets created before `finish` become list rows.
    pub fn begin(title: &str, xclass: &str, settings: &BrowserSettings) -> Self {
        let (w, h) = (settings.window_width, settings.window_height);

        let mut wind = Window::new(100, 100, w, h, None);
        wind.set_label(title);
        wind.set_xclass(xclass);

        let mut scroll = Scroll::new(0, 0, w, h, None);
        scroll.set_type(ScrollType::Vertical);
        scroll.set_scrollbar_size(SCROLLBAR_WIDTH);

        let mut pack = Pack::new(MARGIN, MARGIN, column_width(w), 0, None);
        pack.set_type(PackType::Vertical);
        pack.set_spacing(ROW_SPACING);

        Self {
            wind,
            scroll,
            pack,
            palette: palette(settings.theme_mode.is_dark()),
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Close the column, theme the window and show it.
    pub fn finish(self) -> Window {
        let Self {
            mut wind,
            mut scroll,
            mut pack,
            palette,
        } = self;

        pack.end();
        scroll.end();
        wind.end();
        wind.resizable(&scroll);
        apply_theme(&mut wind, &mut scroll, &palette);

        // Pack doesn't follow its parent's width on its own
        wind.resize_callback(move |_, _, _, w, _| {
            let (x, y, h) = (pack.x(), pack.y(), pack.h());
            pack.resize(x, y, column_width(w), h);
        });

        wind.show();
        wind
    }
}

fn column_width(window_width: i32) -> i32 {
    (window_width - SCROLLBAR_WIDTH - 2 * MARGIN).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_width_leaves_room_for_scrollbar() {
        assert_eq!(column_width(480), 480 - 16 - 8);
        assert_eq!(column_width(10), 0);
    }
}
