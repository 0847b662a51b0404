use fltk::{enums::Color, group::Scroll, prelude::*, window::Window};

/// Colors used by the browser windows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub window: Color,
    pub row: Color,
    pub text: Color,
    pub selection: Color,
}

pub fn palette(is_dark: bool) -> Palette {
    if is_dark {
        Palette {
            window: Color::from_rgb(25, 25, 25),
            row: Color::from_rgb(35, 35, 35),
            text: Color::from_rgb(220, 220, 220),
            selection: Color::from_rgb(60, 60, 60),
        }
    } else {
        Palette {
            window: Color::from_rgb(240, 240, 240),
            row: Color::White,
            text: Color::Black,
            selection: Color::from_rgb(200, 200, 200),
        }
    }
}

pub fn apply_theme(window: &mut Window, scroll: &mut Scroll, palette: &Palette) {
    window.set_color(palette.window);
    window.set_label_color(palette.text);
    scroll.set_color(palette.window);

    window.redraw();
    scroll.redraw();
}

/// Apply row colors to one list entry
pub fn style_row<W: WidgetExt>(row: &mut W, palette: &Palette) {
    row.set_color(palette.row);
    row.set_selection_color(palette.selection);
    row.set_label_color(palette.text);
}
