pub mod font_browser;
pub mod icon_browser;
pub mod scroll_list;
pub mod theme;

/// Make text safe to use as an FLTK label or tooltip.
///
/// FLTK reads `@` as the start of a symbol name; `@@` draws a literal `@`.
pub fn escape_label(text: &str) -> String {
    text.replace('@', "@@")
}
