//! Small desktop utilities built on FLTK.
//!
//! Four independent programs share this library:
//!
//! - `fd-icon` lists freedesktop icon names with their themed icons
//! - `font-family` lists the installed font families, each in its own face
//! - `invimage` writes the color complement of an image
//! - `t2s` converts traditional Chinese text to simplified

pub mod app;
pub mod cli;
pub mod ui;
