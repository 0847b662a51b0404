//! Services layer - the operation behind each tool.
//!
//! - Icon rows for the icon browser
//! - Image inversion
//! - Traditional to simplified Chinese conversion

pub mod icon_rows;
pub mod invert;
pub mod t2s;
