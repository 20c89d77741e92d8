pub mod checker;
pub mod color_parse;
pub mod cvd;
pub mod hex;
mod hsl;
pub mod palette;
pub mod wcag;
