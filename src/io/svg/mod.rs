//! SVG format writing operations for visualization export.

mod color;
mod proj;
mod writer;

pub use color::{ColorScheme, Rgb};
pub(crate) use proj::*;
pub(crate) use writer::*;
