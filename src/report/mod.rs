pub mod text;

pub use text::{RenderOptions, RenderStyle, TextReport, EXTERNAL_BLOCKERS_HEADER};
