pub mod format;
mod render;

pub use render::{render_report, write_report};
