pub mod analyze;
mod common;
pub mod run;
