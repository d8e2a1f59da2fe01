pub mod commands;
pub mod constants;
pub mod render;

pub use commands::{applicable, marker_classes, DomCommand, Role};
