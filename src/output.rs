//! Terminal output: event descriptions and colorization

pub mod color;
pub mod describe;

pub use color::{paint, Style};
pub use describe::describe_event;
