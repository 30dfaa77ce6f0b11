pub mod command;

pub use command::{Color, DrawCommand, DrawKind, RenderBuffer};
