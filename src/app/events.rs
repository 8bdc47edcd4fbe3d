//! TransformCommand-Enum für den Command-Datenfluss.

mod command;

pub use command::TransformCommand;
