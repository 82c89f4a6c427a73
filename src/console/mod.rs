/// Console presentation layer
///
/// Gathers input field-by-field and renders results as text. Knows nothing
/// about SQL; the binaries wire it to the storage layer.

pub mod menu;
pub mod prompt;
pub mod render;

pub use menu::MenuChoice;
pub use prompt::{prompt_f64, prompt_i64, prompt_line};
