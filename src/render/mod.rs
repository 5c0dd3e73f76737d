//! Output production: JSON serialization and schema sanitization.

mod json;
mod sanitize;

pub use json::{to_json, JsonFormat};
pub use sanitize::sanitize;
