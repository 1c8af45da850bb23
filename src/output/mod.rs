//! Output formatting module

mod json;

pub use self::json::JsonFormatter;
