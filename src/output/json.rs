//! JSON output formatter

use serde::Serialize;

use crate::error::Result;

/// Formatter for JSON output
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    /// Indent the output instead of emitting a single line
    pub pretty: bool,
}

impl JsonFormatter {
    /// Create a formatter
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Serialize a value to a JSON string
    pub fn format<T: Serialize + ?Sized>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    /// Print a value to stdout as JSON
    pub fn print<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", self.format(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_compact_by_default() {
        let formatter = JsonFormatter::default();
        let out = formatter.format(&json!({"a": [1, 2]})).unwrap();
        assert_eq!(out, r#"{"a":[1,2]}"#);
    }

    #[test]
    fn test_pretty() {
        let formatter = JsonFormatter::new(true);
        let out = formatter.format(&json!({"a": 1})).unwrap();
        assert!(out.contains('\n'));
        assert!(out.contains("\"a\": 1"));
    }

    #[test]
    fn test_empty_array() {
        let accounts: Vec<serde_json::Value> = Vec::new();
        assert_eq!(JsonFormatter::default().format(&accounts).unwrap(), "[]");
    }
}
