//! Console-variable style settings store
//!
//! Values are kept as strings, the way the host stores them, and read back
//! with the host's lenient numeric rules: leading garbage-free digits are
//! used, anything else reads as zero.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Key/value settings
#[derive(Debug, Clone, Default)]
pub struct Settings {
    values: HashMap<String, String>,
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.values.insert(key.into(), value.to_string());
        self
    }

    /// Load a flat JSON object of strings, numbers and booleans
    pub fn from_json(json: &str) -> Result<Self> {
        let doc: serde_json::Value = serde_json::from_str(json)?;
        let object = doc.as_object().ok_or(Error::NotAnObject)?;

        let mut settings = Self::new();
        for (key, value) in object {
            let text = match value {
                serde_json::Value::String(s) => s.clone(),
                serde_json::Value::Number(n) => n.to_string(),
                serde_json::Value::Bool(b) => if *b { "1" } else { "0" }.to_string(),
                _ => return Err(Error::InvalidValue(key.clone())),
            };
            settings.values.insert(key.clone(), text);
        }
        Ok(settings)
    }

    /// Set a value. Returns whether the stored value changed.
    pub fn set(&mut self, key: impl Into<String>, value: impl ToString) -> bool {
        let value = value.to_string();
        let key = key.into();
        if self.values.get(&key) == Some(&value) {
            return false;
        }
        self.values.insert(key, value);
        true
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn str_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.get(key).unwrap_or(default)
    }

    pub fn int_or(&self, key: &str, default: i64) -> i64 {
        self.get(key).map_or(default, parse_int)
    }

    pub fn float_or(&self, key: &str, default: f32) -> f32 {
        self.get(key).map_or(default, parse_float)
    }

    /// Booleans are integers; anything non-zero is true
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).map_or(default, |v| match v.trim() {
            "true" => true,
            "false" => false,
            other => parse_float(other) != 0.0,
        })
    }
}

/// Parse the leading integer of a string, zero if there is none
pub fn parse_int(text: &str) -> i64 {
    let text = text.trim();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        if !text.is_empty() {
            log::warn!("Setting value '{}' is not numeric, reading as 0", text);
        }
        return 0;
    }

    let magnitude = digits[..end].parse::<i64>().unwrap_or(i64::MAX);
    if negative {
        -magnitude
    } else {
        magnitude
    }
}

/// Parse a float, falling back to the leading integer
pub fn parse_float(text: &str) -> f32 {
    text.trim()
        .parse::<f32>()
        .unwrap_or_else(|_| parse_int(text) as f32)
}
