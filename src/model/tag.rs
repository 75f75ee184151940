use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TAG_KEY_JSON: &str = "json";
pub const TAG_KEY_BINDING: &str = "binding";

/// Generic single-valued struct tags (`json`, `binding`, ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag(IndexMap<String, String>);

impl Tag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Tag {
    /// `json:"email" binding:"required"`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{key}:\"{value}\"")?;
        }
        Ok(())
    }
}
