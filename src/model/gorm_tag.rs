use std::fmt::Display;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const TAG_KEY_GORM_COLUMN: &str = "column";
pub const TAG_KEY_GORM_TYPE: &str = "type";
pub const TAG_KEY_GORM_PRIMARY_KEY: &str = "primaryKey";
pub const TAG_KEY_GORM_AUTO_INCREMENT: &str = "autoIncrement";
pub const TAG_KEY_GORM_NOT_NULL: &str = "not null";
pub const TAG_KEY_GORM_INDEX: &str = "index";
pub const TAG_KEY_GORM_UNIQUE_INDEX: &str = "uniqueIndex";
pub const TAG_KEY_GORM_DEFAULT: &str = "default";
pub const TAG_KEY_GORM_COMMENT: &str = "comment";

/// Storage-mapping tags of a field, keyed by GORM tag key.
///
/// A key may hold several values; this is how a column that belongs to
/// several indexes gets one `index` entry per membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GormTag(IndexMap<String, Vec<String>>);

impl GormTag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value of `key` with `value`.
    pub fn set(&mut self, key: &str, value: &str) {
        self.0.insert(key.to_string(), vec![value.to_string()]);
    }

    /// Add `value` to the values of `key`.
    pub fn append(&mut self, key: &str, value: &str) {
        self.0.entry(key.to_string()).or_default().push(value.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// First value of `key`, if any.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(|v| v.first()).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for GormTag {
    /// `column:id;type:bigint;primaryKey;autoIncrement:true`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (key, values) in &self.0 {
            for value in values {
                if !first {
                    f.write_str(";")?;
                }
                first = false;
                if value.is_empty() {
                    f.write_str(key)?;
                } else {
                    write!(f, "{key}:{value}")?;
                }
            }
        }
        Ok(())
    }
}
