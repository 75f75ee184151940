use serde::{Deserialize, Serialize};

/// Characters stripped from composite defaults before deciding whether they
/// carry a real value, e.g. `'0000-00-00 00:00:00'` strips to nothing.
pub const DEFAULT_ZERO_VALUE_CHARS: &str = "'0:- ";

/// Rules deciding which raw column defaults are pinned in the `default` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultPolicy {
    /// Trimmed from both ends of a composite-kind default; if nothing is left
    /// the default is treated as a zero value and dropped.
    pub zero_value_chars: String,
    /// Columns maintained by the driver or ORM; their defaults are dropped
    /// unless the column scans into a scalar or composite kind.
    pub managed_columns: Vec<String>,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self {
            zero_value_chars: DEFAULT_ZERO_VALUE_CHARS.to_string(),
            managed_columns: vec!["created_at".to_string(), "updated_at".to_string()],
        }
    }
}

impl DefaultPolicy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_zero_value(&self, value: &str) -> bool {
        value.trim_matches(|c| self.zero_value_chars.contains(c)).is_empty()
    }

    pub fn is_managed(&self, column_name: &str) -> bool {
        self.managed_columns.iter().any(|c| c == column_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values() {
        let p = DefaultPolicy::default();
        assert!(p.is_zero_value("'0000-00-00 00:00:00'"));
        assert!(p.is_zero_value("'0'"));
        assert!(p.is_zero_value(""));
        assert!(!p.is_zero_value("CURRENT_TIMESTAMP"));
        assert!(!p.is_zero_value("'2020-01-01'"));
    }

    #[test]
    fn managed_columns() {
        let p = DefaultPolicy::default();
        assert!(p.is_managed("created_at"));
        assert!(p.is_managed("updated_at"));
        assert!(!p.is_managed("deleted_at"));
    }

    #[test]
    fn custom_zero_chars() {
        let p = DefaultPolicy { zero_value_chars: "'0".into(), ..Default::default() };
        assert!(p.is_zero_value("'000'"));
        assert!(!p.is_zero_value("'0000-00-00'"));
    }
}
