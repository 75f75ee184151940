use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Membership of one column in a named index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    pub name: String,
    /// 1-based position of the column inside the (possibly composite) index
    pub priority: i32,
    pub primary_key: bool,
    pub unique: bool,
}

impl Index {
    pub fn new(name: &str, priority: i32) -> Self {
        Self { name: name.to_string(), priority, primary_key: false, unique: false }
    }

    pub fn unique(name: &str, priority: i32) -> Self {
        Self { unique: true, ..Self::new(name, priority) }
    }

    pub fn primary(name: &str, priority: i32) -> Self {
        Self { primary_key: true, unique: true, ..Self::new(name, priority) }
    }

    /// Tag value rendered for this membership, `<name>,priority:<n>`.
    pub fn tag_value(&self) -> String {
        format!("{},priority:{}", self.name, self.priority)
    }
}

/// A table-level index as reported by introspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableIndex {
    pub name: String,
    /// Indexed column names, in index order
    pub columns: Vec<String>,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
}

impl TableIndex {
    /// Split table indexes into per-column memberships.
    ///
    /// The result is keyed by column name in first-seen order; each column
    /// gets one `Index` per index it appears in, with its position as priority.
    pub fn group_by_column(indexes: &[TableIndex]) -> IndexMap<String, Vec<Index>> {
        let mut by_column: IndexMap<String, Vec<Index>> = IndexMap::new();
        for idx in indexes {
            for (pos, column) in idx.columns.iter().enumerate() {
                by_column.entry(column.clone()).or_default().push(Index {
                    name: idx.name.clone(),
                    priority: pos as i32 + 1,
                    primary_key: idx.primary_key,
                    unique: idx.unique,
                });
            }
        }
        by_column
    }
}
