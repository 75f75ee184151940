use serde::{Deserialize, Serialize};

use crate::model::ScanType;

/// Raw metadata of one column, as produced by schema introspection.
///
/// Every `Option` is a tri-state: `None` means the driver did not report the
/// attribute, which disables the rules depending on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnMeta {
    pub table_name: String,
    pub name: String,
    /// Driver type name, e.g. `VARCHAR` or `int`
    pub database_type_name: String,
    /// Full column type, e.g. `varchar(255)` or `int(10) unsigned`
    pub column_type: Option<String>,
    pub nullable: Option<bool>,
    pub default_value: Option<String>,
    pub comment: Option<String>,
    pub primary_key: Option<bool>,
    pub auto_increment: Option<bool>,
    pub scan_type: Option<ScanType>,
}

impl ColumnMeta {
    pub fn new(table_name: &str, name: &str, database_type_name: &str) -> Self {
        Self {
            table_name: table_name.to_string(),
            name: name.to_string(),
            database_type_name: database_type_name.to_string(),
            ..Default::default()
        }
    }
}
