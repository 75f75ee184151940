use serde::{Deserialize, Serialize};

/// Coarse classification of the native type a driver scans a column into.
///
/// Only the category matters to the default-tag policy, so integer and
/// float widths are folded together.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanKind {
    Bool,
    /// Any signed or unsigned integer width
    Int,
    /// Any floating-point width
    Float,
    String,
    /// Composite value such as a timestamp or a nullable wrapper
    Struct,
    #[default]
    Other,
}

impl ScanKind {
    /// `true` for the scalar kinds whose defaults are always worth pinning.
    pub fn is_scalar(&self) -> bool {
        matches!(self, ScanKind::Bool | ScanKind::Int | ScanKind::Float | ScanKind::String)
    }
}

/// Native scan type reported by the driver: its type name plus its kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanType {
    /// Canonical type name, e.g. `sql.NullString` or `int64`
    pub name: String,
    pub kind: ScanKind,
}

impl ScanType {
    pub fn new(name: &str, kind: ScanKind) -> Self {
        Self { name: name.to_string(), kind }
    }
}
