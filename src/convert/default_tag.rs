use crate::model::{Column, ColumnMeta, ScanKind};

/// Decides whether, and with which value, a column default is pinned in the
/// `default` tag.
pub struct DefaultTag;

impl DefaultTag {
    /// Raw default as a tag value. A blank default is kept as a quoted empty
    /// string so it stays distinguishable from having no default at all.
    pub fn value(meta: &ColumnMeta) -> Option<String> {
        let value = meta.default_value.as_deref()?;
        if value.trim().is_empty() {
            return Some(format!("'{value}'"));
        }
        Some(value.to_string())
    }

    /// Whether `value` is worth pinning for this column.
    ///
    /// Scalar kinds always are. Composite kinds are unless the value is a zero
    /// value per the column's [`DefaultPolicy`](crate::model::DefaultPolicy).
    /// Everything else is, except for driver-managed timestamp columns.
    pub fn is_needed(column: &Column, value: &str) -> bool {
        let kind = column.meta().scan_type.as_ref().map_or(ScanKind::Other, |st| st.kind);
        let policy = column.default_policy();
        match kind {
            k if k.is_scalar() => true,
            ScanKind::Struct => !policy.is_zero_value(value),
            _ => !policy.is_managed(column.name()),
        }
    }

    /// Default tag value to emit, if any.
    pub fn resolve(column: &Column) -> Option<String> {
        Self::value(column.meta()).filter(|value| Self::is_needed(column, value))
    }
}
