use crate::model::{Column, FieldOptions};

pub const TIME_TYPE: &str = "time.Time";
pub const SOFT_DELETE_TYPE: &str = "gorm.DeletedAt";
pub const SOFT_DELETE_COLUMN: &str = "deleted_at";

/// How the base type of a field is widened. Exactly one applies per field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Promotion {
    /// `deleted_at` time column, replaced by the soft-delete type
    SoftDelete,
    /// Column with a pinned default, made a pointer
    DefaultPromoted,
    /// Nullable column, made a pointer
    NullablePromoted,
    Plain,
}

impl Promotion {
    /// `has_default` is whether the column gets a `default` tag.
    pub fn decide(column: &Column, ty: &str, opts: &FieldOptions, has_default: bool) -> Self {
        if column.name() == SOFT_DELETE_COLUMN && ty == TIME_TYPE {
            Promotion::SoftDelete
        } else if opts.coverable && has_default {
            Promotion::DefaultPromoted
        } else if opts.nullable && !ty.starts_with('*') && column.meta().nullable == Some(true) {
            Promotion::NullablePromoted
        } else {
            Promotion::Plain
        }
    }

    pub fn apply(self, ty: String) -> String {
        match self {
            Promotion::SoftDelete => SOFT_DELETE_TYPE.to_string(),
            Promotion::DefaultPromoted | Promotion::NullablePromoted => format!("*{ty}"),
            Promotion::Plain => ty,
        }
    }
}
