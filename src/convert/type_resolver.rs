use crate::{convert::{ColumnTypeNormalizer, DataTypeTable}, model::Column};

/// Resolves the base target type of a column.
pub struct TypeResolver;

impl TypeResolver {
    /// First match wins: caller override for the driver type name, then the
    /// native scan type when the column prefers it, then the built-in table.
    pub fn resolve(column: &Column) -> String {
        let meta = column.meta();

        if let Some(resolver) = column.data_type_override() {
            let ty = resolver.resolve(meta);
            tracing::debug!(column = column.name(), database_type_name = %meta.database_type_name, ty = %ty, "data type override applied");
            return ty;
        }

        if column.use_scan_type() {
            if let Some(scan_type) = &meta.scan_type {
                return scan_type.name.clone();
            }
        }

        DataTypeTable::get(&meta.database_type_name, &ColumnTypeNormalizer::normalize(meta))
    }
}
