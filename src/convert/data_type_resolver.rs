use std::{collections::HashMap, sync::Arc};

use crate::model::ColumnMeta;

/// Caller-supplied type mapping for one driver type name.
///
/// The result is used verbatim, bypassing the scan type and the built-in table.
pub trait DataTypeResolver: Send + Sync {
    fn resolve(&self, column: &ColumnMeta) -> String;
}

impl<F> DataTypeResolver for F
where
    F: Fn(&ColumnMeta) -> String + Send + Sync,
{
    fn resolve(&self, column: &ColumnMeta) -> String {
        self(column)
    }
}

/// Overrides keyed by the exact driver type name.
pub type DataTypeMap = HashMap<String, Arc<dyn DataTypeResolver>>;
