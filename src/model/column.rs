use std::{collections::HashMap, fmt::Debug, sync::Arc};

use crate::{
    convert::{DataTypeMap, DataTypeResolver, FieldAssembler, TagBuilder, TypeResolver},
    model::{ColumnError, ColumnMeta, DefaultPolicy, Field, FieldOptions, GormTag, Index, ScanType},
};

/// Maps a column name to the key emitted in the `json` tag.
pub type TagKeyTransform = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// A fully configured column, ready for field derivation.
///
/// Built through [`ColumnBuilder`]; immutable afterwards, so it can be shared
/// across threads and derived from any number of times.
#[derive(Clone)]
pub struct Column {
    meta: ColumnMeta,
    indexes: Vec<Index>,
    use_scan_type: bool,
    data_type_map: DataTypeMap,
    json_tag_ns: TagKeyTransform,
    default_policy: DefaultPolicy,
}

impl Column {
    pub fn builder(table_name: &str, name: &str, database_type_name: &str) -> ColumnBuilder {
        ColumnBuilder::new(table_name, name, database_type_name)
    }

    pub fn meta(&self) -> &ColumnMeta {
        &self.meta
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn table_name(&self) -> &str {
        &self.meta.table_name
    }

    pub fn comment(&self) -> Option<&str> {
        self.meta.comment.as_deref()
    }

    pub fn indexes(&self) -> &[Index] {
        &self.indexes
    }

    pub fn use_scan_type(&self) -> bool {
        self.use_scan_type
    }

    pub fn default_policy(&self) -> &DefaultPolicy {
        &self.default_policy
    }

    /// Override registered for this column's driver type name, if any.
    pub fn data_type_override(&self) -> Option<&Arc<dyn DataTypeResolver>> {
        self.data_type_map.get(&self.meta.database_type_name)
    }

    /// Key emitted in the `json` tag for this column.
    pub fn json_tag_key(&self) -> String {
        (self.json_tag_ns)(&self.meta.name)
    }

    pub fn multiline_comment(&self) -> bool {
        self.comment().is_some_and(|c| c.contains('\n'))
    }

    pub fn data_type(&self) -> String {
        TypeResolver::resolve(self)
    }

    pub fn to_field(&self, opts: &FieldOptions) -> Field {
        FieldAssembler::to_field(self, opts)
    }

    pub fn gorm_tag(&self) -> GormTag {
        TagBuilder::build(self)
    }
}

impl Debug for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut overrides: Vec<_> = self.data_type_map.keys().collect();
        overrides.sort();
        f.debug_struct("Column")
            .field("meta", &self.meta)
            .field("indexes", &self.indexes)
            .field("use_scan_type", &self.use_scan_type)
            .field("data_type_overrides", &overrides)
            .field("default_policy", &self.default_policy)
            .finish()
    }
}

/// Collects column metadata and generation settings, then freezes them
/// into a [`Column`].
pub struct ColumnBuilder {
    meta: ColumnMeta,
    indexes: Vec<Index>,
    use_scan_type: bool,
    data_type_map: DataTypeMap,
    json_tag_ns: Option<TagKeyTransform>,
    default_policy: DefaultPolicy,
}

impl ColumnBuilder {
    pub fn new(table_name: &str, name: &str, database_type_name: &str) -> Self {
        Self::from_meta(ColumnMeta::new(table_name, name, database_type_name))
    }

    pub fn from_meta(meta: ColumnMeta) -> Self {
        Self {
            meta,
            indexes: Vec::new(),
            use_scan_type: false,
            data_type_map: HashMap::new(),
            json_tag_ns: None,
            default_policy: DefaultPolicy::default(),
        }
    }

    pub fn column_type(mut self, column_type: &str) -> Self {
        self.meta.column_type = Some(column_type.to_string());
        self
    }

    pub fn nullable(mut self, nullable: bool) -> Self {
        self.meta.nullable = Some(nullable);
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.meta.default_value = Some(value.to_string());
        self
    }

    pub fn comment(mut self, comment: &str) -> Self {
        self.meta.comment = Some(comment.to_string());
        self
    }

    pub fn primary_key(mut self, primary_key: bool) -> Self {
        self.meta.primary_key = Some(primary_key);
        self
    }

    pub fn auto_increment(mut self, auto_increment: bool) -> Self {
        self.meta.auto_increment = Some(auto_increment);
        self
    }

    pub fn scan_type(mut self, scan_type: ScanType) -> Self {
        self.meta.scan_type = Some(scan_type);
        self
    }

    pub fn index(mut self, index: Index) -> Self {
        self.indexes.push(index);
        self
    }

    pub fn indexes<I: IntoIterator<Item = Index>>(mut self, indexes: I) -> Self {
        self.indexes.extend(indexes);
        self
    }

    /// Prefer the driver's native scan type over the built-in type table.
    pub fn use_scan_type(mut self, use_scan_type: bool) -> Self {
        self.use_scan_type = use_scan_type;
        self
    }

    /// Replace the whole override map.
    pub fn data_type_map(mut self, data_type_map: DataTypeMap) -> Self {
        self.data_type_map = data_type_map;
        self
    }

    /// Register an override for one driver type name.
    pub fn data_type<R: DataTypeResolver + 'static>(mut self, database_type_name: &str, resolver: R) -> Self {
        self.data_type_map.insert(database_type_name.to_string(), Arc::new(resolver));
        self
    }

    /// Naming strategy for the `json` tag key. Identity when unset.
    pub fn json_tag_ns<F>(mut self, ns: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        self.json_tag_ns = Some(Arc::new(ns));
        self
    }

    pub fn default_policy(mut self, policy: DefaultPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    pub fn build(self) -> Result<Column, ColumnError> {
        if self.meta.name.is_empty() {
            return Err(ColumnError::MissingName { table: self.meta.table_name });
        }
        if self.meta.database_type_name.is_empty() {
            return Err(ColumnError::MissingDatabaseType {
                table: self.meta.table_name,
                column: self.meta.name,
            });
        }

        let json_tag_ns: TagKeyTransform = match self.json_tag_ns {
            Some(ns) => ns,
            None => Arc::new(|name: &str| name.to_string()),
        };

        Ok(Column {
            meta: self.meta,
            indexes: self.indexes,
            use_scan_type: self.use_scan_type,
            data_type_map: self.data_type_map,
            json_tag_ns,
            default_policy: self.default_policy,
        })
    }
}
