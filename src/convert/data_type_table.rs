use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Type used when a driver type name is not in the table.
pub const DEFAULT_DATA_TYPE: &str = "string";

type DataTypeMapping = fn(column_type: &str) -> &'static str;

static DATA_TYPES: Lazy<HashMap<&'static str, DataTypeMapping>> = Lazy::new(|| {
    let mut m: HashMap<&'static str, DataTypeMapping> = HashMap::new();

    // integers
    m.insert("numeric", |_| "int32");
    m.insert("integer", |_| "int32");
    m.insert("int", |_| "int32");
    m.insert("int4", |_| "int32");
    m.insert("serial", |_| "int32");
    m.insert("mediumint", |_| "int32");
    m.insert("smallint", |_| "int16");
    m.insert("int2", |_| "int16");
    m.insert("smallserial", |_| "int16");
    m.insert("bigint", |_| "int64");
    m.insert("int8", |_| "int64");
    m.insert("bigserial", |_| "int64");
    m.insert("year", |_| "int32");
    m.insert("tinyint", |column_type| {
        if column_type.trim().starts_with("tinyint(1)") { "bool" } else { "int32" }
    });

    // floats
    m.insert("float", |_| "float32");
    m.insert("float4", |_| "float32");
    m.insert("real", |_| "float64");
    m.insert("double", |_| "float64");
    m.insert("double precision", |_| "float64");
    m.insert("float8", |_| "float64");
    m.insert("decimal", |_| "float64");

    // strings
    m.insert("char", |_| "string");
    m.insert("character", |_| "string");
    m.insert("varchar", |_| "string");
    m.insert("character varying", |_| "string");
    m.insert("tinytext", |_| "string");
    m.insert("mediumtext", |_| "string");
    m.insert("longtext", |_| "string");
    m.insert("text", |_| "string");
    m.insert("json", |_| "string");
    m.insert("jsonb", |_| "string");
    m.insert("enum", |_| "string");
    m.insert("uuid", |_| "string");

    // binary
    m.insert("binary", |_| "[]byte");
    m.insert("varbinary", |_| "[]byte");
    m.insert("tinyblob", |_| "[]byte");
    m.insert("blob", |_| "[]byte");
    m.insert("mediumblob", |_| "[]byte");
    m.insert("longblob", |_| "[]byte");
    m.insert("bytea", |_| "[]byte");
    m.insert("bit", |_| "[]uint8");

    // time
    m.insert("time", |_| "time.Time");
    m.insert("date", |_| "time.Time");
    m.insert("datetime", |_| "time.Time");
    m.insert("timestamp", |_| "time.Time");
    m.insert("timestamptz", |_| "time.Time");

    m.insert("boolean", |_| "bool");
    m.insert("bool", |_| "bool");

    m
});

/// Built-in mapping from driver type names to target scalar types.
pub struct DataTypeTable;

impl DataTypeTable {
    /// Table entry for `database_type_name` (case-insensitive), if any.
    pub fn lookup(database_type_name: &str, column_type: &str) -> Option<&'static str> {
        DATA_TYPES
            .get(database_type_name.to_ascii_lowercase().as_str())
            .map(|mapping| mapping(column_type))
    }

    /// Like [`DataTypeTable::lookup`], falling back to [`DEFAULT_DATA_TYPE`].
    pub fn get(database_type_name: &str, column_type: &str) -> String {
        match Self::lookup(database_type_name, column_type) {
            Some(ty) => ty.to_string(),
            None => {
                tracing::debug!(database_type_name, column_type, "unmapped database type, using {}", DEFAULT_DATA_TYPE);
                DEFAULT_DATA_TYPE.to_string()
            }
        }
    }
}
