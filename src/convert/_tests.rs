#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::model::{Column, ColumnBuilder, ColumnMeta, TableIndex};

    pub fn users_columns() -> Value {
        json!([
            { "table_name": "users", "name": "id", "database_type_name": "BIGINT", "column_type": "bigint unsigned",
              "nullable": false, "primary_key": true, "auto_increment": true,
              "scan_type": { "name": "uint64", "kind": "int" } },
            { "table_name": "users", "name": "email", "database_type_name": "VARCHAR", "column_type": "varchar(255)",
              "nullable": false, "primary_key": false, "comment": "user email [[required,email]]",
              "scan_type": { "name": "string", "kind": "string" } },
            { "table_name": "users", "name": "nickname", "database_type_name": "VARCHAR", "column_type": "varchar(64)",
              "nullable": true, "primary_key": false, "default_value": "",
              "scan_type": { "name": "string", "kind": "string" } },
            { "table_name": "users", "name": "age", "database_type_name": "INT", "column_type": "int(10) unsigned",
              "nullable": true, "primary_key": false, "default_value": "0",
              "scan_type": { "name": "sql.NullInt64", "kind": "struct" } },
            { "table_name": "users", "name": "avatar", "database_type_name": "VARBINARY", "column_type": "varbinary(20) binary",
              "nullable": true, "primary_key": false,
              "scan_type": { "name": "sql.RawBytes", "kind": "other" } },
            { "table_name": "users", "name": "created_at", "database_type_name": "DATETIME", "column_type": "datetime(3)",
              "nullable": true, "primary_key": false, "default_value": "CURRENT_TIMESTAMP(3)",
              "scan_type": { "name": "sql.NullTime", "kind": "other" } },
            { "table_name": "users", "name": "deleted_at", "database_type_name": "DATETIME", "column_type": "datetime(3)",
              "nullable": true, "primary_key": false, "default_value": "NULL",
              "scan_type": { "name": "sql.NullTime", "kind": "other" } }
        ])
    }

    pub fn users_indexes() -> Vec<TableIndex> {
        serde_json::from_value(json!([
            { "name": "PRIMARY", "columns": ["id"], "primary_key": true, "unique": true },
            { "name": "idx_email", "columns": ["email"], "unique": true },
            { "name": "idx_age_nick", "columns": ["age", "nickname"] },
            { "name": "idx_nick", "columns": ["nickname"] }
        ])).unwrap()
    }

    /// Builders for every `users` column with its indexes attached.
    pub fn users_builders() -> Vec<ColumnBuilder> {
        let metas: Vec<ColumnMeta> = serde_json::from_value(users_columns()).unwrap();
        let mut by_column = TableIndex::group_by_column(&users_indexes());
        metas
            .into_iter()
            .map(|meta| {
                let indexes = by_column.shift_remove(&meta.name).unwrap_or_default();
                ColumnBuilder::from_meta(meta).indexes(indexes)
            })
            .collect()
    }

    pub fn users_column(name: &str) -> Column {
        users_builders()
            .into_iter()
            .map(|b| b.build().unwrap())
            .find(|c| c.name() == name)
            .unwrap()
    }
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, thread};

    use super::fixtures::*;
    use crate::convert::{ColumnTypeNormalizer, CommentBinding, FieldAssembler, SOFT_DELETE_TYPE};
    use crate::model::*;

    fn all_on() -> FieldOptions {
        FieldOptions::from(true, true, true)
    }

    #[test]
    fn users_table_fields() {
        let fields: Vec<Field> = users_builders()
            .into_iter()
            .map(|b| b.build().unwrap().to_field(&FieldOptions::new().nullable(true).signable(true)))
            .collect();

        let summary: Vec<(&str, &str)> = fields.iter().map(|f| (f.name.as_str(), f.ty.as_str())).collect();
        assert_eq!(summary, vec![
            ("id", "uint64"),
            ("email", "string"),
            ("nickname", "*string"),
            ("age", "*uint32"),
            ("avatar", "*[]byte"),
            ("created_at", "*time.Time"),
            ("deleted_at", "gorm.DeletedAt"),
        ]);

        assert_eq!(fields[0].tags(), r#"gorm:"column:id;type:bigint unsigned;primaryKey;autoIncrement:true" json:"id""#);
        assert_eq!(
            fields[1].tags(),
            r#"gorm:"column:email;type:varchar(255);not null;uniqueIndex:idx_email,priority:1;comment:user email " json:"email" binding:"required,email""#
        );
        assert_eq!(
            fields[2].gorm_tag.to_string(),
            "column:nickname;type:varchar(64);index:idx_age_nick,priority:2;index:idx_nick,priority:1;default:''"
        );
        assert_eq!(fields[4].gorm_tag.first(TAG_KEY_GORM_TYPE), Some("varbinary(20)"));
        assert!(!fields[5].gorm_tag.contains(TAG_KEY_GORM_DEFAULT));
        assert_eq!(fields[6].gorm_tag.first(TAG_KEY_GORM_DEFAULT), Some("NULL"));
    }

    #[test]
    fn override_output_is_used_verbatim() {
        for name in ["id", "email", "age", "deleted_at"] {
            let col = users_builders()
                .into_iter()
                .find_map(|b| {
                    let col = b
                        .use_scan_type(true)
                        .data_type("BIGINT", |_: &ColumnMeta| "Snowflake".to_string())
                        .data_type("VARCHAR", |_: &ColumnMeta| "Text".to_string())
                        .data_type("INT", |_: &ColumnMeta| "Int".to_string())
                        .data_type("DATETIME", |_: &ColumnMeta| "Stamp".to_string())
                        .build()
                        .unwrap();
                    (col.name() == name).then_some(col)
                })
                .unwrap();
            let expected = match name {
                "id" => "Snowflake",
                "email" => "Text",
                "age" => "Int",
                _ => "Stamp",
            };
            assert_eq!(col.data_type(), expected);
            assert_eq!(col.to_field(&FieldOptions::new()).ty, expected);
        }
    }

    #[test]
    fn deleted_at_is_always_soft_delete() {
        let col = users_column("deleted_at");
        for opts in [FieldOptions::new(), FieldOptions::new().nullable(true), all_on()] {
            assert_eq!(FieldAssembler::to_field(&col, &opts).ty, SOFT_DELETE_TYPE);
        }

        let col = Column::builder("t", "deleted_at", "timestamp")
            .scan_type(ScanType::new("time.Time", ScanKind::Int))
            .default_value("0")
            .nullable(true)
            .build()
            .unwrap();
        assert_eq!(FieldAssembler::to_field(&col, &all_on()).ty, SOFT_DELETE_TYPE);
    }

    #[test]
    fn nullable_without_default_is_pointer() {
        let col = Column::builder("t", "title", "varchar").nullable(true).build().unwrap();
        let field = FieldAssembler::to_field(&col, &FieldOptions::new().nullable(true));
        assert_eq!(field.ty, "*string");
    }

    #[test]
    fn eligible_default_is_pointer_with_default_tag() {
        let col = Column::builder("t", "score", "int")
            .scan_type(ScanType::new("int32", ScanKind::Int))
            .default_value("0")
            .nullable(false)
            .build()
            .unwrap();
        let field = FieldAssembler::to_field(&col, &FieldOptions::new().coverable(true));
        assert_eq!(field.ty, "*int32");
        assert_eq!(field.gorm_tag.first(TAG_KEY_GORM_DEFAULT), Some("0"));
    }

    #[test]
    fn nullable_defaulted_column_is_single_pointer() {
        let field = FieldAssembler::to_field(&users_column("nickname"), &all_on());
        assert_eq!(field.ty, "*string");
    }

    #[test]
    fn created_at_default_is_dropped() {
        let field = FieldAssembler::to_field(&users_column("created_at"), &FieldOptions::new().coverable(true));
        assert!(!field.gorm_tag.contains(TAG_KEY_GORM_DEFAULT));
        assert_eq!(field.ty, "time.Time");
    }

    #[test]
    fn binding_directive_routes_to_binding_tag() {
        let (comment, binding) = CommentBinding::extract("user email [[required]]");
        assert_eq!((comment.as_str(), binding.as_str()), ("user email ", "required"));

        let col = Column::builder("t", "email", "varchar").comment("user email [[required]]").build().unwrap();
        let field = FieldAssembler::to_field(&col, &FieldOptions::new());
        assert_eq!(field.column_comment, "user email ");
        assert_eq!(field.tag.get(TAG_KEY_BINDING), Some("required"));
        assert_eq!(field.gorm_tag.first(TAG_KEY_GORM_COMMENT), Some("user email "));
    }

    #[test]
    fn varbinary_quirk() {
        let meta = ColumnMeta { column_type: Some("varbinary(20) binary".into()), ..ColumnMeta::new("t", "c", "varbinary") };
        assert_eq!(ColumnTypeNormalizer::normalize(&meta), "varbinary(20)");
    }

    #[test]
    fn unique_and_plain_index_coexist() {
        let col = Column::builder("t", "code", "varchar")
            .index(Index::unique("idx_a", 1))
            .index(Index::new("idx_b", 2))
            .build()
            .unwrap();
        let tag = FieldAssembler::to_field(&col, &FieldOptions::new()).gorm_tag;
        assert_eq!(tag.first(TAG_KEY_GORM_UNIQUE_INDEX), Some("idx_a,priority:1"));
        assert_eq!(tag.first(TAG_KEY_GORM_INDEX), Some("idx_b,priority:2"));
    }

    #[test]
    fn to_field_is_idempotent() {
        for b in users_builders() {
            let col = b.build().unwrap();
            assert_eq!(col.to_field(&all_on()), col.to_field(&all_on()));
        }
    }

    #[test]
    fn columns_are_shareable_across_threads() {
        let col = Arc::new(users_column("email"));
        let expected = col.to_field(&all_on());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let col = Arc::clone(&col);
                thread::spawn(move || col.to_field(&all_on()))
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    }
}
