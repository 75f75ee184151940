//! Column metadata to GORM field descriptors.
//!
//! A [`Column`] is built from introspected metadata plus generation settings,
//! then turned into a [`Field`]: target type, `gorm` storage tags, `json` and
//! `binding` tags, and the cleaned column comment.

pub mod model;
pub use model::{
    Column, ColumnBuilder, ColumnError, ColumnMeta, DefaultPolicy, Field, FieldOptions, GormTag, Index,
    ScanKind, ScanType, TableIndex, Tag,
};

pub mod convert;
pub use convert::{DataTypeMap, DataTypeResolver, FieldAssembler, TagBuilder, TypeResolver};
