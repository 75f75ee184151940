pub mod data_type_resolver;
pub use data_type_resolver::*;

pub mod data_type_table;
pub use data_type_table::*;

pub mod column_type_normalizer;
pub use column_type_normalizer::*;

pub mod comment_binding;
pub use comment_binding::*;

pub mod default_tag;
pub use default_tag::*;

pub mod type_resolver;
pub use type_resolver::*;

pub mod promotion;
pub use promotion::*;

pub mod tag_builder;
pub use tag_builder::*;

pub mod field_assembler;
pub use field_assembler::*;

mod _tests;
