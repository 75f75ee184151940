pub mod scan_type;
pub use scan_type::*;

pub mod column_meta;
pub use column_meta::*;

pub mod index;
pub use index::*;

pub mod column_error;
pub use column_error::*;

pub mod default_policy;
pub use default_policy::*;

pub mod column;
pub use column::*;

pub mod field_options;
pub use field_options::*;

pub mod gorm_tag;
pub use gorm_tag::*;

pub mod tag;
pub use tag::*;

pub mod field;
pub use field::*;
