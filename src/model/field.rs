use serde::{Deserialize, Serialize};

use crate::model::{GormTag, Tag};

/// Descriptor of one generated struct member.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    /// Target type, possibly pointer-qualified (`*int32`)
    pub ty: String,
    pub column_name: String,
    pub multiline_comment: bool,
    pub gorm_tag: GormTag,
    pub tag: Tag,
    /// Column comment with any binding directive stripped
    pub column_comment: String,
}

impl Field {
    /// Full struct tag, `gorm:"..."` first followed by the generic tags.
    pub fn tags(&self) -> String {
        let mut out = String::new();
        if !self.gorm_tag.is_empty() {
            out.push_str(&format!("gorm:\"{}\"", self.gorm_tag));
        }
        if !self.tag.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&self.tag.to_string());
        }
        out
    }

    pub fn is_pointer(&self) -> bool {
        self.ty.starts_with('*')
    }
}
