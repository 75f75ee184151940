use crate::{
    convert::{ColumnTypeNormalizer, CommentBinding, DefaultTag},
    model::{
        Column, GormTag, TAG_KEY_GORM_AUTO_INCREMENT, TAG_KEY_GORM_COLUMN, TAG_KEY_GORM_COMMENT,
        TAG_KEY_GORM_DEFAULT, TAG_KEY_GORM_INDEX, TAG_KEY_GORM_NOT_NULL, TAG_KEY_GORM_PRIMARY_KEY,
        TAG_KEY_GORM_TYPE, TAG_KEY_GORM_UNIQUE_INDEX,
    },
};

/// Builds the `gorm` storage-mapping tags of a column.
pub struct TagBuilder;

impl TagBuilder {
    pub fn build(column: &Column) -> GormTag {
        let meta = column.meta();
        let mut tag = GormTag::new();
        tag.set(TAG_KEY_GORM_COLUMN, column.name());
        tag.set(TAG_KEY_GORM_TYPE, &ColumnTypeNormalizer::normalize(meta));

        // a primary key is never tagged not null on its own
        if meta.primary_key == Some(true) {
            tag.set(TAG_KEY_GORM_PRIMARY_KEY, "");
            if let Some(auto_increment) = meta.auto_increment {
                tag.set(TAG_KEY_GORM_AUTO_INCREMENT, &auto_increment.to_string());
            }
        } else if meta.nullable == Some(false) {
            tag.set(TAG_KEY_GORM_NOT_NULL, "");
        }

        // primary key membership is already covered above
        for idx in column.indexes().iter().filter(|idx| !idx.primary_key) {
            let key = if idx.unique { TAG_KEY_GORM_UNIQUE_INDEX } else { TAG_KEY_GORM_INDEX };
            tag.append(key, &idx.tag_value());
        }

        if let Some(default) = DefaultTag::resolve(column) {
            tag.set(TAG_KEY_GORM_DEFAULT, &default);
        }

        if let Some(comment) = column.comment().filter(|c| !c.is_empty()) {
            let comment = if column.multiline_comment() {
                comment.replace('\n', "\\n")
            } else {
                comment.to_string()
            };
            let (comment, _) = CommentBinding::extract(&comment);
            tag.set(TAG_KEY_GORM_COMMENT, &comment);
        }

        tag
    }
}
