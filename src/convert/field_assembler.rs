use crate::{
    convert::{ColumnTypeNormalizer, CommentBinding, DefaultTag, Promotion, TagBuilder, TypeResolver},
    model::{Column, Field, FieldOptions, Tag, TAG_KEY_BINDING, TAG_KEY_JSON},
};

/// Builds the field descriptor of a column.
pub struct FieldAssembler;

impl FieldAssembler {
    pub fn to_field(column: &Column, opts: &FieldOptions) -> Field {
        let mut ty = TypeResolver::resolve(column);
        if opts.signable
            && ColumnTypeNormalizer::normalize(column.meta()).contains("unsigned")
            && ty.starts_with("int")
        {
            ty = format!("u{ty}");
        }

        let has_default = DefaultTag::resolve(column).is_some();
        let promotion = Promotion::decide(column, &ty, opts, has_default);
        tracing::trace!(table = column.table_name(), column = column.name(), ?promotion, "field type promotion");
        let ty = promotion.apply(ty);

        let (comment, binding) = CommentBinding::extract(column.comment().unwrap_or_default());

        let mut tag = Tag::new();
        tag.set(TAG_KEY_JSON, &column.json_tag_key());
        if !binding.is_empty() {
            tag.set(TAG_KEY_BINDING, &binding);
        }

        Field {
            name: column.name().to_string(),
            ty,
            column_name: column.name().to_string(),
            multiline_comment: column.multiline_comment(),
            gorm_tag: TagBuilder::build(column),
            tag,
            column_comment: comment,
        }
    }
}
