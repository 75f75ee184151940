use crate::model::ColumnMeta;

/// Cleans driver quirks out of raw column type strings.
pub struct ColumnTypeNormalizer;

impl ColumnTypeNormalizer {
    /// Column type as emitted in the `type` tag.
    ///
    /// Some drivers report `blob binary` and `varbinary(n) binary`; the
    /// trailing `binary` qualifier is dropped. Without a raw column type the
    /// driver type name is used.
    pub fn normalize(meta: &ColumnMeta) -> String {
        let Some(column_type) = meta.column_type.as_deref() else {
            return meta.database_type_name.clone();
        };

        let mut cl = match column_type.strip_suffix("blob binary") {
            Some(head) => format!("{head}blob"),
            None => column_type.to_string(),
        };

        if cl.contains("varbinary") && cl.contains(" binary") {
            cl = cl.replace(" binary", "");
        }

        cl
    }
}
