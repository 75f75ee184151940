use std::fmt::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnError {
    MissingName { table: String },
    MissingDatabaseType { table: String, column: String },
}

impl Display for ColumnError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColumnError::MissingName { table } => {
                write!(f, "ColumnError: column of table '{}' has no name", table)
            }
            ColumnError::MissingDatabaseType { table, column } => {
                write!(f, "ColumnError: column '{}.{}' has no database type name", table, column)
            }
        }
    }
}

impl std::error::Error for ColumnError {}
