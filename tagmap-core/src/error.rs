use crate::Kind;
use thiserror::Error as ThisError;

/// Structural mismatch between a record and the kinds extraction supports.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ExtractError {
    #[error("Cannot extract tag values from a value of kind `{kind}`, a struct is expected")]
    NotAStruct { kind: Kind },

    #[error("Field `{field}` has kind `{kind}` which cannot be converted into a value")]
    UnsupportedKind { field: &'static str, kind: Kind },
}
