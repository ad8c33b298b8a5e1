/// Errors produced while parsing note definitions.
///
/// `entry` is the 1-based position of the offending entry among the
/// non-blank entries of the source.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NoteError {
    #[error("entry {entry}: missing '<end>' token")]
    MissingEndToken { entry: usize },

    #[error("entry {entry}: expected three numbers, found {found}")]
    FieldCount { entry: usize, found: usize },

    #[error("entry {entry}: invalid number '{field}'")]
    NumberFormat { entry: usize, field: String },
}

impl NoteError {
    /// Entry the error refers to
    pub fn entry(&self) -> usize {
        match self {
            NoteError::MissingEndToken { entry }
            | NoteError::FieldCount { entry, .. }
            | NoteError::NumberFormat { entry, .. } => *entry,
        }
    }
}

pub type Result<T> = std::result::Result<T, NoteError>;
