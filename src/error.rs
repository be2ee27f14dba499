//! Unified error type.

/// The error type returned by pathwise's fallible operations.
///
/// An unmatched request is not an error: it becomes a `404` [`Response`](crate::Response).
/// This type covers configuration mistakes (a malformed route template, an
/// unparsable listen address) and transport failures while serving.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid route template `{template}`: {reason}")]
    InvalidTemplate {
        template: String,
        reason: TemplateError,
    },

    #[error("invalid socket address `{0}`")]
    InvalidAddress(String),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

/// Why a route template was rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, thiserror::Error)]
pub enum TemplateError {
    #[error("unterminated `{{` in segment")]
    Unterminated,

    #[error("unmatched `}}` in segment")]
    UnmatchedClose,

    #[error("placeholder name is empty")]
    EmptyName,

    /// `/file{id}` or `/{id}.json`: placeholders must be the whole segment.
    #[error("placeholder must span a whole path segment")]
    PartialSegment,
}

impl Error {
    pub(crate) fn template(template: &str, reason: TemplateError) -> Self {
        Self::InvalidTemplate { template: template.to_owned(), reason }
    }
}
