pub type UttergenResult<T> = std::result::Result<T, UttergenError>;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    /// A `(` or `{` was never closed before the end of the template.
    #[error("Unexpected end of template (expected '{expected}')")]
    UnclosedGroup { expected: char },
    /// A `)` or `}` appeared outside of any group.
    #[error("Unexpected '{found}' with no matching opening bracket")]
    UnmatchedClose { found: char },
    #[error("Expected '{expected}', found '{found}'")]
    MismatchedClose { expected: char, found: char },
    /// An alternation such as `(|)` where every alternative is empty.
    #[error("Group '{group}' has no non-empty alternatives")]
    EmptyAlternation { group: String },
    /// A group kept verbatim, such as `(hello (there|friend))` or
    /// `{(a|b)}`, that contains a group which would expand.
    #[error("Group '{group}' is not an alternation or slot but contains one")]
    NestedGroupInWord { group: String },
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
#[error("Parse error at line {line}, column {column}: {kind}")]
pub struct ParseError {
    pub line: usize,
    pub column: usize,
    #[source]
    pub kind: ParseErrorKind,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq, Hash, thiserror::Error)]
pub enum UttergenError {
    /// `template` is the text being scanned when the error occurred, which for
    /// nested groups is a partially expanded branch of the original template.
    #[error("Malformed template '{template}': {error}")]
    MalformedTemplate {
        template: String,
        #[source]
        error: ParseError,
    },
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },
}

impl UttergenError {
    pub(crate) fn invalid_input<T: Into<String>>(reason: T) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}
