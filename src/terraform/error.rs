use thiserror::Error;

use super::ValueKind;

/// Errors raised while turning raw file content into a [`ConfigDocument`].
///
/// [`ConfigDocument`]: super::ConfigDocument
#[derive(Debug, Error)]
pub enum ParseError {
    /// The content is not valid HCL.
    #[error("invalid HCL syntax: {0}")]
    Syntax(#[from] hcl::Error),

    /// The file is not valid UTF-8.
    #[error("invalid UTF-8 content: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),

    /// A block body declares the same attribute twice.
    #[error("attribute '{attribute}' redefined in {block}")]
    AttributeRedefined { block: String, attribute: String },
}

/// Errors raised while resolving an attribute expression to a literal.
#[derive(Debug, Error)]
pub enum EvaluationError {
    /// The expression references something that does not exist in an empty
    /// evaluation context (variables, traversals, function calls).
    #[error("expression cannot be resolved: {0}")]
    Unresolvable(String),

    /// The expression evaluated, but not to the requested type.
    #[error("expected {expected} value, got {found}")]
    TypeMismatch {
        expected: ValueKind,
        found: &'static str,
    },
}

impl From<hcl::eval::Error> for EvaluationError {
    fn from(error: hcl::eval::Error) -> Self {
        EvaluationError::Unresolvable(error.to_string())
    }
}
