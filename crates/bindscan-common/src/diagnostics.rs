//! Errors raised when the root handed to the walker is not a usable node.
//!
//! Only the root is validated. Anything malformed below the root is skipped
//! by the walker and never reaches this type.

use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub enum InvalidInputError {
    /// The root value is not object-shaped (a bare string, number, array, ...).
    NotAnObject { found: &'static str },
    /// The root object carries no string `type` discriminant.
    MissingKind,
    /// The root handle is `NodeIndex::NONE`.
    MissingNode,
    /// The root handle does not point into the arena it was paired with.
    DanglingIndex { index: u32, len: usize },
}

impl std::fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidInputError::NotAnObject { found } => {
                write!(f, "bindscan: node must be object, got {found}")
            }
            InvalidInputError::MissingKind => {
                write!(f, "bindscan: node must have a type")
            }
            InvalidInputError::MissingNode => {
                write!(f, "bindscan: node must be object, got no node")
            }
            InvalidInputError::DanglingIndex { index, len } => write!(
                f,
                "bindscan: node index {index} is out of bounds for an arena of {len} nodes"
            ),
        }
    }
}

impl std::error::Error for InvalidInputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_problem() {
        let err = InvalidInputError::NotAnObject { found: "string" };
        assert!(err.to_string().contains("node must be object"));
        assert!(err.to_string().ends_with("got string"));
        assert!(
            InvalidInputError::MissingKind
                .to_string()
                .contains("node must have a type")
        );
    }

    #[test]
    fn test_dangling_index_message() {
        let err = InvalidInputError::DanglingIndex { index: 9, len: 3 };
        assert_eq!(
            err.to_string(),
            "bindscan: node index 9 is out of bounds for an arena of 3 nodes"
        );
    }
}
