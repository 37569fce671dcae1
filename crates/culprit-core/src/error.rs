//! Error types for oracle construction and result verification.

use thiserror::Error;

/// Errors raised while constructing an [`Oracle`](crate::Oracle).
///
/// These describe an invalid trial configuration. A trial that fails
/// validation must not proceed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A declared hidden item does not occur in the universe.
    #[error("hidden item {item} is not in the universe")]
    HiddenItemNotInUniverse { item: String },

    /// The universe lists the same item twice.
    #[error("universe item {item} appears more than once")]
    DuplicateUniverseItem { item: String },
}

/// Errors raised when a candidate set is checked against the hidden set.
///
/// A correct strategy never produces one of these; seeing it means the
/// minimizer is broken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VerificationError {
    /// The candidate differs from the hidden set.
    #[error(
        "candidate does not match hidden set: missing [{}], unexpected [{}]",
        .missing.join(", "),
        .unexpected.join(", ")
    )]
    Mismatch {
        /// Hidden items absent from the candidate.
        missing: Vec<String>,
        /// Candidate items that are not hidden.
        unexpected: Vec<String>,
    },
}

impl ValidationError {
    pub(crate) fn hidden_not_in_universe(item: impl std::fmt::Debug) -> Self {
        Self::HiddenItemNotInUniverse {
            item: format!("{:?}", item),
        }
    }

    pub(crate) fn duplicate(item: impl std::fmt::Debug) -> Self {
        Self::DuplicateUniverseItem {
            item: format!("{:?}", item),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::hidden_not_in_universe("zz");
        assert_eq!(err.to_string(), "hidden item \"zz\" is not in the universe");

        let err = ValidationError::duplicate(3);
        assert_eq!(err.to_string(), "universe item 3 appears more than once");
    }

    #[test]
    fn test_verification_error_display() {
        let err = VerificationError::Mismatch {
            missing: vec!["\"a\"".to_string(), "\"b\"".to_string()],
            unexpected: vec![],
        };
        assert_eq!(
            err.to_string(),
            "candidate does not match hidden set: missing [\"a\", \"b\"], unexpected []"
        );
    }
}
