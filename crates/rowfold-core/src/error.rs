use crate::extract::ExtractorKind;
use derive_more::Display;
use thiserror::Error as ThisError;

///
/// ErrorClass
///
/// Stable classification of extraction failures.
/// Every class aborts the current driver call; none are retried.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    /// The extraction tree and the result set disagree about nullability.
    #[display("invariant_violation")]
    InvariantViolation,

    /// A configured hard limit was exceeded.
    #[display("unsupported")]
    Unsupported,

    /// The row source itself failed.
    #[display("source")]
    Source,
}

///
/// ExtractError
///
/// Structured extraction error. Returned from drivers as a whole; no partial
/// results survive an error.
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum ExtractError {
    #[error("null value extracted without an optional wrapper ({kind})")]
    NullWithoutOptional { kind: ExtractorKind },

    #[error("group key extracted as null; group keys must be non-null")]
    NullGroupKey,

    #[error("grouped extraction exceeded the hard limit of {limit} groups")]
    GroupLimitExceeded { limit: usize },

    #[error("row source failed: {message}")]
    Source { message: String },
}

impl ExtractError {
    /// Construct the null-without-optional error for one extractor kind.
    #[must_use]
    pub const fn null_without_optional(kind: ExtractorKind) -> Self {
        Self::NullWithoutOptional { kind }
    }

    /// Construct a row-source failure from any displayable source error.
    pub fn source(err: impl std::fmt::Display) -> Self {
        Self::Source {
            message: err.to_string(),
        }
    }

    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::NullWithoutOptional { .. } | Self::NullGroupKey => ErrorClass::InvariantViolation,
            Self::GroupLimitExceeded { .. } => ErrorClass::Unsupported,
            Self::Source { .. } => ErrorClass::Source,
        }
    }

    /// Return true if this error signals an undeclared null.
    #[must_use]
    pub const fn is_null_without_optional(&self) -> bool {
        matches!(self, Self::NullWithoutOptional { .. })
    }

    #[must_use]
    pub fn display_with_class(&self) -> String {
        format!("{}: {self}", self.class())
    }
}

/// Fatally unwrap one emitted value.
///
/// Absence at a point that requires a definite value is a declaration error in
/// the extraction tree, never an expected condition.
pub fn require<T>(value: Option<T>, kind: ExtractorKind) -> Result<T, ExtractError> {
    value.ok_or(ExtractError::null_without_optional(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_without_optional_message_names_the_wrapper() {
        let err = ExtractError::null_without_optional(ExtractorKind::Cell);

        assert!(
            err.to_string()
                .starts_with("null value extracted without an optional wrapper")
        );
        assert_eq!(err.class(), ErrorClass::InvariantViolation);
        assert!(err.is_null_without_optional());
    }

    #[test]
    fn display_with_class_prefixes_class() {
        let err = ExtractError::GroupLimitExceeded { limit: 3 };

        assert_eq!(
            err.display_with_class(),
            "unsupported: grouped extraction exceeded the hard limit of 3 groups"
        );
    }

    #[test]
    fn require_passes_present_values_through() {
        assert_eq!(require(Some(7), ExtractorKind::Cell), Ok(7));
        assert_eq!(
            require::<i64>(None, ExtractorKind::Seq),
            Err(ExtractError::NullWithoutOptional {
                kind: ExtractorKind::Seq
            })
        );
    }
}
