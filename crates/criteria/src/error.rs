use thiserror::Error;

/// Invalid API usage, reported at criteria construction time. Construction
/// never silently coerces a bad argument.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CriteriaError {
    #[error("column name must not be empty")]
    EmptyColumn,

    #[error("{0} must not be null")]
    NullOperand(&'static str),

    #[error("values must not contain a null element")]
    NullElement,

    #[error("you can only pass in one argument of type {0}")]
    SingleCollectionArgument(&'static str),
}
