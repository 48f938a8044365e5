use thiserror::Error;

/// Reasons a host `SendEvent` argument list cannot be decoded into a control event.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("missing argument at position {position}")]
    MissingArgument { position: usize },
    #[error("argument at position {position} must be a string")]
    NotAString { position: usize },
    #[error("control id must not be empty")]
    EmptyControlId,
    #[error("unknown event kind '{0}'")]
    UnknownKind(String),
    #[error("invalid ordinal '{0}': expected a positive integer")]
    InvalidOrdinal(String),
    #[error("unexpected trailing arguments for {kind} event: expected {expected}, got {actual}")]
    TrailingArguments {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },
}
