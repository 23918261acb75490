use thiserror::Error;

/// Failures while resolving a chained field.
///
/// These never reach the caller of a coordinator or form method: they are
/// logged and the request degrades to a no-op.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FocusError {
    /// The field was unmounted between chain construction and the callback.
    #[error("field `{0}` is no longer mounted")]
    MissingHandle(String),
    /// The predicate accepted the child but it carries no focus target.
    #[error("field `{0}` has no focus target")]
    CapabilityMismatch(String),
}

pub type Result<T> = std::result::Result<T, FocusError>;
