use thiserror::Error;

/// Errors raised while synthesizing table definitions.
#[derive(Debug, Error)]
pub enum SynthError {
    /// The descriptor variant has no synthesis rule yet. Datetime, url,
    /// and email exist in the type system but their storage constraints
    /// are an open product decision.
    #[error("component {component} has type {tag:?}, which has no storage synthesis rule yet")]
    UnsupportedDescriptor { component: String, tag: &'static str },
}

/// Result type for synthesis operations.
pub type Result<T> = std::result::Result<T, SynthError>;
