//! Error types for bridge operations.

use derive_more::Display;

pub type BridgeResult<T> = Result<T, BridgeError>;

/// Contract violations detected by the bridge.
///
/// Both variants indicate a bug in the caller, not a recoverable runtime
/// condition; the bridge never retries, and callers should fail loudly.
#[derive(Display, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    /// The handle was not produced by a suspension this model recognizes,
    /// so it cannot be narrowed to a frame.
    #[display("incompatible continuation: {_0} cannot be narrowed to a suspended frame")]
    IncompatibleContinuation(String),

    /// The frame's entry point was already invoked once.
    #[display("reentrant resumption: frame has already been resumed")]
    ReentrantResumption,
}

impl std::error::Error for BridgeError {}
