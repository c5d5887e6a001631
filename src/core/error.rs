// ============================================================================
// collection-emitter - Errors
// ============================================================================

use thiserror::Error;

/// Error returned by [`EventEmitter::emit`](crate::EventEmitter::emit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// An `"error"` event was emitted with nobody listening for it.
    #[error("uncaught, unspecified 'error' event")]
    Unhandled,
}
