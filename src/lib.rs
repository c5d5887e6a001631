// ============================================================================
// collection-emitter - Event Emitters with Collection Methods
// ============================================================================
//
// A `CollectionEventEmitter` is an event emitter that also carries named
// sequences and exposes underscore-style collection methods over one of them.
// ============================================================================

pub mod collections;
pub mod core;
pub mod emitter;
pub mod utils;

// Re-export core items at crate root for ergonomic access
pub use crate::core::config::{
    CollectionOptions, DEFAULT_FIELD_NAME, default_name, reset_default_name, set_default_name,
};
pub use crate::core::error::EmitError;

pub use emitter::{
    AnyListener, DEFAULT_DELIMITER, DEFAULT_MAX_LISTENERS, ERROR_EVENT, EmitterOptions,
    EventEmitter, Listener, ListenerId, NewListenerHook,
};

pub use collections::{Attributes, CollectionEventEmitter, Fields, MissingLast};

// =============================================================================
// TESTS
// =============================================================================
