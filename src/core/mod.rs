// ============================================================================
// collection-emitter - Core
// Configuration and error types shared by the emitter and collections
// ============================================================================

pub mod config;
pub mod error;
