// ============================================================================
// collection-emitter - Configuration
// Process-wide default field name and construction options
// ============================================================================

use std::borrow::Cow;

use parking_lot::{RwLock, const_rwlock};
use serde::{Deserialize, Serialize};

use crate::emitter::EmitterOptions;

// =============================================================================
// DEFAULT FIELD NAME
// =============================================================================

/// Name of the backing field used when none is given at construction.
pub const DEFAULT_FIELD_NAME: &str = "models";

static DEFAULT_NAME: RwLock<Cow<'static, str>> = const_rwlock(Cow::Borrowed(DEFAULT_FIELD_NAME));

/// Current process-wide default field name.
pub fn default_name() -> String {
    DEFAULT_NAME.read().to_string()
}

/// Replace the process-wide default field name.
///
/// Only instances constructed afterwards pick up the new value; existing
/// instances keep the name they resolved at construction.
pub fn set_default_name(name: impl Into<String>) {
    let name = name.into();
    tracing::debug!(name = %name, "default field name changed");
    *DEFAULT_NAME.write() = Cow::Owned(name);
}

/// Restore the default field name to `"models"`.
pub fn reset_default_name() {
    *DEFAULT_NAME.write() = Cow::Borrowed(DEFAULT_FIELD_NAME);
}

/// Resolve a requested field name: empty or missing names use the default.
pub(crate) fn resolve_name(name: Option<&str>) -> String {
    match name {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => default_name(),
    }
}

// =============================================================================
// COLLECTION OPTIONS
// =============================================================================

/// Options for building a [`CollectionEventEmitter`](crate::CollectionEventEmitter).
///
/// ```
/// use collection_emitter::{CollectionOptions, EmitterOptions};
///
/// let options = CollectionOptions::default()
///     .name("items")
///     .emitter(EmitterOptions::default().wildcard(true));
/// assert_eq!(options.name.as_deref(), Some("items"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionOptions {
    /// Backing field name. `None` or empty resolves to [`default_name`].
    pub name: Option<String>,

    /// Options forwarded to the embedded emitter.
    pub emitter: EmitterOptions,
}

impl CollectionOptions {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn emitter(mut self, emitter: EmitterOptions) -> Self {
        self.emitter = emitter;
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================
