// ============================================================================
// collection-emitter - Emitter Options
// ============================================================================

use serde::{Deserialize, Serialize};

/// Listener count above which a leak warning is logged.
pub const DEFAULT_MAX_LISTENERS: usize = 10;

/// Default delimiter between namespaced event segments.
pub const DEFAULT_DELIMITER: &str = ".";

/// Configuration for an [`EventEmitter`](super::EventEmitter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterOptions {
    /// Enable namespaced events with `*` and `**` wildcards.
    pub wildcard: bool,

    /// Separator between namespace segments when `wildcard` is on.
    pub delimiter: String,

    /// Listeners per event before a leak warning is logged. `0` disables the check.
    pub max_listeners: usize,

    /// Notify `on_new_listener` hooks whenever a listener is added.
    pub new_listener: bool,

    /// Include the event name and listener count in leak warnings.
    pub verbose_memory_leak: bool,
}

impl Default for EmitterOptions {
    fn default() -> Self {
        Self {
            wildcard: false,
            delimiter: DEFAULT_DELIMITER.to_string(),
            max_listeners: DEFAULT_MAX_LISTENERS,
            new_listener: false,
            verbose_memory_leak: false,
        }
    }
}

impl EmitterOptions {
    pub fn wildcard(mut self, wildcard: bool) -> Self {
        self.wildcard = wildcard;
        self
    }

    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn max_listeners(mut self, max_listeners: usize) -> Self {
        self.max_listeners = max_listeners;
        self
    }

    pub fn new_listener(mut self, new_listener: bool) -> Self {
        self.new_listener = new_listener;
        self
    }

    pub fn verbose_memory_leak(mut self, verbose: bool) -> Self {
        self.verbose_memory_leak = verbose;
        self
    }
}
