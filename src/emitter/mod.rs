// ============================================================================
// collection-emitter - Event Emitter
// Synchronous named-event dispatch with namespaces and wildcards
// ============================================================================
//
// Listeners are stored as `Rc<dyn Fn(&P)>` in registration order.
// Emission snapshots the matching listeners before calling any of them:
// - A listener removed during emission is still called in that round.
// - A listener added during emission is not called until the next emit.
//
// Panics inside a listener propagate to the caller of `emit`.
// ============================================================================

mod options;
mod pattern;

pub use options::{DEFAULT_DELIMITER, DEFAULT_MAX_LISTENERS, EmitterOptions};
pub use pattern::matches;

use std::cell::{Cell, RefCell};
use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::core::error::EmitError;

/// Event name that fails the emit when nobody listens for it.
pub const ERROR_EVENT: &str = "error";

/// Handle returned on registration, used to remove the listener again.
pub type ListenerId = u64;

/// Callback for a named event.
pub type Listener<P> = Rc<dyn Fn(&P)>;

/// Callback receiving every event along with its name.
pub type AnyListener<P> = Rc<dyn Fn(&str, &P)>;

/// Hook called with the event name whenever a listener is added.
pub type NewListenerHook = Rc<dyn Fn(&str)>;

struct Registration<P> {
    id: ListenerId,
    event: String,
    callback: Listener<P>,
    /// Calls left before auto-removal; `None` for permanent listeners.
    remaining: Option<usize>,
}

// =============================================================================
// EVENT EMITTER
// =============================================================================

/// Typed synchronous event emitter.
///
/// `P` is the event payload type. All methods take `&self`, so listeners can
/// call `on()`/`off()` while an emit is in progress.
///
/// # Example
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use collection_emitter::EventEmitter;
///
/// let emitter: EventEmitter<u32> = EventEmitter::new();
/// let seen = Rc::new(Cell::new(0));
///
/// let seen_clone = seen.clone();
/// emitter.on("added", move |id| seen_clone.set(*id));
///
/// assert_eq!(emitter.emit("added", &7), Ok(true));
/// assert_eq!(seen.get(), 7);
/// ```
pub struct EventEmitter<P> {
    wildcard: bool,
    delimiter: String,
    new_listener: bool,
    verbose_memory_leak: bool,
    max_listeners: Cell<usize>,

    listeners: RefCell<Vec<Registration<P>>>,
    any_listeners: RefCell<Vec<(ListenerId, AnyListener<P>)>>,
    new_listener_hooks: RefCell<Vec<(ListenerId, NewListenerHook)>>,

    /// Events that already triggered a leak warning
    warned: RefCell<HashSet<String>>,
    next_id: Cell<ListenerId>,
}

impl<P> EventEmitter<P> {
    /// Create an emitter with default options.
    pub fn new() -> Self {
        Self::with_options(EmitterOptions::default())
    }

    /// Create an emitter with the given options.
    pub fn with_options(options: EmitterOptions) -> Self {
        Self {
            wildcard: options.wildcard,
            delimiter: options.delimiter,
            new_listener: options.new_listener,
            verbose_memory_leak: options.verbose_memory_leak,
            max_listeners: Cell::new(options.max_listeners),
            listeners: RefCell::new(Vec::new()),
            any_listeners: RefCell::new(Vec::new()),
            new_listener_hooks: RefCell::new(Vec::new()),
            warned: RefCell::new(HashSet::new()),
            next_id: Cell::new(1),
        }
    }

    pub fn is_wildcard(&self) -> bool {
        self.wildcard
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    fn next_id(&self) -> ListenerId {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn matches(&self, registered: &str, emitted: &str) -> bool {
        pattern::matches(registered, emitted, self.wildcard, &self.delimiter)
    }

    // =========================================================================
    // REGISTRATION
    // =========================================================================

    /// Register `callback` for `event` and return its [`ListenerId`].
    pub fn on(&self, event: &str, callback: impl Fn(&P) + 'static) -> ListenerId {
        self.register(event, Rc::new(callback), None, false)
    }

    /// Alias for [`on`](Self::on).
    pub fn add_listener(&self, event: &str, callback: impl Fn(&P) + 'static) -> ListenerId {
        self.on(event, callback)
    }

    /// Register `callback` ahead of the listeners already present.
    pub fn prepend_listener(&self, event: &str, callback: impl Fn(&P) + 'static) -> ListenerId {
        self.register(event, Rc::new(callback), None, true)
    }

    /// Register `callback` for a single call.
    pub fn once(&self, event: &str, callback: impl Fn(&P) + 'static) -> ListenerId {
        self.many(event, 1, callback)
    }

    /// Register `callback` for at most `times` calls.
    ///
    /// With `times == 0` nothing is registered; the returned id is unused.
    pub fn many(&self, event: &str, times: usize, callback: impl Fn(&P) + 'static) -> ListenerId {
        if times == 0 {
            return self.next_id();
        }
        self.register(event, Rc::new(callback), Some(times), false)
    }

    fn register(
        &self,
        event: &str,
        callback: Listener<P>,
        remaining: Option<usize>,
        prepend: bool,
    ) -> ListenerId {
        if self.new_listener {
            let hooks: Vec<NewListenerHook> = self
                .new_listener_hooks
                .borrow()
                .iter()
                .map(|(_, hook)| hook.clone())
                .collect();
            for hook in hooks {
                hook(event);
            }
        }

        let id = self.next_id();
        let registration = Registration {
            id,
            event: event.to_string(),
            callback,
            remaining,
        };
        {
            let mut listeners = self.listeners.borrow_mut();
            if prepend {
                listeners.insert(0, registration);
            } else {
                listeners.push(registration);
            }
        }
        tracing::trace!(event, id, "listener added");

        self.check_leak(event);
        id
    }

    /// Warn once per event name when its listeners exceed the configured maximum.
    fn check_leak(&self, event: &str) {
        let max = self.max_listeners.get();
        if max == 0 {
            return;
        }

        let count = self
            .listeners
            .borrow()
            .iter()
            .filter(|reg| reg.event == event)
            .count();
        if count <= max || !self.warned.borrow_mut().insert(event.to_string()) {
            return;
        }

        if self.verbose_memory_leak {
            tracing::warn!(
                event,
                count,
                max,
                "possible event emitter leak: {count} listeners added for '{event}'; \
                 use set_max_listeners() to increase the limit"
            );
        } else {
            tracing::warn!(
                max,
                "possible event emitter leak: more than {max} listeners added; \
                 use set_max_listeners() to increase the limit"
            );
        }
    }

    /// Register a listener that receives every emitted event.
    ///
    /// Any-listeners run before the listeners of the emitted event.
    pub fn on_any(&self, callback: impl Fn(&str, &P) + 'static) -> ListenerId {
        let id = self.next_id();
        self.any_listeners.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    /// Register a hook called with the event name of every new listener.
    ///
    /// Hooks only run when the emitter was built with `new_listener` enabled.
    pub fn on_new_listener(&self, hook: impl Fn(&str) + 'static) -> ListenerId {
        let id = self.next_id();
        self.new_listener_hooks.borrow_mut().push((id, Rc::new(hook)));
        id
    }

    // =========================================================================
    // REMOVAL
    // =========================================================================

    /// Remove the listener `id` registered for `event`.
    ///
    /// Returns false if no such listener exists.
    pub fn off(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|reg| !(reg.id == id && reg.event == event));
        let removed = listeners.len() != before;
        if removed {
            tracing::trace!(event, id, "listener removed");
        }
        removed
    }

    /// Alias for [`off`](Self::off).
    pub fn remove_listener(&self, event: &str, id: ListenerId) -> bool {
        self.off(event, id)
    }

    /// Remove an any-listener.
    pub fn off_any(&self, id: ListenerId) -> bool {
        let mut any = self.any_listeners.borrow_mut();
        let before = any.len();
        any.retain(|(lid, _)| *lid != id);
        any.len() != before
    }

    /// Remove a new-listener hook.
    pub fn off_new_listener(&self, id: ListenerId) -> bool {
        let mut hooks = self.new_listener_hooks.borrow_mut();
        let before = hooks.len();
        hooks.retain(|(lid, _)| *lid != id);
        hooks.len() != before
    }

    /// Remove every listener of `event`, or of all events when `None`.
    ///
    /// Any-listeners are left in place.
    pub fn remove_all_listeners(&self, event: Option<&str>) {
        match event {
            Some(event) => {
                self.listeners.borrow_mut().retain(|reg| reg.event != event);
                self.warned.borrow_mut().remove(event);
            }
            None => {
                self.listeners.borrow_mut().clear();
                self.warned.borrow_mut().clear();
            }
        }
    }

    // =========================================================================
    // EMIT
    // =========================================================================

    /// Emit `event` with `payload` to every matching listener.
    ///
    /// Returns `Ok(true)` if at least one listener ran. Emitting
    /// [`ERROR_EVENT`] with nobody listening returns [`EmitError::Unhandled`].
    pub fn emit(&self, event: &str, payload: &P) -> Result<bool, EmitError> {
        let any: Vec<AnyListener<P>> = self
            .any_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect();
        let matched = self.take_matching(event);
        tracing::trace!(event, listeners = matched.len(), any = any.len(), "emit");

        if matched.is_empty() && any.is_empty() {
            if event == ERROR_EVENT {
                return Err(EmitError::Unhandled);
            }
            return Ok(false);
        }

        // Borrows are released, callbacks may register or remove listeners.
        for cb in &any {
            cb(event, payload);
        }
        for cb in &matched {
            cb(payload);
        }
        Ok(true)
    }

    /// Snapshot the listeners matching `event`, expiring spent `once`/`many` ones.
    fn take_matching(&self, event: &str) -> Vec<Listener<P>> {
        let mut matched = Vec::new();
        self.listeners.borrow_mut().retain_mut(|reg| {
            if !self.matches(&reg.event, event) {
                return true;
            }
            matched.push(reg.callback.clone());
            match reg.remaining.as_mut() {
                Some(remaining) => {
                    *remaining -= 1;
                    *remaining > 0
                }
                None => true,
            }
        });
        matched
    }

    // =========================================================================
    // INTROSPECTION
    // =========================================================================

    /// Listeners that an emit of `event` would call.
    pub fn listeners(&self, event: &str) -> Vec<Listener<P>> {
        self.listeners
            .borrow()
            .iter()
            .filter(|reg| self.matches(&reg.event, event))
            .map(|reg| reg.callback.clone())
            .collect()
    }

    pub fn listeners_any(&self) -> Vec<AnyListener<P>> {
        self.any_listeners
            .borrow()
            .iter()
            .map(|(_, cb)| cb.clone())
            .collect()
    }

    /// Number of listeners an emit of `event` would call.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .iter()
            .filter(|reg| self.matches(&reg.event, event))
            .count()
    }

    /// Registered event names in first-registration order.
    pub fn event_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for reg in self.listeners.borrow().iter() {
            if !names.contains(&reg.event) {
                names.push(reg.event.clone());
            }
        }
        names
    }

    pub fn max_listeners(&self) -> usize {
        self.max_listeners.get()
    }

    /// Change the leak warning threshold. `0` disables the check.
    pub fn set_max_listeners(&self, max: usize) {
        self.max_listeners.set(max);
    }
}

impl<P> Default for EventEmitter<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> fmt::Debug for EventEmitter<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("wildcard", &self.wildcard)
            .field("delimiter", &self.delimiter)
            .field("max_listeners", &self.max_listeners.get())
            .field("events", &self.event_names())
            .field("any_listeners", &self.any_listeners.borrow().len())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&str) -> Box<dyn Fn(&i32)>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let log_clone = log.clone();
        let make = move |tag: &str| -> Box<dyn Fn(&i32)> {
            let log = log_clone.clone();
            let tag = tag.to_string();
            Box::new(move |v: &i32| log.borrow_mut().push(format!("{tag}:{v}")))
        };
        (log, make)
    }

    #[test]
    fn emit_reaches_listeners_in_order() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        emitter.on("added", make("a"));
        emitter.on("added", make("b"));
        emitter.on("removed", make("c"));

        assert_eq!(emitter.emit("added", &1), Ok(true));
        assert_eq!(*log.borrow(), vec!["a:1", "b:1"]);
    }

    #[test]
    fn emit_without_listeners_returns_false() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        assert_eq!(emitter.emit("added", &1), Ok(false));
    }

    #[test]
    fn unhandled_error_event() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        assert_eq!(emitter.emit(ERROR_EVENT, &1), Err(EmitError::Unhandled));

        emitter.on_any(|_, _| {});
        assert_eq!(emitter.emit(ERROR_EVENT, &1), Ok(true));
    }

    #[test]
    fn prepend_runs_first() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        emitter.on("added", make("a"));
        emitter.prepend_listener("added", make("first"));
        emitter.emit("added", &2).unwrap();

        assert_eq!(*log.borrow(), vec!["first:2", "a:2"]);
    }

    #[test]
    fn off_removes_only_that_listener() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        let a = emitter.on("added", make("a"));
        emitter.on("added", make("b"));

        assert!(!emitter.off("removed", a));
        assert!(emitter.off("added", a));
        assert!(!emitter.off("added", a));

        emitter.emit("added", &3).unwrap();
        assert_eq!(*log.borrow(), vec!["b:3"]);
    }

    #[test]
    fn once_and_many_expire() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        emitter.once("tick", make("once"));
        emitter.many("tick", 2, make("twice"));
        emitter.many("tick", 0, make("never"));

        for i in 0..3 {
            emitter.emit("tick", &i).unwrap();
        }

        assert_eq!(*log.borrow(), vec!["once:0", "twice:0", "twice:1"]);
        assert_eq!(emitter.listener_count("tick"), 0);
    }

    #[test]
    fn any_listener_sees_event_name_first() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        let log_any = log.clone();
        let id = emitter.on_any(move |event, v| log_any.borrow_mut().push(format!("any {event}:{v}")));
        emitter.on("added", make("a"));

        emitter.emit("added", &4).unwrap();
        assert_eq!(*log.borrow(), vec!["any added:4", "a:4"]);

        assert!(emitter.off_any(id));
        assert!(emitter.listeners_any().is_empty());
    }

    #[test]
    fn wildcard_listeners() {
        let emitter: EventEmitter<i32> =
            EventEmitter::with_options(EmitterOptions::default().wildcard(true));
        let (log, make) = recorder();

        emitter.on("user.*", make("star"));
        emitter.on("user.**", make("deep"));
        emitter.on("user.added", make("exact"));

        emitter.emit("user.added", &1).unwrap();
        emitter.emit("user.role.changed", &2).unwrap();

        assert_eq!(
            *log.borrow(),
            vec!["star:1", "deep:1", "exact:1", "deep:2"]
        );
        assert_eq!(emitter.listener_count("user.added"), 3);
    }

    #[test]
    fn wildcards_are_literal_when_disabled() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let (log, make) = recorder();

        emitter.on("user.*", make("star"));
        assert_eq!(emitter.emit("user.added", &1), Ok(false));
        assert_eq!(emitter.emit("user.*", &2), Ok(true));
        assert_eq!(*log.borrow(), vec!["star:2"]);
    }

    #[test]
    fn listeners_may_register_during_emit() {
        let emitter: Rc<EventEmitter<i32>> = Rc::new(EventEmitter::new());
        let calls = Rc::new(Cell::new(0));

        let inner = emitter.clone();
        let calls_clone = calls.clone();
        emitter.on("added", move |_| {
            let calls = calls_clone.clone();
            inner.on("added", move |_| calls.set(calls.get() + 1));
        });

        emitter.emit("added", &1).unwrap();
        assert_eq!(calls.get(), 0);

        emitter.emit("added", &1).unwrap();
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn leak_threshold_does_not_block_registration() {
        let emitter: EventEmitter<i32> =
            EventEmitter::with_options(EmitterOptions::default().max_listeners(2));
        for _ in 0..5 {
            emitter.on("added", |_| {});
        }
        assert_eq!(emitter.listener_count("added"), 5);
        assert!(emitter.warned.borrow().contains("added"));

        emitter.set_max_listeners(0);
        assert_eq!(emitter.max_listeners(), 0);
    }

    #[test]
    fn new_listener_hooks() {
        let emitter: EventEmitter<i32> =
            EventEmitter::with_options(EmitterOptions::default().new_listener(true));
        let names = Rc::new(RefCell::new(Vec::new()));

        let names_clone = names.clone();
        let hook = emitter.on_new_listener(move |event| names_clone.borrow_mut().push(event.to_string()));
        emitter.on("added", |_| {});
        emitter.once("removed", |_| {});

        assert_eq!(*names.borrow(), vec!["added", "removed"]);

        assert!(emitter.off_new_listener(hook));
        emitter.on("reset", |_| {});
        assert_eq!(names.borrow().len(), 2);
    }

    #[test]
    fn new_listener_hooks_need_option() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        let called = Rc::new(Cell::new(false));

        let called_clone = called.clone();
        emitter.on_new_listener(move |_| called_clone.set(true));
        emitter.on("added", |_| {});

        assert!(!called.get());
    }

    #[test]
    fn remove_all_listeners() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        emitter.on("added", |_| {});
        emitter.on("removed", |_| {});
        emitter.on("added", |_| {});
        emitter.on_any(|_, _| {});

        assert_eq!(emitter.event_names(), vec!["added", "removed"]);

        emitter.remove_all_listeners(Some("added"));
        assert_eq!(emitter.event_names(), vec!["removed"]);

        emitter.remove_all_listeners(None);
        assert!(emitter.event_names().is_empty());
        assert_eq!(emitter.listeners_any().len(), 1);
    }

    #[test]
    fn debug_format() {
        let emitter: EventEmitter<i32> = EventEmitter::new();
        emitter.on("added", |_| {});
        let debug = format!("{:?}", emitter);
        assert!(debug.contains("EventEmitter"));
        assert!(debug.contains("added"));
    }
}
