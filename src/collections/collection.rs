// ============================================================================
// collection-emitter - CollectionEventEmitter
// An event emitter carrying a named collection
// ============================================================================
//
// Composition instead of inheritance: the emitter is embedded and reachable
// through `Deref`, the backing sequence lives in a `Fields` store under the
// configured name, and every collection method reads that field at call time
// and forwards to the matching function in `crate::utils`.
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::ops::Deref;

use rand::Rng;

use super::attributes::{Attributes, MissingLast};
use super::fields::Fields;
use crate::core::config::{CollectionOptions, resolve_name};
use crate::emitter::{EmitterOptions, EventEmitter};
use crate::utils;

// =============================================================================
// COLLECTION EVENT EMITTER
// =============================================================================

/// An [`EventEmitter`] with underscore-style collection methods over one of
/// its named fields.
///
/// `T` is the element type, `P` the event payload type.
///
/// # Example
///
/// ```
/// use collection_emitter::CollectionEventEmitter;
///
/// let mut todos: CollectionEventEmitter<i32> = CollectionEventEmitter::named("items");
/// todos.set_field("items", vec![1, 2, 3]);
///
/// assert_eq!(todos.size(), 3);
/// assert_eq!(todos.map(|x| x * 2), vec![2, 4, 6]);
///
/// todos.on("added", |n| println!("added {n}"));
/// todos.emit("added", &4).unwrap();
/// ```
pub struct CollectionEventEmitter<T, P = T> {
    /// Field holding the backing sequence, fixed at construction
    name: String,

    /// Sequences assigned by the owner
    fields: Fields<T>,

    emitter: EventEmitter<P>,
}

impl<T, P> CollectionEventEmitter<T, P> {
    /// Create with the default field name and emitter options.
    pub fn new() -> Self {
        Self::with_options(None, EmitterOptions::default())
    }

    /// Create using `name` as the backing field. An empty name uses the default.
    pub fn named(name: &str) -> Self {
        Self::with_options(Some(name), EmitterOptions::default())
    }

    /// Create with an optional field name and emitter options.
    pub fn with_options(name: Option<&str>, options: EmitterOptions) -> Self {
        let name = resolve_name(name);
        tracing::debug!(name = %name, wildcard = options.wildcard, "collection emitter created");
        Self {
            name,
            fields: Fields::new(),
            emitter: EventEmitter::with_options(options),
        }
    }

    pub fn from_options(options: CollectionOptions) -> Self {
        Self::with_options(options.name.as_deref(), options.emitter)
    }

    /// Name of the backing field.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn emitter(&self) -> &EventEmitter<P> {
        &self.emitter
    }

    // =========================================================================
    // FIELDS
    // =========================================================================

    /// The backing sequence; empty if the field was never assigned.
    pub fn backing(&self) -> &[T] {
        self.try_backing().unwrap_or(&[])
    }

    /// The backing sequence, or `None` if the field was never assigned.
    pub fn try_backing(&self) -> Option<&[T]> {
        self.fields.get(&self.name)
    }

    pub fn backing_mut(&mut self) -> &mut Vec<T> {
        self.fields.get_mut(&self.name)
    }

    /// Replace the backing sequence, returning the previous one.
    pub fn set_backing(&mut self, values: Vec<T>) -> Option<Vec<T>> {
        self.fields.set(self.name.clone(), values)
    }

    /// Assign any named field. Only the configured one is used by collection methods.
    pub fn set_field(&mut self, name: impl Into<String>, values: Vec<T>) -> Option<Vec<T>> {
        self.fields.set(name, values)
    }

    pub fn field(&self, name: &str) -> Option<&[T]> {
        self.fields.get(name)
    }

    pub fn field_mut(&mut self, name: &str) -> &mut Vec<T> {
        self.fields.get_mut(name)
    }

    pub fn remove_field(&mut self, name: &str) -> Option<Vec<T>> {
        self.fields.remove(name)
    }

    pub fn fields(&self) -> &Fields<T> {
        &self.fields
    }

    // =========================================================================
    // ITERATION
    // =========================================================================

    pub fn for_each(&self, f: impl FnMut(&T)) {
        utils::for_each(self.backing(), f)
    }

    pub fn each(&self, f: impl FnMut(&T)) {
        utils::for_each(self.backing(), f)
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        utils::map(self.backing(), f)
    }

    pub fn collect<U>(&self, f: impl FnMut(&T) -> U) -> Vec<U> {
        utils::map(self.backing(), f)
    }

    pub fn reduce<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        utils::reduce(self.backing(), init, f)
    }

    pub fn foldl<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        utils::reduce(self.backing(), init, f)
    }

    pub fn inject<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        utils::reduce(self.backing(), init, f)
    }

    pub fn reduce_right<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        utils::reduce_right(self.backing(), init, f)
    }

    pub fn foldr<A>(&self, init: A, f: impl FnMut(A, &T) -> A) -> A {
        utils::reduce_right(self.backing(), init, f)
    }

    pub fn invoke<R>(&self, f: impl FnMut(&T) -> R) -> Vec<R> {
        utils::invoke(self.backing(), f)
    }

    pub fn chain(&self) -> std::slice::Iter<'_, T> {
        utils::chain(self.backing())
    }

    // =========================================================================
    // SEARCH / PREDICATES
    // =========================================================================

    pub fn find(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        utils::find(self.backing(), predicate)
    }

    pub fn detect(&self, predicate: impl FnMut(&T) -> bool) -> Option<&T> {
        utils::find(self.backing(), predicate)
    }

    pub fn filter(&self, predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        utils::filter(self.backing(), predicate)
    }

    pub fn select(&self, predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        utils::filter(self.backing(), predicate)
    }

    pub fn reject(&self, predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
        utils::reject(self.backing(), predicate)
    }

    pub fn every(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        utils::every(self.backing(), predicate)
    }

    pub fn all(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        utils::every(self.backing(), predicate)
    }

    pub fn some(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        utils::some(self.backing(), predicate)
    }

    pub fn any(&self, predicate: impl FnMut(&T) -> bool) -> bool {
        utils::some(self.backing(), predicate)
    }

    pub fn include(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        utils::include(self.backing(), value)
    }

    pub fn contains(&self, value: &T) -> bool
    where
        T: PartialEq,
    {
        utils::include(self.backing(), value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        utils::index_of(self.backing(), value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        utils::last_index_of(self.backing(), value)
    }

    // =========================================================================
    // EXTREMES
    // =========================================================================

    pub fn max(&self) -> Option<&T>
    where
        T: Ord,
    {
        utils::max(self.backing())
    }

    pub fn min(&self) -> Option<&T>
    where
        T: Ord,
    {
        utils::min(self.backing())
    }

    pub fn max_by_key<K: Ord>(&self, key: impl FnMut(&T) -> K) -> Option<&T> {
        utils::max_by_key(self.backing(), key)
    }

    pub fn min_by_key<K: Ord>(&self, key: impl FnMut(&T) -> K) -> Option<&T> {
        utils::min_by_key(self.backing(), key)
    }

    // =========================================================================
    // SLICING
    // =========================================================================

    pub fn to_array(&self) -> Vec<T>
    where
        T: Clone,
    {
        utils::to_array(self.backing())
    }

    pub fn size(&self) -> usize {
        utils::size(self.backing())
    }

    pub fn is_empty(&self) -> bool {
        utils::is_empty(self.backing())
    }

    pub fn first(&self) -> Option<&T> {
        utils::first(self.backing())
    }

    pub fn head(&self) -> Option<&T> {
        utils::first(self.backing())
    }

    pub fn take(&self) -> Option<&T> {
        utils::first(self.backing())
    }

    pub fn first_n(&self, n: usize) -> &[T] {
        utils::first_n(self.backing(), n)
    }

    pub fn initial(&self) -> &[T] {
        utils::initial(self.backing())
    }

    pub fn initial_n(&self, n: usize) -> &[T] {
        utils::initial_n(self.backing(), n)
    }

    pub fn rest(&self) -> &[T] {
        utils::rest(self.backing())
    }

    pub fn tail(&self) -> &[T] {
        utils::rest(self.backing())
    }

    pub fn drop(&self) -> &[T] {
        utils::rest(self.backing())
    }

    pub fn rest_n(&self, n: usize) -> &[T] {
        utils::rest_n(self.backing(), n)
    }

    pub fn last(&self) -> Option<&T> {
        utils::last(self.backing())
    }

    pub fn last_n(&self, n: usize) -> &[T] {
        utils::last_n(self.backing(), n)
    }

    pub fn without(&self, values: &[T]) -> Vec<&T>
    where
        T: PartialEq,
    {
        utils::without(self.backing(), values)
    }

    pub fn shuffle(&self) -> Vec<&T> {
        utils::shuffle(self.backing())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<&T> {
        utils::shuffle_with(self.backing(), rng)
    }

    // =========================================================================
    // KEYED
    // =========================================================================

    pub fn group_by<K: Ord>(&self, key: impl FnMut(&T) -> K) -> BTreeMap<K, Vec<&T>> {
        utils::group_by(self.backing(), key)
    }

    pub fn count_by<K: Ord>(&self, key: impl FnMut(&T) -> K) -> BTreeMap<K, usize> {
        utils::count_by(self.backing(), key)
    }

    pub fn sort_by<K: Ord>(&self, key: impl FnMut(&T) -> K) -> Vec<&T> {
        utils::sort_by(self.backing(), key)
    }

    /// Group by the value of attribute `attr`; elements without it land under `None`.
    pub fn group_by_attr(&self, attr: &str) -> BTreeMap<Option<T::Value>, Vec<&T>>
    where
        T: Attributes,
        T::Value: Ord,
    {
        utils::group_by(self.backing(), |item| Attributes::get(item, attr))
    }

    pub fn count_by_attr(&self, attr: &str) -> BTreeMap<Option<T::Value>, usize>
    where
        T: Attributes,
        T::Value: Ord,
    {
        utils::count_by(self.backing(), |item| Attributes::get(item, attr))
    }

    /// Sort by the value of attribute `attr`; elements without it go last.
    pub fn sort_by_attr(&self, attr: &str) -> Vec<&T>
    where
        T: Attributes,
        T::Value: Ord,
    {
        utils::sort_by(self.backing(), |item| MissingLast(Attributes::get(item, attr)))
    }
}

impl<T, P> Deref for CollectionEventEmitter<T, P> {
    type Target = EventEmitter<P>;

    fn deref(&self) -> &EventEmitter<P> {
        &self.emitter
    }
}

impl<T, P> Default for CollectionEventEmitter<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, P> fmt::Debug for CollectionEventEmitter<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CollectionEventEmitter")
            .field("name", &self.name)
            .field("backing", &self.try_backing())
            .field("emitter", &self.emitter)
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
