// ============================================================================
// collection-emitter - Collection Utilities
// Underscore-style enumeration functions over slices
// ============================================================================
//
// Every function takes the sequence as its first argument and never touches
// an emitter. `CollectionEventEmitter` forwards to these with its backing
// field prepended.
// ============================================================================

mod keyed;

pub use keyed::{count_by, group_by, sort_by};

use rand::Rng;
use rand::seq::SliceRandom;

// =============================================================================
// ITERATION
// =============================================================================

pub fn for_each<T>(list: &[T], mut f: impl FnMut(&T)) {
    for item in list {
        f(item);
    }
}

pub fn map<T, U>(list: &[T], f: impl FnMut(&T) -> U) -> Vec<U> {
    list.iter().map(f).collect()
}

/// Left fold starting from `init`.
pub fn reduce<T, A>(list: &[T], init: A, mut f: impl FnMut(A, &T) -> A) -> A {
    list.iter().fold(init, |acc, item| f(acc, item))
}

/// Right fold starting from `init`.
pub fn reduce_right<T, A>(list: &[T], init: A, mut f: impl FnMut(A, &T) -> A) -> A {
    list.iter().rev().fold(init, |acc, item| f(acc, item))
}

/// Call `f` on every element and collect the results.
pub fn invoke<T, R>(list: &[T], f: impl FnMut(&T) -> R) -> Vec<R> {
    list.iter().map(f).collect()
}

/// The sequence as a borrowing iterator, for chaining adapters.
pub fn chain<T>(list: &[T]) -> std::slice::Iter<'_, T> {
    list.iter()
}

// =============================================================================
// SEARCH / PREDICATES
// =============================================================================

pub fn find<T>(list: &[T], mut predicate: impl FnMut(&T) -> bool) -> Option<&T> {
    list.iter().find(|item| predicate(item))
}

pub fn filter<T>(list: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
    list.iter().filter(|item| predicate(item)).collect()
}

/// Opposite of [`filter`].
pub fn reject<T>(list: &[T], mut predicate: impl FnMut(&T) -> bool) -> Vec<&T> {
    list.iter().filter(|item| !predicate(item)).collect()
}

/// True when every element passes; true for an empty list.
pub fn every<T>(list: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    list.iter().all(predicate)
}

/// True when any element passes; false for an empty list.
pub fn some<T>(list: &[T], predicate: impl FnMut(&T) -> bool) -> bool {
    list.iter().any(predicate)
}

pub fn include<T: PartialEq>(list: &[T], value: &T) -> bool {
    list.contains(value)
}

pub fn index_of<T: PartialEq>(list: &[T], value: &T) -> Option<usize> {
    list.iter().position(|item| item == value)
}

pub fn last_index_of<T: PartialEq>(list: &[T], value: &T) -> Option<usize> {
    list.iter().rposition(|item| item == value)
}

// =============================================================================
// EXTREMES
// =============================================================================

/// Largest element; the first one wins on ties.
pub fn max<T: Ord>(list: &[T]) -> Option<&T> {
    list.iter().reduce(|best, item| if item > best { item } else { best })
}

/// Smallest element; the first one wins on ties.
pub fn min<T: Ord>(list: &[T]) -> Option<&T> {
    list.iter().reduce(|best, item| if item < best { item } else { best })
}

/// Element with the largest computed key; the first one wins on ties.
pub fn max_by_key<T, K: Ord>(list: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    list.iter()
        .map(|item| (key(item), item))
        .reduce(|best, next| if next.0 > best.0 { next } else { best })
        .map(|(_, item)| item)
}

/// Element with the smallest computed key; the first one wins on ties.
pub fn min_by_key<T, K: Ord>(list: &[T], mut key: impl FnMut(&T) -> K) -> Option<&T> {
    list.iter()
        .map(|item| (key(item), item))
        .reduce(|best, next| if next.0 < best.0 { next } else { best })
        .map(|(_, item)| item)
}

// =============================================================================
// SLICING
// =============================================================================

pub fn to_array<T: Clone>(list: &[T]) -> Vec<T> {
    list.to_vec()
}

pub fn size<T>(list: &[T]) -> usize {
    list.len()
}

pub fn is_empty<T>(list: &[T]) -> bool {
    list.is_empty()
}

pub fn first<T>(list: &[T]) -> Option<&T> {
    list.first()
}

/// The first `n` elements (fewer if the list is shorter).
pub fn first_n<T>(list: &[T], n: usize) -> &[T] {
    &list[..n.min(list.len())]
}

/// Everything but the last element.
pub fn initial<T>(list: &[T]) -> &[T] {
    initial_n(list, 1)
}

/// Everything but the last `n` elements.
pub fn initial_n<T>(list: &[T], n: usize) -> &[T] {
    &list[..list.len().saturating_sub(n)]
}

/// Everything but the first element.
pub fn rest<T>(list: &[T]) -> &[T] {
    rest_n(list, 1)
}

/// Everything from index `n` on.
pub fn rest_n<T>(list: &[T], n: usize) -> &[T] {
    &list[n.min(list.len())..]
}

pub fn last<T>(list: &[T]) -> Option<&T> {
    list.last()
}

/// The last `n` elements (fewer if the list is shorter).
pub fn last_n<T>(list: &[T], n: usize) -> &[T] {
    &list[list.len().saturating_sub(n)..]
}

/// Elements not equal to any of `values`.
pub fn without<'a, T: PartialEq>(list: &'a [T], values: &[T]) -> Vec<&'a T> {
    list.iter().filter(|item| !values.contains(item)).collect()
}

// =============================================================================
// SHUFFLE
// =============================================================================

/// A shuffled copy of the references, using the thread-local RNG.
pub fn shuffle<T>(list: &[T]) -> Vec<&T> {
    shuffle_with(list, &mut rand::thread_rng())
}

/// A shuffled copy of the references, using `rng`.
pub fn shuffle_with<'a, T, R: Rng + ?Sized>(list: &'a [T], rng: &mut R) -> Vec<&'a T> {
    let mut shuffled: Vec<&T> = list.iter().collect();
    shuffled.shuffle(rng);
    shuffled
}

// =============================================================================
// TESTS
// =============================================================================
