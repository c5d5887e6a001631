// ============================================================================
// collection-emitter - Attributes
// Named attribute lookup for keyed collection methods
// ============================================================================

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

/// Elements that expose named attributes.
///
/// The `*_attr` keyed methods on
/// [`CollectionEventEmitter`](crate::CollectionEventEmitter) use this to turn
/// an attribute name into a key.
///
/// ```
/// use collection_emitter::Attributes;
///
/// struct Pet { kind: &'static str }
///
/// impl Attributes for Pet {
///     type Value = String;
///
///     fn get(&self, attr: &str) -> Option<String> {
///         match attr {
///             "kind" => Some(self.kind.to_string()),
///             _ => None,
///         }
///     }
/// }
///
/// assert_eq!(Pet { kind: "cat" }.get("kind").as_deref(), Some("cat"));
/// assert_eq!(Pet { kind: "cat" }.get("age"), None);
/// ```
pub trait Attributes {
    type Value;

    /// Value of `attr`, or `None` when the element has no such attribute.
    fn get(&self, attr: &str) -> Option<Self::Value>;
}

impl<V: Clone> Attributes for HashMap<String, V> {
    type Value = V;

    fn get(&self, attr: &str) -> Option<V> {
        HashMap::get(self, attr).cloned()
    }
}

impl<V: Clone> Attributes for BTreeMap<String, V> {
    type Value = V;

    fn get(&self, attr: &str) -> Option<V> {
        BTreeMap::get(self, attr).cloned()
    }
}

/// Sort key for an attribute value: present values first, missing ones last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingLast<V>(pub Option<V>);

impl<V: Ord> PartialOrd for MissingLast<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for MissingLast<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.0, &other.0) {
            (Some(a), Some(b)) => a.cmp(b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}
