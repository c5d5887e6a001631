// ============================================================================
// collection-emitter - Collections
// The collection emitter, its field store and attribute lookup
// ============================================================================

mod attributes;
mod collection;
mod fields;

pub use attributes::{Attributes, MissingLast};
pub use collection::CollectionEventEmitter;
pub use fields::Fields;
