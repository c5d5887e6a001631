use collection_emitter::{Attributes, CollectionEventEmitter, utils};

fn items(values: Vec<i32>) -> CollectionEventEmitter<i32> {
    let mut collection = CollectionEventEmitter::named("items");
    collection.set_field("items", values);
    collection
}

#[test]
fn custom_field_name() {
    let collection = items(vec![1, 2, 3]);
    assert_eq!(collection.size(), 3);
    assert_eq!(collection.map(|x| x * 2), vec![2, 4, 6]);
}

#[test]
fn methods_match_direct_utility_calls() {
    let backing = vec![4, 8, 15, 16, 23, 42];
    let collection = items(backing.clone());
    let s = backing.as_slice();

    assert_eq!(collection.map(|x| x + 1), utils::map(s, |x| x + 1));
    assert_eq!(collection.reduce(0, |a, x| a + x), utils::reduce(s, 0, |a, x| a + x));
    assert_eq!(
        collection.reduce_right(0, |a, x| a * 2 + x),
        utils::reduce_right(s, 0, |a, x| a * 2 + x)
    );
    assert_eq!(collection.find(|x| *x > 10), utils::find(s, |x| *x > 10));
    assert_eq!(collection.filter(|x| x % 2 == 0), utils::filter(s, |x| x % 2 == 0));
    assert_eq!(collection.reject(|x| x % 2 == 0), utils::reject(s, |x| x % 2 == 0));
    assert_eq!(collection.every(|x| *x > 0), utils::every(s, |x| *x > 0));
    assert_eq!(collection.some(|x| *x > 40), utils::some(s, |x| *x > 40));
    assert_eq!(collection.include(&15), utils::include(s, &15));
    assert_eq!(collection.max(), utils::max(s));
    assert_eq!(collection.min(), utils::min(s));
    assert_eq!(collection.to_array(), utils::to_array(s));
    assert_eq!(collection.size(), utils::size(s));
    assert_eq!(collection.first(), utils::first(s));
    assert_eq!(collection.initial(), utils::initial(s));
    assert_eq!(collection.rest(), utils::rest(s));
    assert_eq!(collection.last(), utils::last(s));
    assert_eq!(collection.without(&[4, 42]), utils::without(s, &[4, 42]));
    assert_eq!(collection.index_of(&16), utils::index_of(s, &16));
    assert_eq!(collection.last_index_of(&16), utils::last_index_of(s, &16));
    assert_eq!(collection.is_empty(), utils::is_empty(s));
    assert!(collection.chain().eq(utils::chain(s)));
    assert_eq!(collection.group_by(|x| x % 2), utils::group_by(s, |x| x % 2));
    assert_eq!(collection.count_by(|x| x / 10), utils::count_by(s, |x| x / 10));
    assert_eq!(collection.sort_by(|x| -x), utils::sort_by(s, |x| -x));
}

#[test]
fn function_selector_bypasses_attributes() {
    // i32 has no attributes; a function selector still works
    let collection = items(vec![3, 1, 2]);
    assert_eq!(collection.sort_by(|x| *x), vec![&1, &2, &3]);
}

struct Shape {
    kind: &'static str,
    sides: u32,
}

impl Attributes for Shape {
    type Value = String;

    fn get(&self, attr: &str) -> Option<String> {
        match attr {
            "type" => Some(self.kind.to_string()),
            _ => None,
        }
    }
}

#[test]
fn string_selector_uses_get() {
    let mut collection: CollectionEventEmitter<Shape> = CollectionEventEmitter::new();
    collection.set_backing(vec![
        Shape { kind: "polygon", sides: 3 },
        Shape { kind: "circle", sides: 0 },
        Shape { kind: "polygon", sides: 4 },
    ]);

    let by_attr = collection.group_by_attr("type");
    let by_fn = collection.group_by(|s| s.get("type"));
    assert_eq!(by_attr.keys().collect::<Vec<_>>(), by_fn.keys().collect::<Vec<_>>());

    let sides: Vec<u32> = by_attr[&Some("polygon".to_string())]
        .iter()
        .map(|s| s.sides)
        .collect();
    assert_eq!(sides, vec![3, 4]);

    let counts = collection.count_by_attr("type");
    assert_eq!(counts[&Some("circle".to_string())], 1);
}
