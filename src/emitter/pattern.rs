// ============================================================================
// collection-emitter - Event Name Matching
// Namespaced event names with `*` (one segment) and `**` (any segments)
// ============================================================================

const ONE: &str = "*";
const MANY: &str = "**";

/// Whether a registered event name matches an emitted one.
///
/// Without wildcards this is plain equality. With wildcards both names are
/// split on `delimiter` and a wildcard on either side matches, so emitting
/// `"user.*"` reaches a listener on `"user.added"` and vice versa.
pub fn matches(registered: &str, emitted: &str, wildcard: bool, delimiter: &str) -> bool {
    if registered == emitted {
        return true;
    }
    if !wildcard || delimiter.is_empty() {
        return false;
    }

    let registered: Vec<&str> = registered.split(delimiter).collect();
    let emitted: Vec<&str> = emitted.split(delimiter).collect();
    match_segments(&registered, &emitted)
}

fn match_segments(a: &[&str], b: &[&str]) -> bool {
    match (a.split_first(), b.split_first()) {
        (None, None) => true,
        (Some((&MANY, rest)), _) => {
            // `**` consumes zero or more segments of the other name
            (0..=b.len()).any(|skip| match_segments(rest, &b[skip..]))
        }
        (_, Some((&MANY, rest))) => (0..=a.len()).any(|skip| match_segments(&a[skip..], rest)),
        (Some((x, a_rest)), Some((y, b_rest))) => {
            (x == y || *x == ONE || *y == ONE) && match_segments(a_rest, b_rest)
        }
        _ => false,
    }
}

// =============================================================================
// TESTS
// =============================================================================
