//! Total order over version strings

use crate::release::segment::{Segment, tokenize};
use std::cmp::Ordering;

/// Missing positions read as numeric zero, so `"1.2"` equals `"1.2.0"`.
const PAD: Segment = Segment::Number(0);

/// Compare two version strings segment by segment.
///
/// The first discriminating position decides. Numeric segments compare by
/// magnitude, text segments by (lowercased) string order. At a mixed-kind
/// position the numeric segment always outranks the text one: `"1.0.0"` is
/// newer than `"1.0.beta"`, since a plain numeric release sorts ahead of one
/// carrying a qualifier word.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    let left = tokenize(a);
    let right = tokenize(b);

    for i in 0..left.len().max(right.len()) {
        let l = left.get(i).unwrap_or(&PAD);
        let r = right.get(i).unwrap_or(&PAD);

        let ordering = match (l, r) {
            (Segment::Number(x), Segment::Number(y)) => x.cmp(y),
            (Segment::Text(x), Segment::Text(y)) => x.cmp(y),
            (Segment::Number(_), Segment::Text(_)) => Ordering::Greater,
            (Segment::Text(_), Segment::Number(_)) => Ordering::Less,
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }

    Ordering::Equal
}
