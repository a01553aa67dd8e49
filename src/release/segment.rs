//! Version-string tokenization

/// One tokenized unit of a version string.
///
/// An explicit sum type so the comparator pattern-matches on segment kind
/// instead of coercing between numbers and strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A token consisting entirely of ASCII digits, compared by magnitude.
    Number(u64),
    /// Any other token, lowercased, compared as a string.
    Text(String),
}

/// Tokenize a version string into segments.
///
/// Splits on `.` and `-`, trims each token, and drops empties, so
/// `"1.10-beta"` becomes `[Number(1), Number(10), Text("beta")]`.
pub fn tokenize(version: &str) -> Vec<Segment> {
    version
        .split(['.', '-'])
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            if token.chars().all(|c| c.is_ascii_digit()) {
                // Digit runs too long for u64 stay textual rather than wrapping.
                token
                    .parse()
                    .map(Segment::Number)
                    .unwrap_or_else(|_| Segment::Text(token.to_lowercase()))
            } else {
                Segment::Text(token.to_lowercase())
            }
        })
        .collect()
}
