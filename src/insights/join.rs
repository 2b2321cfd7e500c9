/// Join phrases as a sentence fragment ending in a period.
///
/// `["a"]` → `"a."`, `["a", "b"]` → `"a and b."`,
/// `["a", "b", "c"]` → `"a, b, and c."`. Returns `None` for no phrases.
pub fn join_phrases<S: AsRef<str>>(phrases: &[S]) -> Option<String> {
    let phrases: Vec<&str> = phrases.iter().map(|p| p.as_ref()).collect();
    let joined = match phrases.as_slice() {
        [] => return None,
        [only] => only.to_string(),
        [first, second] => format!("{} and {}", first, second),
        [init @ .., last] => format!("{}, and {}", init.join(", "), last),
    };
    Some(joined + ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_shapes() {
        assert_eq!(join_phrases::<&str>(&[]), None);
        assert_eq!(join_phrases(&["a"]).as_deref(), Some("a."));
        assert_eq!(join_phrases(&["a", "b"]).as_deref(), Some("a and b."));
        assert_eq!(join_phrases(&["a", "b", "c"]).as_deref(), Some("a, b, and c."));
        assert_eq!(
            join_phrases(&["a", "b", "c", "d"]).as_deref(),
            Some("a, b, c, and d.")
        );
    }
}
