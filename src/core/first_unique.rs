use std::collections::HashMap;

/// Returns the first character of `s` that occurs exactly once.
///
/// Spaces are never counted and never returned. `None` when every counted
/// character repeats, or when `s` is empty or contains only spaces.
/// Comparison is by exact `char` identity, so `'A'` and `'a'` differ.
pub fn first_non_repeating(s: &str) -> Option<char> {
    let mut counts: HashMap<char, usize> = HashMap::new();
    for c in s.chars().filter(|&c| c != ' ') {
        *counts.entry(c).or_insert(0) += 1;
    }

    // 空白不在表中，計數視為 0
    s.chars().find(|c| counts.get(c).copied().unwrap_or(0) == 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swiss() {
        assert_eq!(first_non_repeating("swiss"), Some('w'));
    }

    #[test]
    fn test_space_is_not_counted() {
        assert_eq!(first_non_repeating("hello world"), Some('h'));
        assert_eq!(first_non_repeating("a a b"), Some('b'));
        assert_eq!(first_non_repeating(" x"), Some('x'));
    }

    #[test]
    fn test_absence() {
        assert_eq!(first_non_repeating(""), None);
        assert_eq!(first_non_repeating("   "), None);
        assert_eq!(first_non_repeating("aa"), None);
        assert_eq!(first_non_repeating("abab"), None);
        assert_eq!(first_non_repeating("zzzzzz"), None);
    }

    #[test]
    fn test_all_distinct_returns_first() {
        for s in ["a", "abc", "qwerty", "Zyx1"] {
            assert_eq!(first_non_repeating(s), s.chars().next());
        }
    }

    #[test]
    fn test_case_sensitive() {
        assert_eq!(first_non_repeating("aA"), Some('a'));
        assert_eq!(first_non_repeating("aAa"), Some('A'));
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(first_non_repeating("ééü"), Some('ü'));
        assert_eq!(first_non_repeating("資料資"), Some('料'));
    }
}
