//! Typing animation: text appears one character at a time.

/// Characters visible `now` for a text that started typing at `started_at`.
///
/// The first character shows immediately, then one more every
/// `ms_per_char`. A non-positive speed shows everything at once.
pub fn visible_chars(len: usize, started_at: f64, now: f64, ms_per_char: f64) -> usize {
    if len == 0 || now < started_at {
        return 0;
    }
    if ms_per_char <= 0.0 {
        return len;
    }
    let typed = ((now - started_at) / ms_per_char).floor() as usize + 1;
    typed.min(len)
}

/// The visible prefix of `text`, always cut on a char boundary.
pub fn typed_prefix(text: &str, started_at: f64, now: f64, ms_per_char: f64) -> &str {
    let n = visible_chars(text.chars().count(), started_at, now, ms_per_char);
    match text.char_indices().nth(n) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

pub fn is_complete(text: &str, started_at: f64, now: f64, ms_per_char: f64) -> bool {
    typed_prefix(text, started_at, now, ms_per_char).len() == text.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn types_one_char_per_interval() {
        let text = "Hello";
        assert_eq!(typed_prefix(text, 1_000.0, 999.0, 100.0), "");
        assert_eq!(typed_prefix(text, 1_000.0, 1_000.0, 100.0), "H");
        assert_eq!(typed_prefix(text, 1_000.0, 1_099.0, 100.0), "H");
        assert_eq!(typed_prefix(text, 1_000.0, 1_100.0, 100.0), "He");
        assert_eq!(typed_prefix(text, 1_000.0, 1_400.0, 100.0), "Hello");
        assert_eq!(typed_prefix(text, 1_000.0, 9_000.0, 100.0), "Hello");
        assert!(is_complete(text, 1_000.0, 1_400.0, 100.0));
        assert!(!is_complete(text, 1_000.0, 1_300.0, 100.0));
    }

    #[test]
    fn respects_multibyte_boundaries() {
        let text = "café ☕";
        assert_eq!(typed_prefix(text, 0.0, 300.0, 100.0), "café");
        assert_eq!(typed_prefix(text, 0.0, 500.0, 100.0), "café ☕");
    }

    #[test]
    fn empty_text_and_instant_speed() {
        assert_eq!(typed_prefix("", 0.0, 1_000.0, 100.0), "");
        assert!(is_complete("", 0.0, 0.0, 100.0));
        assert_eq!(typed_prefix("abc", 0.0, 0.0, 0.0), "abc");
    }
}
