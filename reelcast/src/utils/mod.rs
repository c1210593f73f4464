pub mod explorer;

/// Truncate a display value to `max` characters with a trailing ellipsis
/// marker; shorter values pass through untouched.
pub fn shorten(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let head: String = value.chars().take(max).collect();
        format!("{head}...")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorten_truncates_only_past_the_bound() {
        assert_eq!(shorten("abcdefghij", 10), "abcdefghij");
        assert_eq!(shorten("abcdefghijk", 10), "abcdefghij...");
        assert_eq!(shorten("", 10), "");
    }
}
