pub mod delete;
pub mod get;
pub mod post;
pub mod put;

/// Parses the `:id` path segment as a base-10 integer. Anything else is
/// answered the same way as an id that does not exist.
pub(crate) fn parse_id(raw: &str) -> Option<i32> {
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_ids_only() {
        assert_eq!(parse_id("3"), Some(3));
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("3.5"), None);
        assert_eq!(parse_id("99999999999"), None);
    }
}
