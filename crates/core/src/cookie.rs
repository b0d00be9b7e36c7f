//! `Cookie` header parsing.

/// Look up a cookie by name in a `Cookie` header string.
///
/// Pairs are split on `;` and trimmed; the first pair starting with
/// `name=` wins and its value is percent-decoded. Returns `None` when the
/// header is empty or no pair matches. A value that is not valid UTF-8 after
/// decoding is returned as-is.
///
/// ```
/// use store_core::get_cookie;
///
/// assert_eq!(get_cookie("a=1; csrftoken=XYZ; b=2", "csrftoken").as_deref(), Some("XYZ"));
/// assert_eq!(get_cookie("a=1", "csrftoken"), None);
/// ```
#[must_use]
pub fn get_cookie(header: &str, name: &str) -> Option<String> {
    if header.is_empty() || name.is_empty() {
        return None;
    }

    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(name)?.strip_prefix('='))
        .map(|raw| {
            urlencoding::decode(raw).map_or_else(|_| raw.to_owned(), std::borrow::Cow::into_owned)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_middle_cookie() {
        assert_eq!(
            get_cookie("a=1; csrftoken=XYZ; b=2", "csrftoken").as_deref(),
            Some("XYZ")
        );
    }

    #[test]
    fn test_no_match() {
        assert_eq!(get_cookie("a=1; b=2", "csrftoken"), None);
    }

    #[test]
    fn test_empty_header() {
        assert_eq!(get_cookie("", "csrftoken"), None);
    }

    #[test]
    fn test_prefix_of_longer_name_does_not_match() {
        assert_eq!(get_cookie("csrftoken_old=1", "csrftoken"), None);
        assert_eq!(get_cookie("xcsrftoken=1", "csrftoken"), None);
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(
            get_cookie("csrftoken=first; csrftoken=second", "csrftoken").as_deref(),
            Some("first")
        );
    }

    #[test]
    fn test_value_is_percent_decoded() {
        assert_eq!(
            get_cookie("next=%2Fstore%2Fcart%2F", "next").as_deref(),
            Some("/store/cart/")
        );
    }

    #[test]
    fn test_empty_value() {
        assert_eq!(get_cookie("csrftoken=; a=1", "csrftoken").as_deref(), Some(""));
    }

    #[test]
    fn test_value_may_contain_equals() {
        assert_eq!(get_cookie("t=ab==", "t").as_deref(), Some("ab=="));
    }

    #[test]
    fn test_surrounding_whitespace_trimmed() {
        assert_eq!(get_cookie("  a=1 ;   b=2  ", "b").as_deref(), Some("2"));
    }
}
