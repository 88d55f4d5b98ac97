//! Query string parsing
//!
//! Values are decoded with `application/x-www-form-urlencoded` rules
//! (`+` is a space, `%XX` escapes are expanded).

use url::form_urlencoded;

/// Return the first value for `name`, or `None` when absent
///
/// # Examples
/// ```
/// use cep_weather::http::query_param;
/// assert_eq!(query_param(Some("postalCode=01001-000"), "postalCode").as_deref(), Some("01001-000"));
/// assert_eq!(query_param(None, "postalCode"), None);
/// ```
pub fn query_param(query: Option<&str>, name: &str) -> Option<String> {
    form_urlencoded::parse(query?.as_bytes())
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_value() {
        assert_eq!(
            query_param(Some("postalCode=123.456%2D78"), "postalCode").as_deref(),
            Some("123.456-78")
        );
        assert_eq!(query_param(Some("q=S%C3%A3o+Paulo"), "q").as_deref(), Some("São Paulo"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        assert_eq!(
            query_param(Some("postalCode=11111111&postalCode=22222222"), "postalCode").as_deref(),
            Some("11111111")
        );
    }

    #[test]
    fn test_missing_parameter() {
        assert_eq!(query_param(Some("zip=12345678"), "postalCode"), None);
        assert_eq!(query_param(Some(""), "postalCode"), None);
        // names are case sensitive
        assert_eq!(query_param(Some("postalcode=12345678"), "postalCode"), None);
    }
}
