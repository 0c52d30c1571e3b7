use serde::{Deserialize, Deserializer};

/// Schemes a stored URL may already carry
const KNOWN_SCHEMES: &[&str] = &["http://", "https://"];

/// Prefix `http://` unless the URL already starts with `http://` or `https://`.
///
/// The scheme match is case-sensitive. Nothing else about the URL is checked
/// or rewritten.
pub fn normalize_url(url: &str) -> String {
    if KNOWN_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        url.to_string()
    } else {
        format!("http://{}", url)
    }
}

/// Deserialize an optional integer query parameter, treating `?key=` as absent
pub fn empty_string_as_none<'de, D>(de: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<i64>().map(Some).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_url_adds_http() {
        assert_eq!(normalize_url("example.com"), "http://example.com");
        assert_eq!(normalize_url("example.com/a?b=c"), "http://example.com/a?b=c");
    }

    #[test]
    fn test_normalize_url_keeps_known_schemes() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
        assert_eq!(normalize_url("http://example.com"), "http://example.com");
    }

    #[test]
    fn test_normalize_url_scheme_match_is_case_sensitive() {
        assert_eq!(normalize_url("HTTPS://example.com"), "http://HTTPS://example.com");
        assert_eq!(normalize_url("Http://example.com"), "http://Http://example.com");
    }

    #[test]
    fn test_normalize_url_other_schemes_get_prefixed() {
        assert_eq!(normalize_url("ftp://example.com"), "http://ftp://example.com");
        assert_eq!(normalize_url("http:/typo.com"), "http://http:/typo.com");
    }

    #[test]
    fn test_normalize_url_multibyte_input() {
        assert_eq!(normalize_url("ünï.example"), "http://ünï.example");
        assert_eq!(normalize_url("日本"), "http://日本");
    }

    #[derive(Debug, Deserialize)]
    struct Params {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        category_id: Option<i64>,
    }

    #[test]
    fn test_empty_string_as_none() {
        let parse = |q: &str| serde_json::from_str::<Params>(q).map(|p| p.category_id);

        assert_eq!(parse(r#"{}"#).unwrap(), None);
        assert_eq!(parse(r#"{"category_id": ""}"#).unwrap(), None);
        assert_eq!(parse(r#"{"category_id": "5"}"#).unwrap(), Some(5));
        assert!(parse(r#"{"category_id": "five"}"#).is_err());
    }
}
