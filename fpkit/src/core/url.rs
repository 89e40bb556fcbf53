//! URL slicing and a raw query-string codec.
//!
//! Query strings are split on `&` and `=` without percent decoding, and
//! encoded back the same way. Keys keep the order in which they first appear.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

static QUERY_PAIR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^(?|#)=&]+)(=([^&]*))?").expect("query pair regex"));

/// Value stored under a query key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum QueryValue {
    /// Key present without `=`, or explicitly unset by a caller.
    Absent,
    Text(String),
    /// Encoded as a comma-separated list.
    List(Vec<String>),
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::Text(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::Text(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(values: Vec<String>) -> Self {
        QueryValue::List(values)
    }
}

/// Insertion-ordered query parameters.
///
/// Re-inserting a key replaces its value but keeps its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, QueryValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        let key = key.into();
        let value = value.into();
        let existing = self.entries.iter_mut().find(|(name, _)| *name == key);
        match existing {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy of `self` with every entry of `overrides` inserted on top.
    pub fn assign(&self, overrides: &QueryParams) -> QueryParams {
        let mut merged = self.clone();
        for (key, value) in overrides.iter() {
            merged.insert(key, value.clone());
        }
        merged
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Host part of `url`: the text after `://` up to the next `/`.
///
/// A URL without a scheme is read from the start; one without a path runs to
/// the end.
pub fn get_hostname(url: &str) -> &str {
    let start = url.find("://").map_or(0, |idx| idx + 3);
    let rest = &url[start..];
    match rest.find('/') {
        Some(end) => &rest[..end],
        None => rest,
    }
}

/// Scheme of `url` including the `://` separator, or `""` if there is none.
pub fn get_protocol(url: &str) -> &str {
    url.find("://").map_or("", |idx| &url[..idx + 3])
}

/// Parse the query parameters of `url`.
///
/// Everything after the first `?` is scanned (the whole string if there is no
/// `?`). A key without `=` maps to [`QueryValue::Absent`]; a later duplicate
/// key overwrites an earlier one.
pub fn get_query_params(url: &str) -> QueryParams {
    let query = url.find('?').map_or(url, |idx| &url[idx + 1..]);
    let mut params = QueryParams::new();
    for caps in QUERY_PAIR_RE.captures_iter(query) {
        let key = &caps[1];
        let value = match caps.get(3) {
            Some(value) => QueryValue::Text(value.as_str().to_string()),
            None => QueryValue::Absent,
        };
        params.insert(key, value);
    }
    params
}

/// Encode `params` as `key=value` pairs joined by `&`.
///
/// Absent values are skipped, empty strings are kept as `key=`, and lists are
/// joined with `,`.
pub fn query_obj_to_str(params: &QueryParams) -> String {
    params
        .iter()
        .filter_map(|(key, value)| match value {
            QueryValue::Absent => None,
            QueryValue::Text(text) => Some(format!("{key}={text}")),
            QueryValue::List(items) => Some(format!("{key}={}", items.join(","))),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_product_params() -> QueryParams {
        [
            ("method", "getSellerProductDetail"),
            ("prdNo", "2228972569"),
            ("trTypeCd", "22"),
            ("trCtgrNo", "895019"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn get_query_params_parses_absolute_url() {
        let url = "http://www.11st.co.kr/product/SellerProductDetail.tmall?method=getSellerProductDetail&prdNo=2228972569&trTypeCd=22&trCtgrNo=895019";
        assert_eq!(get_query_params(url), expected_product_params());
    }

    #[test]
    fn get_query_params_parses_relative_url() {
        let url = "/product/SellerProductDetail.tmall?method=getSellerProductDetail&prdNo=2228972569&trTypeCd=22&trCtgrNo=895019";
        assert_eq!(get_query_params(url), expected_product_params());
    }

    #[test]
    fn get_query_params_keeps_raw_values_and_flags() {
        let params = get_query_params("?q=a%20b&flag&empty=&q=c");
        assert_eq!(params.get("q"), Some(&QueryValue::from("c")));
        assert_eq!(params.get("flag"), Some(&QueryValue::Absent));
        assert_eq!(params.get("empty"), Some(&QueryValue::from("")));
        let keys: Vec<&str> = params.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["q", "flag", "empty"]);
    }

    #[test]
    fn query_obj_to_str_skips_absent_and_keeps_empty() {
        let params: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        assert_eq!(query_obj_to_str(&params), "a=1&b=2");

        let mut with_absent = QueryParams::new();
        with_absent.insert("a", "1");
        with_absent.insert("b", QueryValue::Absent);
        assert_eq!(query_obj_to_str(&with_absent), "a=1");

        let with_empty: QueryParams = [("a", "1"), ("b", "")].into_iter().collect();
        assert_eq!(query_obj_to_str(&with_empty), "a=1&b=");
    }

    #[test]
    fn query_obj_to_str_joins_lists_with_commas() {
        let mut params = QueryParams::new();
        params.insert("tags", vec!["x".to_string(), "y".to_string()]);
        params.insert("page", "2");
        assert_eq!(query_obj_to_str(&params), "tags=x,y&page=2");
    }

    #[test]
    fn assign_overrides_in_place_and_appends_new_keys() {
        let base: QueryParams = [("a", "1"), ("b", "2")].into_iter().collect();
        let overrides: QueryParams = [("b", "9"), ("c", "3")].into_iter().collect();
        let merged = base.assign(&overrides);
        assert_eq!(query_obj_to_str(&merged), "a=1&b=9&c=3");
        assert_eq!(query_obj_to_str(&base), "a=1&b=2");
    }

    #[test]
    fn query_params_serialize_as_json_object() {
        let params = get_query_params("?a=1&flag");
        let json = serde_json::to_string(&params).expect("serialize");
        assert_eq!(json, r#"{"a":"1","flag":null}"#);
    }

    #[test]
    fn get_hostname_returns_host() {
        assert_eq!(get_hostname("https://naver.com"), "naver.com");
        assert_eq!(
            get_hostname("https://news.v.daum.net/v/20200613000613325"),
            "news.v.daum.net"
        );
        assert_eq!(get_hostname("example.com/path"), "example.com");
    }

    #[test]
    fn get_protocol_includes_separator() {
        assert_eq!(get_protocol("https://naver.com"), "https://");
        assert_eq!(get_protocol("ftp://files/a"), "ftp://");
        assert_eq!(get_protocol("naver.com"), "");
    }
}
