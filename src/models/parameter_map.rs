use std::collections::HashMap;

use crate::utils::parse_urlencoded;

/// Decoded request parameters, name to values in arrival order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParameterMap {
    values: HashMap<String, Vec<String>>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the mapping the way a servlet host does: query string first, then
    /// the form body (if any).
    pub fn from_parts(query: Option<&str>, form_body: Option<&[u8]>) -> Self {
        let mut map = Self::new();
        if let Some(q) = query {
            map.extend_urlencoded(q.as_bytes());
        }
        if let Some(body) = form_body {
            map.extend_urlencoded(body);
        }
        map
    }

    pub fn extend_urlencoded(&mut self, raw: &[u8]) {
        for (key, value) in parse_urlencoded(raw) {
            self.insert(key, value);
        }
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.entry(name.into()).or_default().push(value.into());
    }

    /// First value for `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.first()).map(String::as_str)
    }

}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ParameterMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_values_come_before_body_values() {
        let map = ParameterMap::from_parts(Some("user_id=from_query"), Some(b"user_id=from_body"));
        assert_eq!(map.get("user_id"), Some("from_query"));
        let expected: ParameterMap = [("user_id", "from_query"), ("user_id", "from_body")].into_iter().collect();
        assert_eq!(map, expected);
    }

    #[test]
    fn test_missing_name() {
        let map = ParameterMap::from_parts(Some("user_pw=secret"), None);
        assert_eq!(map.get("user_id"), None);
        assert_eq!(map.get("user_pw"), Some("secret"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let map = ParameterMap::from_parts(Some("user_id=&user_pw"), None);
        assert_eq!(map.get("user_id"), Some(""));
        assert_eq!(map.get("user_pw"), Some(""));
    }
}
