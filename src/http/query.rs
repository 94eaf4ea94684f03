//! List-pagination parameters and query-string encoding.
//!
//! Query parameters are a transport detail only: they are appended to the URL
//! after the request has been signed and never influence the signature.

use std::collections::BTreeMap;

/// Parameters accepted by list endpoints.
///
/// `filter` entries expand to `filter[key]=value` pairs on the wire.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub search: Option<String>,
    pub include: Option<String>,
    pub filter: BTreeMap<String, serde_json::Value>,
}

impl ListParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn include(mut self, include: impl Into<String>) -> Self {
        self.include = Some(include.into());
        self
    }

    pub fn filter(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.filter.insert(key.into(), value.into());
        self
    }

    /// Serialize into key/value pairs ready for [`encode_query`].
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(limit) = self.limit {
            pairs.push(("limit".to_string(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset".to_string(), offset.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(include) = &self.include {
            pairs.push(("include".to_string(), include.clone()));
        }
        for (key, value) in &self.filter {
            pairs.push((format!("filter[{}]", key), value_to_string(value)));
        }
        pairs
    }
}

/// Render a JSON value as a query-parameter value. Strings go bare (no
/// surrounding quotes); everything else uses its JSON rendering.
fn value_to_string(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Percent-encode pairs into a `k=v&k=v` query string. Empty input yields an
/// empty string.
pub fn encode_query(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_params_basic_pairs() {
        let query = ListParams::new().limit(10).offset(20).search("ann").to_query();
        assert_eq!(
            query,
            vec![
                ("limit".to_string(), "10".to_string()),
                ("offset".to_string(), "20".to_string()),
                ("search".to_string(), "ann".to_string()),
            ]
        );
    }

    #[test]
    fn test_filter_expands_bracket_keys() {
        let query = ListParams::new()
            .filter("department", "Engineering")
            .filter("active", true)
            .to_query();
        assert!(query.contains(&("filter[department]".to_string(), "Engineering".to_string())));
        assert!(query.contains(&("filter[active]".to_string(), "true".to_string())));
    }

    #[test]
    fn test_filter_string_values_are_unquoted() {
        assert_eq!(value_to_string(&json!("x")), "x");
        assert_eq!(value_to_string(&json!(7)), "7");
    }

    #[test]
    fn test_encode_query_percent_encodes() {
        let encoded = encode_query(&[
            ("filter[department]".to_string(), "R&D".to_string()),
            ("search".to_string(), "ann smith".to_string()),
        ]);
        assert_eq!(encoded, "filter%5Bdepartment%5D=R%26D&search=ann%20smith");
    }

    #[test]
    fn test_encode_query_empty() {
        assert_eq!(encode_query(&[]), "");
    }
}
