//! Raw and flat parameter maps, and their query-string form.
//!
//! A raw map is what the decoder reads (URL query or persisted blob); a flat
//! map is what the encoder produces for the backend list/search API. Both are
//! string-keyed and insertion-ordered; values are a string, a list of strings
//! (the key appeared more than once), or some other JSON value that is only
//! passed through (e.g. a numeric `limit`).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sift_core::Result;
use url::form_urlencoded;

/// A parameter value as it crosses the URL / storage / API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
    Json(Value),
}

impl ParamValue {
    /// Normalize to the list of raw occurrences the decoder consumes.
    ///
    /// Scalars become one element. JSON numbers and booleans use their text;
    /// nulls and objects contribute nothing.
    pub fn occurrences(&self) -> Vec<String> {
        match self {
            ParamValue::Single(s) => vec![s.clone()],
            ParamValue::Multiple(values) => values.clone(),
            ParamValue::Json(Value::Array(values)) => {
                values.iter().filter_map(json_scalar_text).collect()
            }
            ParamValue::Json(value) => json_scalar_text(value).into_iter().collect(),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(s: &str) -> Self {
        ParamValue::Single(s.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(s: String) -> Self {
        ParamValue::Single(s)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        ParamValue::Multiple(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        ParamValue::Multiple(values.into_iter().map(str::to_string).collect())
    }
}

fn json_scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Decoder input.
pub type RawParams = IndexMap<String, ParamValue>;

/// Encoder output.
pub type FlatParams = IndexMap<String, ParamValue>;

/// Parse a URL query string. Repeated keys collect into `Multiple` in order.
pub fn parse_query(query: &str) -> RawParams {
    let query = query.strip_prefix('?').unwrap_or(query);
    let mut occurrences: IndexMap<String, Vec<String>> = IndexMap::new();
    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        occurrences
            .entry(key.into_owned())
            .or_default()
            .push(value.into_owned());
    }
    occurrences
        .into_iter()
        .map(|(key, mut values)| {
            let value = if values.len() == 1 {
                ParamValue::Single(values.remove(0))
            } else {
                ParamValue::Multiple(values)
            };
            (key, value)
        })
        .collect()
}

/// Serialize for a GET request: lists become repeated keys.
pub fn to_query_string(params: &FlatParams) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, value) in params {
        match value {
            ParamValue::Single(s) => {
                serializer.append_pair(key, s);
            }
            ParamValue::Multiple(values) => {
                for v in values {
                    serializer.append_pair(key, v);
                }
            }
            ParamValue::Json(Value::Null) => {}
            ParamValue::Json(Value::String(s)) => {
                serializer.append_pair(key, s);
            }
            ParamValue::Json(Value::Array(values)) => {
                for v in values.iter().filter_map(json_scalar_text) {
                    serializer.append_pair(key, &v);
                }
            }
            ParamValue::Json(other) => {
                serializer.append_pair(key, &other.to_string());
            }
        }
    }
    serializer.finish()
}

/// Parse a persisted raw-parameter blob (a JSON object).
pub fn parse_params_json(json: &str) -> Result<RawParams> {
    Ok(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_collect_in_order() {
        let params = parse_query("?tags=a,b&owner=none&tags=c");
        assert_eq!(params["tags"], ParamValue::from(vec!["a,b", "c"]));
        assert_eq!(params["owner"], ParamValue::from("none"));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["tags", "owner"]);
    }

    #[test]
    fn three_occurrences_stay_in_order() {
        let params = parse_query("status=new&status=closed&status=in_progress");
        assert_eq!(
            params["status"],
            ParamValue::from(vec!["new", "closed", "in_progress"])
        );
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn query_values_are_percent_decoded() {
        let params = parse_query("observables=ipv4%7C10.0.0.1&title=failed+login");
        assert_eq!(params["observables"], ParamValue::from("ipv4|10.0.0.1"));
        assert_eq!(params["title"], ParamValue::from("failed login"));
    }

    #[test]
    fn lists_serialize_as_repeated_keys() {
        let mut params = FlatParams::new();
        params.insert("limit".to_string(), ParamValue::Json(serde_json::json!(10)));
        params.insert("tags".to_string(), ParamValue::from(vec!["a,b", "c"]));
        assert_eq!(to_query_string(&params), "limit=10&tags=a%2Cb&tags=c");
    }

    #[test]
    fn json_blob_keeps_shapes() {
        let params =
            parse_params_json(r#"{"title": "x", "tags": ["a", "b"], "limit": 25}"#).unwrap();
        assert_eq!(params["title"], ParamValue::from("x"));
        assert_eq!(params["tags"], ParamValue::from(vec!["a", "b"]));
        assert_eq!(params["limit"], ParamValue::Json(serde_json::json!(25)));
        assert_eq!(params["limit"].occurrences(), vec!["25".to_string()]);
    }

    #[test]
    fn null_and_objects_have_no_occurrences() {
        assert!(ParamValue::Json(Value::Null).occurrences().is_empty());
        assert!(ParamValue::Json(serde_json::json!({"a": 1}))
            .occurrences()
            .is_empty());
    }

    #[test]
    fn invalid_blob_is_an_error() {
        assert!(parse_params_json("[1, 2").is_err());
    }
}
