//! Query string encode/decode

use crate::models::{QueryValue, QueryVars};
use tracing::trace;

/// Suffix marking an array-style parameter key
pub const ARRAY_SUFFIX: &str = "[]";

/// Decode a query string into ordered query variables.
///
/// Keys ending in `[]` collect into a sequence. Any other key is last-write-wins,
/// so `a=1&a=2` yields `a = "2"`. A plain key following bracketed ones replaces
/// the sequence, and a bracketed key following a plain one starts a new
/// sequence. Pairs with an empty key are dropped.
pub fn decode_query(query: &str) -> QueryVars {
    let mut vars = QueryVars::new();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        if key.is_empty() {
            continue;
        }

        match key.strip_suffix(ARRAY_SUFFIX) {
            Some(name) if !name.is_empty() => match vars.get_mut(name) {
                Some(QueryValue::Multiple(values)) => values.push(value.into_owned()),
                _ => {
                    vars.insert(name.to_string(), QueryValue::Multiple(vec![value.into_owned()]));
                }
            },
            _ => {
                vars.insert(key.to_string(), QueryValue::Single(value.into_owned()));
            }
        }
    }

    trace!("Decoded {} query variables", vars.len());
    vars
}

/// Encode query variables into a query string (without the leading `?`).
///
/// Sequences are written as one `name[]` pair per element, so an empty
/// sequence produces no output.
pub fn encode_query(vars: &QueryVars) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());

    for (name, value) in vars {
        match value {
            QueryValue::Single(value) => {
                serializer.append_pair(name, value);
            }
            QueryValue::Multiple(values) => {
                let key = format!("{}{}", name, ARRAY_SUFFIX);
                for value in values {
                    serializer.append_pair(&key, value);
                }
            }
        }
    }

    serializer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_simple_pairs() {
        let vars = decode_query("param=value&existing=test");
        assert_eq!(vars.len(), 2);
        assert_eq!(vars["param"], "value");
        assert_eq!(vars["existing"], "test");
        assert_eq!(vars.get_index(0).map(|(k, _)| k.as_str()), Some("param"));
    }

    #[test]
    fn test_decode_bracketed_keys() {
        let vars = decode_query("arr[]=one&arr%5B%5D=two&x=1");
        assert_eq!(vars["arr"], ["one", "two"]);
        assert_eq!(vars["x"], "1");
    }

    #[test]
    fn test_decode_last_write_wins() {
        assert_eq!(decode_query("a=1&a=2")["a"], "2");
        assert_eq!(decode_query("a[]=1&a=2")["a"], "2");
        assert_eq!(decode_query("a=1&a[]=2")["a"], ["2"]);
    }

    #[test]
    fn test_decode_percent_and_plus() {
        let vars = decode_query("q=hello+world&r=a%26b&flag");
        assert_eq!(vars["q"], "hello world");
        assert_eq!(vars["r"], "a&b");
        assert_eq!(vars["flag"], "");
    }

    #[test]
    fn test_decode_drops_empty_keys() {
        let vars = decode_query("=orphan&&k=v");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars["k"], "v");
    }

    #[test]
    fn test_encode_sequences_decode_back() {
        let mut vars = QueryVars::new();
        vars.insert("arr".to_string(), QueryValue::from(["one", "two"]));
        vars.insert("q".to_string(), QueryValue::from("a b"));

        let encoded = encode_query(&vars);
        assert_eq!(encoded, "arr%5B%5D=one&arr%5B%5D=two&q=a+b");
        assert_eq!(decode_query(&encoded), vars);
    }

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode_query(&QueryVars::new()), "");

        let mut vars = QueryVars::new();
        vars.insert("none".to_string(), QueryValue::Multiple(Vec::new()));
        assert_eq!(encode_query(&vars), "");
    }
}
