// SPDX-License-Identifier: MPL-2.0
//! Appwrite query expressions.
//!
//! Appwrite list endpoints take `queries[]` parameters, each a JSON object
//! with a `method`, an optional `attribute`, and a `values` array.

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Query {
    method: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    attribute: Option<String>,
    values: Vec<Value>,
}

impl Query {
    /// Matches documents whose `attribute` equals `value`.
    #[must_use]
    pub fn equal(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            method: "equal",
            attribute: Some(attribute.into()),
            values: vec![Value::String(value.into())],
        }
    }

    /// Caps the number of returned documents.
    #[must_use]
    pub fn limit(limit: u32) -> Self {
        Self {
            method: "limit",
            attribute: None,
            values: vec![Value::from(limit)],
        }
    }

    /// Encodes the query as the JSON string Appwrite expects.
    #[must_use]
    pub fn to_param(&self) -> String {
        // Serializing a struct of strings and JSON values cannot fail.
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_query_encodes_attribute_and_value() {
        assert_eq!(
            Query::equal("category", "logo-design").to_param(),
            r#"{"method":"equal","attribute":"category","values":["logo-design"]}"#
        );
    }

    #[test]
    fn limit_query_has_no_attribute() {
        assert_eq!(
            Query::limit(100).to_param(),
            r#"{"method":"limit","values":[100]}"#
        );
    }

    #[test]
    fn values_are_json_escaped() {
        let param = Query::equal("title", "say \"hi\"").to_param();
        assert!(param.contains(r#"say \"hi\""#));
    }
}
