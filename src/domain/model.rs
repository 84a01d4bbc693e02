use crate::utils::error::{CleanError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One element of the `results` array. Keys keep their source order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    pub data: Map<String, Value>,
}

impl From<Map<String, Value>> for Record {
    fn from(data: Map<String, Value>) -> Self {
        Self { data }
    }
}

impl Record {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.data.contains_key(key)
    }
}

/// The parsed input file.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Value,
}

impl Document {
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let root: Value = serde_json::from_slice(bytes)?;
        Ok(Self { root })
    }

    /// Pulls the records out of `field`. A missing or `null` field yields no
    /// records; anything other than an array of objects is a shape error.
    pub fn into_results(self, field: &str) -> Result<Vec<Record>> {
        let mut root = match self.root {
            Value::Object(map) => map,
            other => return Err(CleanError::shape("document", "an object", &other)),
        };

        let items = match root.remove(field) {
            // only absent or null count as empty; `false`, `0` and `""` are shape errors
            None | Some(Value::Null) => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(other) => return Err(CleanError::shape(field, "an array", &other)),
        };

        items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(data) => Ok(Record { data }),
                other => Err(CleanError::shape(
                    format!("{}[{}]", field, index),
                    "an object",
                    &other,
                )),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TransformResult {
    pub processed_records: Vec<Record>,
    pub omitted_count: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        Document::from_slice(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_from_slice_rejects_invalid_json() {
        let err = Document::from_slice(b"{\"results\": [").unwrap_err();
        assert!(matches!(err, CleanError::ParseError(_)));
    }

    #[test]
    fn test_missing_results_is_empty() {
        assert!(doc(json!({})).into_results("results").unwrap().is_empty());
    }

    #[test]
    fn test_null_results_is_empty() {
        let records = doc(json!({"results": null})).into_results("results").unwrap();
        assert!(records.is_empty());
    }

    #[test]
    fn test_results_keep_order() {
        let records = doc(json!({"results": [{"id": 1}, {"id": 2}, {"id": 3}]}))
            .into_results("results")
            .unwrap();
        let ids: Vec<_> = records.iter().map(|r| r.data["id"].clone()).collect();
        assert_eq!(ids, vec![json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn test_non_array_results_is_shape_error() {
        let err = doc(json!({"results": "nope"})).into_results("results").unwrap_err();
        match err {
            CleanError::ShapeError { field, found, .. } => {
                assert_eq!(field, "results");
                assert_eq!(found, "a string");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_falsy_results_are_shape_errors() {
        for value in [json!(false), json!(0), json!("")] {
            let err = doc(json!({ "results": value })).into_results("results").unwrap_err();
            assert!(matches!(err, CleanError::ShapeError { ref field, .. } if field == "results"));
        }
    }

    #[test]
    fn test_non_object_element_reports_index() {
        let err = doc(json!({"results": [{"id": 1}, 42]}))
            .into_results("results")
            .unwrap_err();
        match err {
            CleanError::ShapeError { field, .. } => assert_eq!(field, "results[1]"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_document_is_shape_error() {
        let err = doc(json!([1, 2])).into_results("results").unwrap_err();
        assert!(matches!(err, CleanError::ShapeError { .. }));
    }

    #[test]
    fn test_record_serializes_as_plain_object() {
        let record = Record::from(json!({"b": 1, "a": 2}).as_object().unwrap().clone());
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"b":1,"a":2}"#);
    }
}
