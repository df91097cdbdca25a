use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Formatter;

/// Body shape shared by every response: `{ "message": ..., "data": ... }`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(message: impl Into<String>, data: T) -> Envelope<T> {
        Envelope {
            message: message.into(),
            data,
        }
    }
}

impl Envelope<NoData> {
    pub fn empty(message: impl Into<String>) -> Envelope<NoData> {
        Envelope::new(message, NoData)
    }
}

/// Placeholder payload for operations without one. Serializes as `""`, never `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoData;

impl Serialize for NoData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

impl<'de> Deserialize<'de> for NoData {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<NoData, D::Error> {
        struct NoDataVisitor;

        impl Visitor<'_> for NoDataVisitor {
            type Value = NoData;

            fn expecting(&self, f: &mut Formatter) -> std::fmt::Result {
                write!(f, "an empty string")
            }

            fn visit_str<E: de::Error>(self, value: &str) -> Result<NoData, E> {
                if value.is_empty() {
                    Ok(NoData)
                } else {
                    Err(E::invalid_value(de::Unexpected::Str(value), &self))
                }
            }
        }

        deserializer.deserialize_str(NoDataVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn it_should_serialize_empty_data_as_empty_string() {
        let value = serde_json::to_value(Envelope::empty("Api deleted")).unwrap();
        assert_eq!(value, json!({ "message": "Api deleted", "data": "" }));
    }

    #[test]
    fn it_should_keep_data_field_for_payloads() {
        let value = serde_json::to_value(Envelope::new("ok", vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "message": "ok", "data": [1, 2] }));
    }

    #[test]
    fn it_should_reject_non_empty_string_as_no_data() {
        let result: Result<Envelope<NoData>, _> =
            serde_json::from_value(json!({ "message": "x", "data": "something" }));
        assert!(result.is_err());
    }
}
