//! Identifier access for records stored in a sequence.

use serde_json::Value;

/// Field holding the identifier of a JSON record.
pub const DEFAULT_ID_FIELD: &str = "_id";

/// A record that may carry an identifier.
///
/// `id` returns `None` for records without an identifier. Such records never
/// match any id, so a malformed record is skipped rather than reported.
pub trait Identified {
    type Id: PartialEq + ?Sized;

    fn id(&self) -> Option<&Self::Id>;
}

/// JSON records are identified by their `_id` field.
///
/// Non-object values and objects without `_id` have no identifier.
impl Identified for Value {
    type Id = Value;

    fn id(&self) -> Option<&Value> {
        self.get(DEFAULT_ID_FIELD)
    }
}

/// Predicate matching JSON records whose `field` equals `id` by value.
///
/// Used when records are keyed by something other than [`DEFAULT_ID_FIELD`].
pub fn field_equal<'a>(field: &'a str, id: &'a Value) -> impl Fn(&Value) -> bool + 'a {
    move |record: &Value| record.get(field) == Some(id)
}

/// Parse a command-line id: valid JSON scalars keep their type, anything else
/// is taken as a string.
///
/// `2` becomes a number and `"2"` a string, while a bare `abc` is the string
/// `abc`.
pub fn parse_id(raw: &str) -> Value {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ (Value::Number(_) | Value::String(_) | Value::Bool(_) | Value::Null)) => value,
        _ => Value::String(raw.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_record_id_reads_underscore_id() {
        let record = json!({"_id": 7, "v": "a"});
        assert_eq!(record.id(), Some(&json!(7)));
    }

    /// Records without `_id` (or that are not objects) have no identifier.
    #[test]
    fn json_record_without_id_field_has_no_id() {
        assert_eq!(json!({"id": 7}).id(), None);
        assert_eq!(json!([1, 2]).id(), None);
        assert_eq!(json!("text").id(), None);
    }

    #[test]
    fn field_equal_compares_by_value_on_custom_field() {
        let id = json!("a");
        let matches = field_equal("key", &id);
        assert!(matches(&json!({"key": "a"})));
        assert!(!matches(&json!({"key": "b"})));
        assert!(!matches(&json!({"_id": "a"})));
    }

    #[test]
    fn parse_id_keeps_json_scalars_and_falls_back_to_string() {
        assert_eq!(parse_id("2"), json!(2));
        assert_eq!(parse_id("\"2\""), json!("2"));
        assert_eq!(parse_id("abc"), json!("abc"));
        assert_eq!(parse_id("{\"a\":1}"), json!("{\"a\":1}"));
    }
}
