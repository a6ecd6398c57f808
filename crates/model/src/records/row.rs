use crate::core::value::Value;
use serde::{Deserialize, Serialize};

/// A single column of a fetched row. `value` is `None` when the database
/// reported SQL NULL for the column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldValue {
    pub name: String,
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RowData {
    pub entity: String,
    pub field_values: Vec<FieldValue>,
}

impl RowData {
    pub fn new(entity: &str, field_values: Vec<FieldValue>) -> Self {
        RowData {
            entity: entity.to_string(),
            field_values,
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.field_values
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(field))
    }

    pub fn get_value(&self, field: &str) -> Value {
        self.get(field)
            .and_then(|f| f.value.clone())
            .unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::{FieldValue, RowData};
    use crate::core::value::Value;

    fn field(name: &str, value: Option<Value>) -> FieldValue {
        FieldValue {
            name: name.to_string(),
            value,
        }
    }

    #[test]
    fn test_get_is_case_insensitive() {
        let row = RowData::new("users", vec![field("Name", Some(Value::from("Foo")))]);
        assert!(row.get("name").is_some());
        assert!(row.get("NAME").is_some());
        assert!(row.get("age").is_none());
    }

    #[test]
    fn test_get_value_falls_back_to_null() {
        let row = RowData::new("users", vec![field("name", None)]);
        assert_eq!(row.get_value("name"), Value::Null);
        assert_eq!(row.get_value("missing"), Value::Null);
    }
}
