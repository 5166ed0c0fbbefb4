//! Record field access for the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One field value read from a record.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing or explicitly null field.
    #[default]
    Null,
    /// Boolean field.
    Bool(bool),
    /// Numeric field.
    Number(f64),
    /// Text field.
    Text(String),
    /// Nested array or object, kept as its JSON text.
    Composite(String),
}

impl CellValue {
    /// String form scanned by the search filter.
    ///
    /// Null cells return `None` and never match a query.
    pub fn search_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(value) => Some(value.to_string()),
            Self::Number(value) => Some(format_number(*value)),
            Self::Text(value) | Self::Composite(value) => Some(value.clone()),
        }
    }

    /// String form rendered in table cells. Null cells render empty.
    pub fn display_text(&self) -> String {
        self.search_text().unwrap_or_default()
    }

    /// Returns the text payload when this is a [`CellValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }

    /// Returns `true` for [`CellValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|value| Self::from(&value))
    }
}

impl From<&Value> for CellValue {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(value) => Self::Bool(*value),
            Value::Number(number) => number
                .as_f64()
                .map(Self::Number)
                .unwrap_or_else(|| Self::Text(number.to_string())),
            Value::String(value) => Self::Text(value.clone()),
            Value::Array(_) | Value::Object(_) => Self::Composite(value.to_string()),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T> From<Option<T>> for CellValue
where
    T: Into<CellValue>,
{
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(Self::Null)
    }
}

/// A uniformly-shaped row whose fields are read by name.
///
/// Implement this for domain row types so they can flow through the pipeline without first being
/// converted into maps.
pub trait TableRecord {
    /// Reads one field. Missing fields read as [`CellValue::Null`].
    fn cell(&self, field: &str) -> CellValue;

    /// Reads every field of the record, in the record's own field order.
    fn cells(&self) -> Vec<CellValue>;
}

impl<R> TableRecord for &R
where
    R: TableRecord + ?Sized,
{
    fn cell(&self, field: &str) -> CellValue {
        (**self).cell(field)
    }

    fn cells(&self) -> Vec<CellValue> {
        (**self).cells()
    }
}

impl TableRecord for Map<String, Value> {
    fn cell(&self, field: &str) -> CellValue {
        self.get(field).map(CellValue::from).unwrap_or_default()
    }

    fn cells(&self) -> Vec<CellValue> {
        self.values().map(CellValue::from).collect()
    }
}

impl TableRecord for Value {
    fn cell(&self, field: &str) -> CellValue {
        match self {
            Value::Object(map) => map.cell(field),
            _ => CellValue::Null,
        }
    }

    fn cells(&self) -> Vec<CellValue> {
        match self {
            Value::Object(map) => map.cells(),
            _ => Vec::new(),
        }
    }
}

impl TableRecord for BTreeMap<String, CellValue> {
    fn cell(&self, field: &str) -> CellValue {
        self.get(field).cloned().unwrap_or_default()
    }

    fn cells(&self) -> Vec<CellValue> {
        self.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn json_values_map_to_cells() {
        let row = json!({
            "name": "Amy",
            "age": 31,
            "ratio": 0.5,
            "active": true,
            "tags": ["a", "b"],
            "manager": null,
        });

        assert_eq!(row.cell("name"), CellValue::Text("Amy".to_string()));
        assert_eq!(row.cell("age"), CellValue::Number(31.0));
        assert_eq!(row.cell("active"), CellValue::Bool(true));
        assert_eq!(
            row.cell("tags"),
            CellValue::Composite("[\"a\",\"b\"]".to_string())
        );
        assert_eq!(row.cell("manager"), CellValue::Null);
        assert_eq!(row.cell("missing"), CellValue::Null);
        assert_eq!(row.cells().len(), 6);
    }

    #[test]
    fn non_object_values_have_no_fields() {
        let row = json!("just text");
        assert_eq!(row.cell("name"), CellValue::Null);
        assert!(row.cells().is_empty());
    }

    #[test]
    fn numbers_render_without_trailing_fraction() {
        assert_eq!(CellValue::Number(3.0).display_text(), "3");
        assert_eq!(CellValue::Number(-12.0).display_text(), "-12");
        assert_eq!(CellValue::Number(2.5).display_text(), "2.5");
        assert_eq!(CellValue::Number(f64::NAN).display_text(), "NaN");
    }

    #[test]
    fn null_cells_are_skipped_by_search_and_render_empty() {
        assert_eq!(CellValue::Null.search_text(), None);
        assert_eq!(CellValue::Null.display_text(), "");
    }

    #[test]
    fn btree_rows_deserialize_from_json() {
        let row: BTreeMap<String, CellValue> =
            serde_json::from_str(r#"{"name":"Al","score":7,"ok":false,"note":null,"tags":[1]}"#)
                .expect("deserialize row");

        assert_eq!(row.cell("name"), CellValue::from("Al"));
        assert_eq!(row.cell("score"), CellValue::Number(7.0));
        assert_eq!(row.cell("ok"), CellValue::Bool(false));
        assert_eq!(row.cell("note"), CellValue::Null);
        assert_eq!(row.cell("tags"), CellValue::Composite("[1]".to_string()));
    }
}
