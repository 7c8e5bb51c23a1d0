use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Custom deserializer: Baserow sends `order` as a JSON number on fields but
/// as a decimal string (e.g. "1.00000000000000000000") on rows.
fn deserialize_order<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    match value {
        Value::Number(n) => Ok(n.as_f64().unwrap_or(0.0)),
        Value::String(s) => Ok(s.parse::<f64>().unwrap_or(0.0)),
        _ => Ok(0.0),
    }
}

/// Field types Baserow can report for the columns this viewer understands.
///
/// Unrecognized type strings land on `Unknown` instead of failing the whole
/// schema fetch; every consumer matches exhaustively so `Unknown` is handled
/// as an explicit case, never a silent fall-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    Boolean,
    Date,
    Text,
    LongText,
    SingleSelect,
    MultipleSelect,
    File,
    #[serde(other)]
    Unknown,
}

/// One column definition from the schema endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Field {
    pub id: u64,
    pub name: String,
    pub table_id: u64,
    #[serde(deserialize_with = "deserialize_order", default)]
    pub order: f64,
    #[serde(default)]
    pub primary: bool,
    #[serde(rename = "type")]
    pub field_type: FieldType,
}

/// The 15 select-option colors Baserow uses (five hues, three shades each).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChoiceColor {
    #[serde(rename = "light-blue")]
    LightBlue,
    #[serde(rename = "light-green")]
    LightGreen,
    #[serde(rename = "light-orange")]
    LightOrange,
    #[serde(rename = "light-red")]
    LightRed,
    #[serde(rename = "light-gray")]
    LightGray,
    #[serde(rename = "blue")]
    Blue,
    #[serde(rename = "green")]
    Green,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "gray")]
    Gray,
    #[serde(rename = "dark-blue")]
    DarkBlue,
    #[serde(rename = "dark-green")]
    DarkGreen,
    #[serde(rename = "dark-orange")]
    DarkOrange,
    #[serde(rename = "dark-red")]
    DarkRed,
    #[serde(rename = "dark-gray")]
    DarkGray,
    #[serde(other)]
    Unknown,
}

/// One labeled, colored tag used by single/multiple select fields.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SelectOption {
    pub id: u64,
    pub value: String,
    pub color: ChoiceColor,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thumbnail {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

/// Pre-rendered thumbnail variants; `tiny` is what grid cells use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Thumbnails {
    pub card_cover: Option<Thumbnail>,
    pub tiny: Option<Thumbnail>,
    pub small: Option<Thumbnail>,
}

/// One uploaded file attached to a file-type cell.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FileAttachment {
    pub url: String,
    #[serde(default)]
    pub thumbnails: Option<Thumbnails>,
    pub visible_name: String,
    pub name: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub mime_type: String,
    #[serde(default)]
    pub is_image: bool,
    #[serde(default)]
    pub image_width: Option<u32>,
    #[serde(default)]
    pub image_height: Option<u32>,
    pub uploaded_at: DateTime<Utc>,
}

impl FileAttachment {
    /// Smallest thumbnail variant, falling back through the sizes.
    pub fn smallest_thumbnail(&self) -> Option<&Thumbnail> {
        let thumbs = self.thumbnails.as_ref()?;
        thumbs
            .tiny
            .as_ref()
            .or(thumbs.small.as_ref())
            .or(thumbs.card_cover.as_ref())
    }
}

/// One record of the remote table, keyed by field name.
///
/// The dynamic cells stay as raw JSON; [`Row::cell`] interprets one of them
/// against its owning field's type on demand.
#[derive(Debug, Clone, Deserialize)]
pub struct Row {
    pub id: u64,
    #[serde(deserialize_with = "deserialize_order", default)]
    pub order: f64,
    #[serde(flatten)]
    pub fields: IndexMap<String, Value>,
}

impl Row {
    /// Interpret this row's value for `field`. A key missing from the row is
    /// the same as an explicit null: both yield [`CellValue::Empty`].
    pub fn cell(&self, field: &Field) -> CellValue {
        CellValue::from_json(field.field_type, self.fields.get(&field.name))
    }
}

/// One page of rows as returned by the rows endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RowPage {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<Row>,
}

/// Schema plus the first page of rows for one table.
#[derive(Debug, Clone)]
pub struct TableData {
    pub fields: Vec<Field>,
    pub rows: RowPage,
}

/// A cell value interpreted against its field's type.
///
/// A value whose JSON shape does not match the field type degrades to
/// `Other` with its string form; it never becomes an error.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Bool(bool),
    Text(String),
    Select(SelectOption),
    MultiSelect(Vec<SelectOption>),
    Files(Vec<FileAttachment>),
    Other(String),
}

impl CellValue {
    pub fn from_json(field_type: FieldType, value: Option<&Value>) -> Self {
        let value = match value {
            None | Some(Value::Null) => return CellValue::Empty,
            Some(v) => v,
        };

        match field_type {
            FieldType::Boolean => match value {
                Value::Bool(b) => CellValue::Bool(*b),
                other => CellValue::Other(json_to_display(other)),
            },
            FieldType::Date | FieldType::Text | FieldType::LongText => match value {
                Value::String(s) => CellValue::Text(s.clone()),
                other => CellValue::Other(json_to_display(other)),
            },
            FieldType::SingleSelect => {
                match serde_json::from_value::<SelectOption>(value.clone()) {
                    Ok(option) => CellValue::Select(option),
                    Err(_) => CellValue::Other(json_to_display(value)),
                }
            }
            FieldType::MultipleSelect => {
                match serde_json::from_value::<Vec<SelectOption>>(value.clone()) {
                    Ok(options) => CellValue::MultiSelect(options),
                    Err(_) => CellValue::Other(json_to_display(value)),
                }
            }
            FieldType::File => match serde_json::from_value::<Vec<FileAttachment>>(value.clone()) {
                Ok(files) => CellValue::Files(files),
                Err(_) => CellValue::Other(json_to_display(value)),
            },
            FieldType::Unknown => CellValue::Other(json_to_display(value)),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// String coercion used by the sort comparator and fallback rendering.
    pub fn coerced_string(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Text(s) | CellValue::Other(s) => s.clone(),
            CellValue::Select(option) => option.value.clone(),
            CellValue::MultiSelect(options) => options
                .iter()
                .map(|o| o.value.as_str())
                .collect::<Vec<_>>()
                .join(","),
            CellValue::Files(files) => files
                .iter()
                .map(|f| f.visible_name.as_str())
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

fn json_to_display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn field_deserializes_with_numeric_order() {
        let field: Field = serde_json::from_value(json!({
            "id": 1, "name": "Name", "table_id": 5,
            "order": 0, "primary": true, "type": "text"
        }))
        .expect("field should deserialize");
        assert_eq!(field.field_type, FieldType::Text);
        assert_eq!(field.order, 0.0);
        assert!(field.primary);
    }

    #[test]
    fn unknown_field_type_does_not_fail_schema() {
        let field: Field = serde_json::from_value(json!({
            "id": 2, "name": "Formula", "table_id": 5,
            "order": 1, "primary": false, "type": "formula"
        }))
        .expect("unknown type should still deserialize");
        assert_eq!(field.field_type, FieldType::Unknown);
    }

    #[test]
    fn row_deserializes_string_order_and_flattens_cells() {
        let row: Row = serde_json::from_value(json!({
            "id": 10,
            "order": "2.00000000000000000000",
            "Name": "first",
            "Active": true
        }))
        .expect("row should deserialize");
        assert_eq!(row.order, 2.0);
        assert_eq!(row.fields.get("Name"), Some(&json!("first")));
        assert_eq!(row.fields.get("Active"), Some(&json!(true)));
    }

    #[test]
    fn missing_key_and_null_are_both_empty() {
        let field: Field = serde_json::from_value(json!({
            "id": 1, "name": "Notes", "table_id": 5,
            "order": 0, "primary": false, "type": "text"
        }))
        .expect("field should deserialize");
        let missing: Row = serde_json::from_value(json!({"id": 1, "order": 1})).unwrap();
        let explicit: Row =
            serde_json::from_value(json!({"id": 2, "order": 2, "Notes": null})).unwrap();

        assert_eq!(missing.cell(&field), CellValue::Empty);
        assert_eq!(explicit.cell(&field), CellValue::Empty);
    }

    #[test]
    fn select_cell_parses_option_with_color() {
        let value = json!({"id": 7, "value": "Urgent", "color": "dark-red"});
        let cell = CellValue::from_json(FieldType::SingleSelect, Some(&value));
        match cell {
            CellValue::Select(option) => {
                assert_eq!(option.value, "Urgent");
                assert_eq!(option.color, ChoiceColor::DarkRed);
            }
            other => panic!("expected select cell, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_color_maps_to_unknown() {
        let value = json!({"id": 7, "value": "New", "color": "dark-purple"});
        let cell = CellValue::from_json(FieldType::SingleSelect, Some(&value));
        match cell {
            CellValue::Select(option) => assert_eq!(option.color, ChoiceColor::Unknown),
            other => panic!("expected select cell, got {other:?}"),
        }
    }

    #[test]
    fn mismatched_shape_degrades_to_string_form() {
        let cell = CellValue::from_json(FieldType::Boolean, Some(&json!("yes")));
        assert_eq!(cell, CellValue::Other("yes".to_string()));

        let cell = CellValue::from_json(FieldType::SingleSelect, Some(&json!(42)));
        assert_eq!(cell, CellValue::Other("42".to_string()));
    }

    #[test]
    fn multi_select_coerces_to_comma_joined_labels() {
        let value = json!([
            {"id": 1, "value": "a", "color": "blue"},
            {"id": 2, "value": "b", "color": "green"}
        ]);
        let cell = CellValue::from_json(FieldType::MultipleSelect, Some(&value));
        assert_eq!(cell.coerced_string(), "a,b");
    }

    #[test]
    fn file_attachment_picks_smallest_thumbnail() {
        let attachment: FileAttachment = serde_json::from_value(json!({
            "url": "http://host/media/full.png",
            "thumbnails": {
                "card_cover": {"url": "http://host/media/cover.png", "width": 300, "height": 160},
                "tiny": {"url": "http://host/media/tiny.png", "width": 21, "height": 21},
                "small": {"url": "http://host/media/small.png", "width": 48, "height": 48}
            },
            "visible_name": "photo.png",
            "name": "abc123.png",
            "size": 1024,
            "mime_type": "image/png",
            "is_image": true,
            "image_width": 640,
            "image_height": 480,
            "uploaded_at": "2024-03-01T12:00:00Z"
        }))
        .expect("attachment should deserialize");

        let tiny = attachment.smallest_thumbnail().expect("tiny thumbnail");
        assert_eq!(tiny.url, "http://host/media/tiny.png");
    }
}
