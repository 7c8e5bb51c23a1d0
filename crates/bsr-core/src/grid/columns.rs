//! Schema-to-column mapping.

use crate::api::models::{Field, FieldType};

/// Minimum width in the remote UI's pixel units, by field type.
///
/// `Unknown` has no documented minimum; callers must handle `None`
/// explicitly rather than rely on a default.
pub fn min_width(field_type: FieldType) -> Option<u16> {
    match field_type {
        FieldType::Boolean => Some(40),
        FieldType::Date => Some(80),
        FieldType::Text => Some(120),
        FieldType::LongText => Some(240),
        FieldType::SingleSelect => Some(180),
        FieldType::MultipleSelect => Some(180),
        FieldType::File => Some(80),
        FieldType::Unknown => None,
    }
}

/// Only long-text columns absorb leftover width; everything else is fixed.
pub fn is_flex(field_type: FieldType) -> bool {
    matches!(field_type, FieldType::LongText)
}

/// Pixel units per terminal character cell, used to scale the documented
/// widths onto a character grid.
const PX_PER_CELL: u16 = 8;

/// One grid column derived from a schema field.
#[derive(Debug, Clone)]
pub struct ColumnSpec {
    pub field: Field,
    pub min_width: Option<u16>,
    pub flex: bool,
}

impl ColumnSpec {
    pub fn new(field: Field) -> Self {
        let min_width = min_width(field.field_type);
        let flex = is_flex(field.field_type);
        ColumnSpec {
            field,
            min_width,
            flex,
        }
    }

    /// Width of this column in terminal cells. Columns without a documented
    /// minimum get the plain-text width.
    pub fn terminal_width(&self) -> u16 {
        let px = self
            .min_width
            .unwrap_or_else(|| min_width(FieldType::Text).unwrap_or(120));
        (px / PX_PER_CELL).max(4)
    }
}

/// Map the schema array to column specs. Schema order defines column order.
pub fn build_columns(fields: &[Field]) -> Vec<ColumnSpec> {
    fields.iter().cloned().map(ColumnSpec::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn field(name: &str, field_type: &str) -> Field {
        serde_json::from_value(json!({
            "id": 1, "name": name, "table_id": 5,
            "order": 0, "primary": false, "type": field_type
        }))
        .expect("field should deserialize")
    }

    #[test]
    fn min_widths_match_documented_constants() {
        assert_eq!(min_width(FieldType::Boolean), Some(40));
        assert_eq!(min_width(FieldType::Date), Some(80));
        assert_eq!(min_width(FieldType::Text), Some(120));
        assert_eq!(min_width(FieldType::LongText), Some(240));
        assert_eq!(min_width(FieldType::SingleSelect), Some(180));
        assert_eq!(min_width(FieldType::MultipleSelect), Some(180));
        assert_eq!(min_width(FieldType::File), Some(80));
    }

    #[test]
    fn unknown_type_has_no_minimum() {
        assert_eq!(min_width(FieldType::Unknown), None);
    }

    #[test]
    fn only_long_text_is_flexible() {
        assert!(is_flex(FieldType::LongText));
        assert!(!is_flex(FieldType::Text));
        assert!(!is_flex(FieldType::MultipleSelect));
    }

    #[test]
    fn columns_preserve_schema_order() {
        let fields = vec![field("B", "boolean"), field("A", "long_text")];
        let columns = build_columns(&fields);
        assert_eq!(columns[0].field.name, "B");
        assert!(!columns[0].flex);
        assert_eq!(columns[1].field.name, "A");
        assert!(columns[1].flex);
    }

    #[test]
    fn unknown_column_falls_back_to_text_width() {
        let spec = ColumnSpec::new(field("X", "formula"));
        assert_eq!(spec.min_width, None);
        assert_eq!(spec.terminal_width(), 120 / 8);
    }
}
