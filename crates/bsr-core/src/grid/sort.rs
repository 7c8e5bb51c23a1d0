//! Null-last sort comparator for grid columns.

use crate::api::models::CellValue;
use std::cmp::Ordering;

/// Compare two cell values of the same column.
///
/// Total preorder with an explicit null policy: two empty cells are equal,
/// an empty cell sorts after any present one, and two present cells compare
/// by the column's type-specific key (select label, comma-joined labels for
/// multiple select, string-coerced value otherwise).
pub fn compare_cells(a: &CellValue, b: &CellValue) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => compare_strings(&a.coerced_string(), &b.coerced_string()),
    }
}

/// Case-insensitive Unicode ordering with a case-sensitive tiebreak. This
/// stands in for the browser's locale-aware compare; it is still total.
fn compare_strings(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{ChoiceColor, SelectOption};

    fn option(value: &str) -> SelectOption {
        SelectOption {
            id: 1,
            value: value.to_string(),
            color: ChoiceColor::Blue,
        }
    }

    #[test]
    fn two_empty_cells_are_equal() {
        assert_eq!(
            compare_cells(&CellValue::Empty, &CellValue::Empty),
            Ordering::Equal
        );
    }

    #[test]
    fn empty_sorts_after_any_present_value() {
        let present = CellValue::Text("zzz".to_string());
        assert_eq!(compare_cells(&present, &CellValue::Empty), Ordering::Less);
        assert_eq!(
            compare_cells(&CellValue::Empty, &present),
            Ordering::Greater
        );
    }

    #[test]
    fn single_select_compares_by_label() {
        let a = CellValue::Select(option("alpha"));
        let b = CellValue::Select(option("beta"));
        assert_eq!(compare_cells(&a, &b), Ordering::Less);
    }

    #[test]
    fn multi_select_matches_comma_joined_label_ordering() {
        let ab = CellValue::MultiSelect(vec![option("a"), option("b")]);
        let ac = CellValue::MultiSelect(vec![option("a"), option("c")]);
        let single_a = CellValue::MultiSelect(vec![option("a")]);

        assert_eq!(compare_cells(&ab, &ac), Ordering::Less);
        // "a" < "a,b": the joined string decides, not per-element length rules.
        assert_eq!(compare_cells(&single_a, &ab), Ordering::Less);
        assert_eq!(
            compare_cells(&ab, &ac),
            compare_strings("a,b", "a,c")
        );
    }

    #[test]
    fn other_types_compare_by_string_coercion() {
        let yes = CellValue::Bool(true);
        let no = CellValue::Bool(false);
        // "false" < "true" under string ordering.
        assert_eq!(compare_cells(&no, &yes), Ordering::Less);
    }

    #[test]
    fn string_ordering_is_case_insensitive_with_tiebreak() {
        assert_eq!(compare_strings("apple", "Banana"), Ordering::Less);
        assert_ne!(compare_strings("Apple", "apple"), Ordering::Equal);
        assert_eq!(compare_strings("same", "same"), Ordering::Equal);
    }
}
