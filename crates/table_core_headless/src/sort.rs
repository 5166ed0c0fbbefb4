use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::record::{CellValue, TableRecord};

/// Sort direction for a table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

impl SortDirection {
    /// `1` for ascending, `-1` for descending.
    pub fn sign(self) -> i8 {
        match self {
            Self::Asc => 1,
            Self::Desc => -1,
        }
    }

    /// The opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Stable token used for `aria-sort` style attributes and config files.
    pub fn token(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Field and direction the pipeline orders by.
///
/// `field == None` keeps the filter order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct SortSpec {
    /// Field name to sort by.
    pub field: Option<String>,
    /// Sort direction.
    pub direction: SortDirection,
}

impl SortSpec {
    /// Sort by `field` in `direction`.
    pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: Some(field.into()),
            direction,
        }
    }

    /// Returns `true` when `field` is the active sort field.
    pub fn is_sorted_by(&self, field: &str) -> bool {
        self.field.as_deref() == Some(field)
    }
}

/// Collation used for text cells.
///
/// Strings compare in three passes: base letters with accents and case removed, then accents,
/// then case (lower case first). `"Ábaco"` sorts before `"bravo"`, and `"eagle"` before
/// `"éclair"`.
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

/// Canonically decomposed, lower-cased characters of `text`.
fn folded(text: &str) -> impl Iterator<Item = char> + '_ {
    text.nfd().flat_map(char::to_lowercase)
}

fn base_letters(text: &str) -> impl Iterator<Item = char> + '_ {
    folded(text).filter(|ch| !is_combining_mark(*ch))
}

/// Compares two cells for `direction`.
///
/// Text pairs use [`locale_compare`]. Other pairs of the same kind use `<`/`>`, with NaN placed
/// after every other number. Mixed kinds fall back to a fixed kind order (booleans, numbers, text,
/// composites, then nulls) so the comparator stays a total order; the resulting placement of
/// mixed-kind columns is best-effort.
pub fn compare_cells(a: &CellValue, b: &CellValue, direction: SortDirection) -> Ordering {
    let ordering = match (a, b) {
        (CellValue::Text(a), CellValue::Text(b)) => locale_compare(a, b),
        (CellValue::Number(a), CellValue::Number(b)) => compare_numbers(*a, *b),
        (CellValue::Bool(a), CellValue::Bool(b)) => a.cmp(b),
        (CellValue::Composite(a), CellValue::Composite(b)) => a.cmp(b),
        _ => kind_rank(a).cmp(&kind_rank(b)),
    };
    direction.apply(ordering)
}

fn compare_numbers(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.partial_cmp(&b).unwrap_or(Ordering::Equal),
    }
}

fn kind_rank(cell: &CellValue) -> u8 {
    match cell {
        CellValue::Bool(_) => 0,
        CellValue::Number(_) => 1,
        CellValue::Text(_) => 2,
        CellValue::Composite(_) => 3,
        CellValue::Null => 4,
    }
}

/// Orders `records` by `field`, returning a new sequence. The input is not modified.
///
/// The sort is stable: records with equal keys keep their relative order. `field == None`
/// returns the records in their existing order.
pub fn sort_records<T>(records: &[T], field: Option<&str>, direction: SortDirection) -> Vec<T>
where
    T: TableRecord + Clone,
{
    let mut sorted = records.to_vec();
    let Some(field) = field else {
        return sorted;
    };

    let keys: Vec<CellValue> = records.iter().map(|record| record.cell(field)).collect();
    let mut order: Vec<usize> = (0..records.len()).collect();
    order.sort_by(|&a, &b| compare_cells(&keys[a], &keys[b], direction));

    sorted.clear();
    sorted.extend(order.into_iter().map(|index| records[index].clone()));
    sorted
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};

    use super::*;

    fn names(records: &[Value]) -> Vec<String> {
        records
            .iter()
            .map(|record| record["name"].as_str().unwrap_or_default().to_string())
            .collect()
    }

    #[test]
    fn no_field_keeps_existing_order() {
        let records = vec![json!({ "name": "b" }), json!({ "name": "a" })];
        assert_eq!(sort_records(&records, None, SortDirection::Desc), records);
    }

    #[test]
    fn text_sorts_ignoring_case() {
        let records = vec![
            json!({ "name": "bravo" }),
            json!({ "name": "Alpha" }),
            json!({ "name": "charlie" }),
        ];
        let sorted = sort_records(&records, Some("name"), SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["Alpha", "bravo", "charlie"]);
    }

    #[test]
    fn lower_case_sorts_before_upper_case_on_ties() {
        assert_eq!(locale_compare("a", "A"), Ordering::Less);
        assert_eq!(locale_compare("A", "a"), Ordering::Greater);
        assert_eq!(locale_compare("abc", "abc"), Ordering::Equal);
    }

    #[test]
    fn accented_text_sorts_with_its_base_letter() {
        let records: Vec<Value> = ["zeta", "éclair", "eagle", "Ábaco", "bravo"]
            .into_iter()
            .map(|name| json!({ "name": name }))
            .collect();
        let sorted = sort_records(&records, Some("name"), SortDirection::Asc);
        assert_eq!(names(&sorted), vec!["Ábaco", "bravo", "eagle", "éclair", "zeta"]);
    }

    #[test]
    fn accents_then_case_break_ties() {
        assert_eq!(locale_compare("resume", "résumé"), Ordering::Less);
        assert_eq!(locale_compare("résumé", "Résumé"), Ordering::Less);
        assert_eq!(locale_compare("Ångström", "angstrom"), Ordering::Greater);
        assert_eq!(locale_compare("Zoë", "Zoe"), Ordering::Greater);
        // Precomposed and decomposed forms share a base key.
        assert_eq!(locale_compare("e\u{301}a", "éb"), Ordering::Less);
    }

    #[test]
    fn numbers_sort_numerically_in_both_directions() {
        let records = vec![
            json!({ "n": 10 }),
            json!({ "n": 2 }),
            json!({ "n": 33 }),
        ];
        let asc = sort_records(&records, Some("n"), SortDirection::Asc);
        let desc = sort_records(&records, Some("n"), SortDirection::Desc);
        assert_eq!(asc, vec![json!({ "n": 2 }), json!({ "n": 10 }), json!({ "n": 33 })]);
        assert_eq!(desc, vec![json!({ "n": 33 }), json!({ "n": 10 }), json!({ "n": 2 })]);
    }

    #[test]
    fn ties_keep_input_order_in_both_directions() {
        let records = vec![
            json!({ "name": "first", "team": "red" }),
            json!({ "name": "second", "team": "blue" }),
            json!({ "name": "third", "team": "red" }),
            json!({ "name": "fourth", "team": "blue" }),
        ];
        let asc = sort_records(&records, Some("team"), SortDirection::Asc);
        assert_eq!(names(&asc), vec!["second", "fourth", "first", "third"]);

        let desc = sort_records(&records, Some("team"), SortDirection::Desc);
        assert_eq!(names(&desc), vec!["first", "third", "second", "fourth"]);
    }

    #[test]
    fn mixed_kinds_sort_by_kind_without_panicking() {
        let records = vec![
            json!({ "v": "text" }),
            json!({ "v": null }),
            json!({ "v": 3 }),
            json!({ "v": [1, 2] }),
            json!({ "v": true }),
            json!({ "v": "Another" }),
        ];
        let sorted = sort_records(&records, Some("v"), SortDirection::Asc);
        assert_eq!(
            sorted,
            vec![
                json!({ "v": true }),
                json!({ "v": 3 }),
                json!({ "v": "Another" }),
                json!({ "v": "text" }),
                json!({ "v": [1, 2] }),
                json!({ "v": null }),
            ]
        );
    }

    #[test]
    fn missing_fields_sort_last_ascending() {
        let records = vec![json!({}), json!({ "n": 1 })];
        let sorted = sort_records(&records, Some("n"), SortDirection::Asc);
        assert_eq!(sorted, vec![json!({ "n": 1 }), json!({})]);
    }

    #[test]
    fn nan_sorts_after_numbers() {
        assert_eq!(
            compare_cells(
                &CellValue::Number(f64::NAN),
                &CellValue::Number(1.0),
                SortDirection::Asc
            ),
            Ordering::Greater
        );
        assert_eq!(
            compare_cells(
                &CellValue::Number(f64::NAN),
                &CellValue::Number(f64::NAN),
                SortDirection::Asc
            ),
            Ordering::Equal
        );
    }

    #[test]
    fn booleans_sort_false_first() {
        assert_eq!(
            compare_cells(&CellValue::Bool(false), &CellValue::Bool(true), SortDirection::Asc),
            Ordering::Less
        );
    }

    #[test]
    fn direction_helpers() {
        assert_eq!(SortDirection::Asc.sign(), 1);
        assert_eq!(SortDirection::Desc.sign(), -1);
        assert_eq!(SortDirection::Asc.toggled(), SortDirection::Desc);
        assert_eq!(
            serde_json::to_string(&SortDirection::Desc).expect("serialize"),
            "\"desc\""
        );
    }
}
