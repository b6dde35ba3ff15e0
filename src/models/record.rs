use serde_json::Value;

/// A table row: an opaque key→value mapping. Cells are looked up by the
/// key named in a [`Column`](super::Column); the widget only ever reads
/// records, never mutates them.
pub type Record = serde_json::Map<String, Value>;

/// Render a cell value as display text. Strings come through without
/// quotes and null as empty; everything else uses its JSON rendering.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn sort_key(record: &Record) -> String {
    record
        .values()
        .map(cell_text)
        .collect::<Vec<_>>()
        .join("\u{1f}")
}

/// Display order used by the sort toggle: a stable ascending sort over
/// each record's rendered text, then fully reversed. Whole-record and
/// single-direction, not column-aware. Returns a permutation of
/// indices; the dataset itself stays in caller order.
pub fn descending_order(data: &[Record]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..data.len()).collect();
    indices.sort_by_cached_key(|&i| sort_key(&data[i]));
    indices.reverse();
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_cell_text_renders_plain_strings() {
        assert_eq!(cell_text(&json!("alice")), "alice");
        assert_eq!(cell_text(&json!(42)), "42");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&json!(null)), "");
        assert_eq!(cell_text(&json!([1, 2])), "[1,2]");
    }

    #[test]
    fn test_descending_order_reverses_ascending_text_order() {
        let data = vec![
            record(json!({"name": "bob"})),
            record(json!({"name": "alice"})),
            record(json!({"name": "carol"})),
        ];
        assert_eq!(descending_order(&data), vec![2, 0, 1]);
    }

    #[test]
    fn test_descending_order_keeps_ties_reversed_stably() {
        let data = vec![
            record(json!({"name": "same"})),
            record(json!({"name": "same"})),
            record(json!({"name": "same"})),
        ];
        // stable ascending sort leaves ties in place, the reverse flips them
        assert_eq!(descending_order(&data), vec![2, 1, 0]);
    }

    #[test]
    fn test_descending_order_of_empty_dataset() {
        assert!(descending_order(&[]).is_empty());
    }
}
