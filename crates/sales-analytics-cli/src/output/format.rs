use std::cmp;

use serde_json::Value;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    pub name: &'a str,
    pub align: Align,
}

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;

pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

/// Aligned table with a header row. Widths count characters so `₹` pads
/// like any other glyph.
pub fn render_table(columns: &[Column<'_>], rows: &[Vec<String>]) -> Vec<String> {
    if columns.is_empty() {
        return Vec::new();
    }

    let mut widths = columns
        .iter()
        .map(|column| column.name.chars().count())
        .collect::<Vec<usize>>();
    for row in rows {
        for (index, value) in row.iter().enumerate() {
            if let Some(slot) = widths.get_mut(index) {
                *slot = cmp::max(*slot, value.chars().count());
            }
        }
    }

    let header = columns
        .iter()
        .map(|column| column.name.to_string())
        .collect::<Vec<String>>();
    let mut output = vec![format_row(columns, &header, &widths)];
    for row in rows {
        output.push(format_row(columns, row, &widths));
    }
    output
}

fn format_row(columns: &[Column<'_>], cells: &[String], widths: &[usize]) -> String {
    let pieces = columns
        .iter()
        .enumerate()
        .map(|(index, column)| {
            let width = widths.get(index).copied().unwrap_or(0);
            let value = cells.get(index).map(String::as_str).unwrap_or("");
            let fill = " ".repeat(width.saturating_sub(value.chars().count()));
            match column.align {
                Align::Left => format!("{value}{fill}"),
                Align::Right => format!("{fill}{value}"),
            }
        })
        .collect::<Vec<String>>();

    let line = format!("{}{}", " ".repeat(INDENT), pieces.join(" ".repeat(COLUMN_GAP).as_str()));
    line.trim_end().to_string()
}

pub fn get_f64(value: &Value, key: &str) -> f64 {
    value.get(key).and_then(Value::as_f64).unwrap_or(0.0)
}

pub fn get_u64(value: &Value, key: &str) -> u64 {
    value.get(key).and_then(Value::as_u64).unwrap_or(0)
}

pub fn get_i64(value: &Value, key: &str) -> i64 {
    value.get(key).and_then(Value::as_i64).unwrap_or(0)
}

pub fn get_str<'a>(value: &'a Value, key: &str) -> &'a str {
    value.get(key).and_then(Value::as_str).unwrap_or("")
}

pub fn rows_of<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{Align, Column, get_f64, key_value_rows, render_table, rows_of};

    #[test]
    fn key_value_rows_align_labels() {
        let rows = key_value_rows(
            &[("Lines read:", "8".to_string()), ("Total revenue:", "₹31.00".to_string())],
            2,
        );
        assert_eq!(rows[0], "  Lines read:     8");
        assert_eq!(rows[1], "  Total revenue:  ₹31.00");
    }

    #[test]
    fn table_pads_by_character_count() {
        let columns = [
            Column {
                name: "Region",
                align: Align::Left,
            },
            Column {
                name: "Sales",
                align: Align::Right,
            },
        ];
        let rows = vec![
            vec!["North".to_string(), "₹1,100.00".to_string()],
            vec!["South".to_string(), "₹20.00".to_string()],
        ];
        let lines = render_table(&columns, &rows);
        assert_eq!(lines[0], "  Region      Sales");
        assert_eq!(lines[1], "  North   ₹1,100.00");
        assert_eq!(lines[2], "  South      ₹20.00");
    }

    #[test]
    fn missing_values_fall_back_to_defaults() {
        let data = json!({"rows": "not a list"});
        assert!(rows_of(&data, "rows").is_empty());
        assert_eq!(get_f64(&data, "total"), 0.0);
    }
}
