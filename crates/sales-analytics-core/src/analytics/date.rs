use serde::Serialize;

use crate::ingest::Transaction;

/// Earliest and latest raw date strings, compared lexicographically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DateSpan {
    pub start: String,
    pub end: String,
}

pub fn date_span(transactions: &[Transaction]) -> Option<DateSpan> {
    let start = transactions.iter().map(|row| row.date.as_str()).min()?;
    let end = transactions.iter().map(|row| row.date.as_str()).max()?;
    Some(DateSpan {
        start: start.to_string(),
        end: end.to_string(),
    })
}

/// Number of records whose date is not a zero-padded `YYYY-MM-DD` string.
///
/// Every date-ordered output relies on string order matching calendar order,
/// which only holds for that shape.
pub fn count_non_iso_dates(transactions: &[Transaction]) -> usize {
    transactions
        .iter()
        .filter(|row| !looks_like_iso_date(&row.date))
        .count()
}

pub fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
