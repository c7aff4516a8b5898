pub const CURRENCY_SYMBOL: &str = "₹";
pub const FIELD_SEPARATOR: &str = " | ";

/// `₹` followed by the amount with `,` thousands separators and 2 decimals.
pub fn format_currency(value: f64) -> String {
    let fixed = format!("{:.2}", value.abs());
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{CURRENCY_SYMBOL}{sign}{}.{fraction}", group_thousands(whole))
}

/// Shortest round-trip form that keeps a `.0` on whole numbers.
pub fn format_decimal(value: f64) -> String {
    format!("{value:?}")
}

pub fn join_fields(fields: &[String]) -> String {
    fields.join(FIELD_SEPARATOR)
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
