use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::ingest::Transaction;

const FIELD_SEPARATOR: char = '|';

/// Why a raw line was dropped during cleaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    FieldCount,
    TransactionIdPrefix,
    ProductIdPrefix,
    MissingCustomer,
    MissingRegion,
    InvalidQuantity,
    InvalidUnitPrice,
    NonPositiveQuantity,
    NonPositiveUnitPrice,
}

impl RejectReason {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::FieldCount => "field_count",
            Self::TransactionIdPrefix => "transaction_id_prefix",
            Self::ProductIdPrefix => "product_id_prefix",
            Self::MissingCustomer => "missing_customer",
            Self::MissingRegion => "missing_region",
            Self::InvalidQuantity => "invalid_quantity",
            Self::InvalidUnitPrice => "invalid_unit_price",
            Self::NonPositiveQuantity => "non_positive_quantity",
            Self::NonPositiveUnitPrice => "non_positive_unit_price",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ParseOutcome {
    pub records: Vec<Transaction>,
    pub invalid_count: usize,
    pub rejections: BTreeMap<RejectReason, usize>,
}

impl ParseOutcome {
    fn reject(&mut self, line_number: usize, reason: RejectReason) {
        debug!(line = line_number, reason = reason.as_str(), "rejected sales line");
        self.invalid_count += 1;
        *self.rejections.entry(reason).or_insert(0) += 1;
    }
}

/// Turns raw pipe-delimited lines into validated transactions.
///
/// Every line lands in exactly one bucket: `records` or `invalid_count`.
pub fn parse_and_clean<S>(lines: &[S]) -> ParseOutcome
where
    S: AsRef<str>,
{
    let mut outcome = ParseOutcome::default();

    for (index, line) in lines.iter().enumerate() {
        match clean_line(line.as_ref()) {
            Ok(transaction) => outcome.records.push(transaction),
            Err(reason) => outcome.reject(index + 1, reason),
        }
    }

    outcome
}

fn clean_line(line: &str) -> Result<Transaction, RejectReason> {
    let fields = line.trim().split(FIELD_SEPARATOR).collect::<Vec<&str>>();
    let [
        transaction_id,
        date,
        product_id,
        product_name,
        quantity,
        unit_price,
        customer_id,
        region,
    ] = fields.as_slice()
    else {
        return Err(RejectReason::FieldCount);
    };

    if !transaction_id.starts_with('T') {
        return Err(RejectReason::TransactionIdPrefix);
    }
    if !product_id.starts_with('P') {
        return Err(RejectReason::ProductIdPrefix);
    }
    if customer_id.trim().is_empty() {
        return Err(RejectReason::MissingCustomer);
    }
    if region.trim().is_empty() {
        return Err(RejectReason::MissingRegion);
    }

    let quantity = parse_quantity(quantity)?;
    let unit_price = parse_unit_price(unit_price)?;

    Ok(Transaction {
        transaction_id: transaction_id.to_string(),
        date: date.to_string(),
        product_id: product_id.to_string(),
        product_name: product_name.replace(',', " "),
        quantity,
        unit_price,
        customer_id: customer_id.to_string(),
        region: region.to_string(),
    })
}

fn parse_quantity(raw: &str) -> Result<i64, RejectReason> {
    let quantity = strip_grouping(raw)
        .parse::<i64>()
        .map_err(|_| RejectReason::InvalidQuantity)?;
    if quantity <= 0 {
        return Err(RejectReason::NonPositiveQuantity);
    }
    Ok(quantity)
}

fn parse_unit_price(raw: &str) -> Result<f64, RejectReason> {
    let price = strip_grouping(raw)
        .parse::<f64>()
        .map_err(|_| RejectReason::InvalidUnitPrice)?;
    if !price.is_finite() {
        return Err(RejectReason::InvalidUnitPrice);
    }
    if price <= 0.0 {
        return Err(RejectReason::NonPositiveUnitPrice);
    }
    Ok(price)
}

fn strip_grouping(raw: &str) -> String {
    raw.replace(',', "").trim().to_string()
}
