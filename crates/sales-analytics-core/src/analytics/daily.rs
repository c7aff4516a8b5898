use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::analytics::round_to;
use crate::ingest::Transaction;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailySummary {
    pub date: String,
    pub revenue: f64,
    pub transaction_count: usize,
    pub unique_customers: usize,
}

/// Highest-revenue day. `date` is `None` only when there were no sales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PeakDay {
    pub date: Option<String>,
    pub revenue: f64,
    pub transaction_count: usize,
}

#[derive(Debug, Default)]
struct DayTally<'a> {
    revenue: f64,
    transaction_count: usize,
    customers: HashSet<&'a str>,
}

/// Per-date totals in ascending date-string order.
///
/// Ordering is plain string comparison, so it only matches the calendar for
/// zero-padded `YYYY-MM-DD` dates.
pub fn daily_sales_trend(transactions: &[Transaction]) -> Vec<DailySummary> {
    let mut days: BTreeMap<&str, DayTally<'_>> = BTreeMap::new();
    for transaction in transactions {
        let tally = days.entry(transaction.date.as_str()).or_default();
        tally.revenue += transaction.line_total();
        tally.transaction_count += 1;
        tally.customers.insert(transaction.customer_id.as_str());
    }

    days.into_iter()
        .map(|(date, tally)| DailySummary {
            date: date.to_string(),
            revenue: round_to(tally.revenue, 2),
            transaction_count: tally.transaction_count,
            unique_customers: tally.customers.len(),
        })
        .collect()
}

pub fn find_peak_sales_day(transactions: &[Transaction]) -> PeakDay {
    peak_of_trend(&daily_sales_trend(transactions))
}

/// Scans a date-ordered trend; a later day must strictly beat the current
/// peak, so the earliest of several equal days wins.
pub fn peak_of_trend(trend: &[DailySummary]) -> PeakDay {
    let mut peak = PeakDay {
        date: None,
        revenue: 0.0,
        transaction_count: 0,
    };

    for day in trend {
        if day.revenue > peak.revenue {
            peak = PeakDay {
                date: Some(day.date.clone()),
                revenue: day.revenue,
                transaction_count: day.transaction_count,
            };
        }
    }

    peak
}
