/// Ranking knobs shared by the product analytics and the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsPolicy {
    pub top_n: usize,
    pub top_customers: usize,
    pub low_performer_threshold: i64,
}

pub const ANALYTICS_POLICY_V1: AnalyticsPolicy = AnalyticsPolicy {
    top_n: 5,
    top_customers: 5,
    low_performer_threshold: 10,
};

impl Default for AnalyticsPolicy {
    fn default() -> Self {
        ANALYTICS_POLICY_V1
    }
}
