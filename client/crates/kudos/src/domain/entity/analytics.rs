//! Analytics Entities
//!
//! Aggregates backing the analytics viewing screens.

use std::fmt;

use crate::domain::value_object::Category;

/// Reporting window for analytics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnalyticsRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl AnalyticsRange {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AnalyticsRange::Week => "week",
            AnalyticsRange::Month => "month",
            AnalyticsRange::Quarter => "quarter",
            AnalyticsRange::Year => "year",
        }
    }
}

impl fmt::Display for AnalyticsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kudos count for one category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCount {
    pub category: Category,
    pub count: u64,
}

/// Recognition activity summary over one reporting window
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsSummary {
    pub total_kudos: u64,
    pub active_users: u64,
    pub top_categories: Vec<CategoryCount>,
}
