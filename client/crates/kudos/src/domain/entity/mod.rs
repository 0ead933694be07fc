//! Entities

pub mod analytics;
pub mod kudos;
pub mod session;
pub mod user;

pub use analytics::{AnalyticsRange, AnalyticsSummary, CategoryCount};
pub use kudos::Kudos;
pub use session::LoginData;
pub use user::User;
