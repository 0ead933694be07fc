//! Shared Kernel - Domain-crossing minimal core
//!
//! This crate contains the "smallest core" of vocabulary shared by every
//! layer of the kudos client:
//! - The unified API error type and result alias
//! - The pagination envelope every list operation returns
//!
//! **Design Principle**: Only include things that are "hard to change"
//! and have consistent meaning across all domains.

pub mod error {
    pub mod api_error;
    pub mod conversions;
    pub mod kind;
}
pub mod page;

pub use error::api_error::{ApiError, ApiResult};
pub use error::kind::ErrorKind;
pub use page::{Page, PageMeta};
