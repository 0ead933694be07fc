//! Kudos Data-Access Layer
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Session service and one-operation use cases
//! - `infra/` - REST repository and wire DTOs
//! - `container` - Composition root (client singleton / per-request graphs)
//!
//! ## Features
//! - Bearer-token sessions with environment-scoped token storage
//! - Login / logout / registration / password reset without throwing for
//!   expected auth outcomes
//! - Paginated user and kudos listings with normalized metadata
//! - Team/category directories and recognition analytics
//!
//! ## Session Model
//! - The token lives under a single storage key routed to cookies
//! - Cached profile snapshots tolerate missing fields and corrupt data
//! - Logout always clears local state, reachable backend or not

pub mod application;
pub mod container;
pub mod domain;
pub mod error;
pub mod infra;

// Re-exports for convenience
pub use application::config::{ApiConfig, PathTable, Resource};
pub use application::session::{AuthService, LogoutSummary};
pub use container::Container;
pub use error::{AuthFailure, UNKNOWN_ERROR_MESSAGE};
pub use infra::rest::RestRepository;

// Re-export kernel types for unified error handling
pub use kernel::error::{
    api_error::{ApiError, ApiResult},
    kind::ErrorKind,
};
pub use kernel::page::{Page, PageMeta};

// Convenience re-exports
pub mod models {
    pub use crate::domain::entity::analytics::*;
    pub use crate::domain::entity::kudos::*;
    pub use crate::domain::entity::session::*;
    pub use crate::domain::entity::user::*;
    pub use crate::domain::value_object::*;
}

pub mod repository {
    pub use crate::domain::repository::*;
}
