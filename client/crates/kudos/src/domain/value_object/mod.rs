//! Value Objects
//!
//! Nested value shapes carried by the entities. Immutable records built by
//! repositories from verified wire data; behavior is limited to pure
//! predicates.

pub mod category;
pub mod recipient;
pub mod role;
pub mod team;

pub use category::Category;
pub use recipient::Recipient;
pub use role::Role;
pub use team::Team;
