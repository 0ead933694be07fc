//! Domain Layer
//!
//! Entities, value objects and repository traits. No I/O here; the
//! infrastructure layer implements the traits against the REST backend.

pub mod entity;
pub mod repository;
pub mod value_object;
