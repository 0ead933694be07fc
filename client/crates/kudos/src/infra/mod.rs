//! Infrastructure Layer
//!
//! REST implementations of the domain repository traits, plus the wire
//! DTOs they decode. Entities never leave this layer half-built: every
//! optional wire field gets an explicit default.

pub mod dto;
pub mod rest;

pub use rest::RestRepository;
