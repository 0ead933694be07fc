//! Platform Crate - Technical Infrastructure
//!
//! This crate provides the environment-facing foundations of the kudos
//! client:
//! - Cookie attribute handling and Cookie/Set-Cookie header plumbing
//! - Key/value storage backends and the hybrid façade that routes the
//!   session token to cookies and everything else to persistent storage
//! - The bearer-authenticated JSON HTTP client
//!
//! Nothing here knows about domain entities; that lives in the `kudos`
//! crate above it.

pub mod client;
pub mod cookie;
pub mod storage;
