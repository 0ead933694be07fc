//! Application Layer
//!
//! The session service plus one use case per business operation. Each use
//! case holds exactly one dependency and exposes one `execute` method; this
//! is the entire surface the presentation layer may call.

pub mod config;
pub mod session;

pub mod analytics;
pub mod approve_user;
pub mod current_user;
pub mod directory;
pub mod get_kudos;
pub mod get_user;
pub mod give_kudos;
pub mod list_kudos;
pub mod list_users;
pub mod login;
pub mod logout;
pub mod register;
pub mod remove_kudos;
pub mod remove_user;
pub mod reset_password;
pub mod update_user;
