//! Per-domain actions. Every entry point here drives the shared
//! lifecycle in `crate::lifecycle` and fires its success-only side
//! effects before returning.

pub mod auth;
pub mod books;
pub mod borrows;
pub mod users;
