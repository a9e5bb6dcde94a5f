//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `session` holds the plain value type; `session_store` owns the reactive
//! signal and is the single writer of the session cookie.

pub mod session;
pub mod session_store;
