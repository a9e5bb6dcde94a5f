//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages are wrapped by `RequireSession` at the
//! route table in `app`.

pub mod about;
pub mod contact;
pub mod home;
pub mod login;
