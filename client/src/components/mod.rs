//! Reusable view components for the navigation shell and pages.

pub mod alert_table;
pub mod app_bar;
pub mod footer;
pub mod require_session;
