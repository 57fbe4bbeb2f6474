//! Shared UI components.

pub mod footer;
pub mod navbar;
pub mod stat_card;
