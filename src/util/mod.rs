//! Small browser-facing utilities shared across pages.

pub mod dialog;
pub mod guard;
pub mod preview;
pub mod scope;
