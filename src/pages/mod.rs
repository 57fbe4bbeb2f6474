//! Route components, one module per page.

pub mod about;
pub mod contact;
pub mod dashboard;
pub mod github_callback;
pub mod home;
pub mod insights;
pub mod login;
pub mod signup;
