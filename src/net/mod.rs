//! Networking modules for the backend HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds one async function per endpoint, `types` defines the wire
//! schema those functions exchange with the server.

pub mod api;
pub mod types;
