//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues credential-bearing HTTP calls, `types` defines the wire
//! schema, and `error` is the single failure type every call returns.

pub mod api;
pub mod error;
pub mod types;
