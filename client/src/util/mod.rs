//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules hold the pure rules behind pages and components (routing
//! decisions, navigation entries, result formatting) so they can be tested
//! without a browser.

pub mod auth;
pub mod detection;
pub mod nav;
pub mod remote;
