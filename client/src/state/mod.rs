//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Only cross-page state lives here. Page-local form and fetch state stays in
//! the page that owns it.

pub mod session;
