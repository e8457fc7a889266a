//! Reusable UI components.
//!
//! ARCHITECTURE
//! ============
//! Components read the session store from context; the rules they apply come
//! from `util`, so this layer stays a thin signal-to-view binding.

pub mod admin_navbar;
pub mod guard;
pub mod log_table;
pub mod navbar;
