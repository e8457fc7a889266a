//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Protected pages wrap themselves in
//! `components::guard::RequireSession`; the admin pages inherit the guard
//! from `admin::AdminLayout`.

pub mod admin;
pub mod detect;
pub mod history;
pub mod home;
pub mod login;
pub mod register;
