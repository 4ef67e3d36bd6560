//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration. Access control is not done
//! here: `app::RouteGuard` decides before a page renders.

pub mod admin;
pub mod events;
pub mod login;
pub mod register;
