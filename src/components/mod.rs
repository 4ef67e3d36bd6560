//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the session through the Leptos context provided
//! by `app::App`.

pub mod session_bar;
