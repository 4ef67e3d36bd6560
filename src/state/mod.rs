//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The session is an explicitly owned store, restored once at startup and
//! handed to the app through a reactive context signal.

pub mod session;
