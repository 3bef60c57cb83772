//! Authentication core for the Kaksha demo: the fixed credential store,
//! the auth gate that validates logins (with optional simulated latency),
//! and the session state machine that derives which view is presented.
//!
//! This crate has no UI dependency; the app crate wires it into Dioxus
//! signals, and everything here is unit-testable on its own.

pub mod gate;
pub mod session;
pub mod store;

pub use gate::AuthGate;
pub use session::{Session, View};
pub use store::CredentialStore;
