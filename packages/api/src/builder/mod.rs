//! Fluent connection builder
//!
//! Collects credentials, negotiation limits, and the redirect budget before
//! binding to concrete dial/handshake capabilities.

mod core;
mod methods;

pub use self::core::ConnectionBuilder;
