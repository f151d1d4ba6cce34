//! Connection configuration
//!
//! A [`ConnectionConfig`] is a read-only snapshot for the duration of one
//! establishment call: credentials, virtual host, and the negotiation limits
//! the handshake requests from the peer. Nothing in here is interpreted by
//! the establisher itself.

mod builders;
mod defaults;
mod types;

pub use defaults::{DEFAULT_PASS, DEFAULT_USER, DEFAULT_VHOST};
pub use types::ConnectionConfig;
