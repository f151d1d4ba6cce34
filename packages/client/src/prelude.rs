//! Canonical public types.
//!
//! Everything an end user needs to establish broker connections; anything
//! deeper lives in the individual modules.

pub use crate::config::ConnectionConfig;
pub use crate::connect::{
    Address, ConnectionFactory, DEFAULT_PORT, DEFAULT_TLS_PORT, Dial, Handshake,
    HandshakeOutcome, InvalidAddress, TcpDialer,
};
pub use crate::error::{Error, Result};
pub use crate::redirect::{Redirect, RedirectBudget};
pub use crate::tls::TlsDialer;
