//! # Coney broker client internals
//!
//! Connection establishment for a message-broker protocol: an ordered list
//! of candidate endpoints tried in turn, server-issued redirects followed up
//! to a bounded per-address budget, redirect-supplied alternates tried
//! before the next candidate, and one meaningful error surfaced when every
//! avenue is exhausted.
//!
//! The wire protocol spoken after a connection opens is out of scope here.
//! The opening handshake enters through the [`connect::Handshake`] seam and
//! transports through [`connect::Dial`]; [`connect::TcpDialer`] and
//! [`tls::TlsDialer`] cover plain TCP and rustls TLS.

// Core modules
pub mod config;
pub mod connect;
pub mod error;
pub mod redirect;
pub mod tls;

// Prelude with canonical types
pub mod prelude;

// Essential public API - only what end users actually need
pub use crate::prelude::*;
