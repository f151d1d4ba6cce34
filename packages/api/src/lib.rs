//! # Coney
//!
//! Client connection establishment for message brokers: an ordered candidate
//! list tried in turn, bounded redirect following, fallback into
//! redirect-supplied alternates, and rustls TLS support.
//!
//! ## Usage
//!
//! ```ignore
//! use coney::{Address, Broker, TcpDialer};
//!
//! let factory = Broker::new()
//!     .username("app")
//!     .password("s3cret")
//!     .virtual_host("/prod")
//!     .heartbeat(30)
//!     .factory(TcpDialer::new(), MyHandshake);
//!
//! let addresses = [Address::new("broker-1", 5672), Address::new("broker-2", 5672)];
//! let conn = factory.establish(&addresses, 2).await?;
//! ```
//!
//! The wire handshake is supplied by the caller through the [`Handshake`]
//! seam; this crate decides which endpoint it runs against and when.

pub mod builder;

pub use coney_client::config::{DEFAULT_PASS, DEFAULT_USER, DEFAULT_VHOST};
pub use coney_client::prelude::*;
pub use coney_client::tls::{client_config_with_roots, default_client_config};

// Builder convenience alias - this is genuinely ergonomic
pub type Broker = builder::ConnectionBuilder;
