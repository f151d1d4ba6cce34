//! Broker connection establishment
//!
//! Tries an ordered list of candidate endpoints, follows server-issued
//! redirects up to a bounded per-address count, recurses into
//! redirect-supplied alternate lists before moving to the next candidate,
//! and surfaces the last meaningful failure when every avenue is exhausted.

mod address;
mod dial;
mod factory;
mod handshake;

pub use address::{Address, DEFAULT_PORT, DEFAULT_TLS_PORT, InvalidAddress};
pub use dial::{Dial, TcpDialer};
pub use factory::ConnectionFactory;
pub use handshake::{Handshake, HandshakeOutcome};

pub(crate) use dial::connect_tcp;
