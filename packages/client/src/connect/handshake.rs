//! The opening handshake seam.

use std::future::Future;
use std::io;

use crate::config::ConnectionConfig;
use crate::redirect::Redirect;

/// Outcome of one opening handshake.
#[derive(Debug)]
pub enum HandshakeOutcome<C> {
    /// The peer accepted the connection.
    Open(C),
    /// The peer declined to serve it and pointed at another endpoint.
    Redirected(Redirect),
}

/// Capability that performs the opening handshake on a freshly dialed
/// transport.
///
/// The handshake consumes the transport. On a [`HandshakeOutcome::Redirected`]
/// outcome or an error the transport must not escape the call; dropping it
/// closes the socket before the establisher moves to its next attempt. The
/// `insist` flag asks the peer not to redirect; a well-behaved peer never
/// answers an insisting handshake with a redirect.
pub trait Handshake<T> {
    /// Open connection produced by a successful handshake. Owns its
    /// transport for the rest of its life.
    type Connection: Send;

    /// Run the handshake over `transport`, presenting the credentials and
    /// negotiation limits in `config`. Transport-level failures surface as
    /// io errors.
    fn handshake(
        &self,
        transport: T,
        config: &ConnectionConfig,
        insist: bool,
    ) -> impl Future<Output = io::Result<HandshakeOutcome<Self::Connection>>> + Send;
}
