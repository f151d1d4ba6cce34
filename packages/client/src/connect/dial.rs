//! Dialing candidate endpoints.

use std::future::Future;
use std::io;
use std::time::Duration;

use tokio::net::TcpStream;

use super::address::{Address, DEFAULT_PORT};

/// Capability that turns a candidate address into an open transport.
///
/// Implementations substitute the protocol default port when the address
/// carries none, and own whatever timeout policy applies to an attempt; the
/// establisher itself never imposes one.
pub trait Dial {
    /// Transport handle produced by a successful dial.
    type Transport: Send;

    /// Open a transport to `address`. Fails with an io error on refusal,
    /// timeout, or name-resolution failure.
    fn dial(&self, address: &Address)
    -> impl Future<Output = io::Result<Self::Transport>> + Send;
}

/// Plain TCP dialer.
#[derive(Debug, Clone, Default)]
pub struct TcpDialer {
    connect_timeout: Option<Duration>,
    nodelay: bool,
}

impl TcpDialer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each dial attempt instead of waiting on the operating system.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable `TCP_NODELAY` on established streams.
    #[must_use]
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }
}

impl Dial for TcpDialer {
    type Transport = TcpStream;

    fn dial(&self, address: &Address) -> impl Future<Output = io::Result<TcpStream>> + Send {
        async move {
            let port = address.port_or(DEFAULT_PORT);
            tracing::trace!(host = address.host(), port, "dialing broker");
            connect_tcp(address.host(), port, self.connect_timeout, self.nodelay).await
        }
    }
}

/// Shared TCP connect path for the plain and TLS dialers.
pub(crate) async fn connect_tcp(
    host: &str,
    port: u16,
    connect_timeout: Option<Duration>,
    nodelay: bool,
) -> io::Result<TcpStream> {
    let connect = TcpStream::connect((host, port));
    let stream = match connect_timeout {
        Some(limit) => tokio::time::timeout(limit, connect).await.map_err(|_| {
            io::Error::new(
                io::ErrorKind::TimedOut,
                format!("connecting to {host}:{port} timed out"),
            )
        })??,
        None => connect.await?,
    };
    if nodelay {
        stream.set_nodelay(true)?;
    }
    Ok(stream)
}
