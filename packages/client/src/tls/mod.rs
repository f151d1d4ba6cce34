//! TLS support
//!
//! Delegates certificate handling to rustls. A [`TlsDialer`] dials like the
//! plain TCP dialer and then runs a rustls session over the stream before
//! the transport is handed to the handshake.

use std::fmt;
use std::future::Future;
use std::io;
use std::sync::Arc;
use std::time::Duration;

use rustls::pki_types::ServerName;
use rustls::{ClientConfig, RootCertStore};
use tokio::net::TcpStream;
use tokio_rustls::TlsConnector;
use tokio_rustls::client::TlsStream;

use crate::connect::{Address, DEFAULT_TLS_PORT, Dial, connect_tcp};
use crate::error::{self, Error};

/// Client TLS configuration trusting the bundled webpki roots.
pub fn default_client_config() -> Arc<ClientConfig> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());
    Arc::new(
        ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth(),
    )
}

/// Client TLS configuration trusting the webpki roots plus extra PEM-encoded
/// roots, e.g. an internal CA fronting the broker fleet.
pub fn client_config_with_roots(pem: &[u8]) -> Result<Arc<ClientConfig>, Error> {
    let mut roots = RootCertStore::empty();
    roots.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let mut reader = io::BufReader::new(pem);
    for cert in rustls_pemfile::certs(&mut reader) {
        let cert = cert.map_err(error::tls)?;
        roots.add(cert).map_err(error::tls)?;
    }

    Ok(Arc::new(
        ClientConfig::builder()
            .with_root_certificates(roots)
            .with_no_client_auth(),
    ))
}

/// TLS dialer: TCP connect, then a rustls session over the stream.
///
/// Substitutes the TLS default port when the address carries none, and uses
/// the address host for SNI and certificate verification.
#[derive(Clone)]
pub struct TlsDialer {
    connector: TlsConnector,
    connect_timeout: Option<Duration>,
    nodelay: bool,
}

impl TlsDialer {
    pub fn new(config: Arc<ClientConfig>) -> Self {
        Self {
            connector: TlsConnector::from(config),
            connect_timeout: None,
            nodelay: false,
        }
    }

    /// Bound each dial attempt instead of waiting on the operating system.
    #[must_use]
    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Enable `TCP_NODELAY` on the underlying streams.
    #[must_use]
    pub fn with_nodelay(mut self, nodelay: bool) -> Self {
        self.nodelay = nodelay;
        self
    }
}

impl Default for TlsDialer {
    fn default() -> Self {
        Self::new(default_client_config())
    }
}

impl fmt::Debug for TlsDialer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TlsDialer")
            .field("connect_timeout", &self.connect_timeout)
            .field("nodelay", &self.nodelay)
            .finish_non_exhaustive()
    }
}

impl Dial for TlsDialer {
    type Transport = TlsStream<TcpStream>;

    fn dial(
        &self,
        address: &Address,
    ) -> impl Future<Output = io::Result<TlsStream<TcpStream>>> + Send {
        async move {
            let port = address.port_or(DEFAULT_TLS_PORT);
            tracing::trace!(host = address.host(), port, "dialing broker over TLS");
            let stream = connect_tcp(address.host(), port, self.connect_timeout, self.nodelay).await?;
            let name = ServerName::try_from(address.host().to_string())
                .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
            self.connector.connect(name, stream).await
        }
    }
}
