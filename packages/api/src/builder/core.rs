//! Builder state and finishers.

use coney_client::config::ConnectionConfig;
use coney_client::connect::{Address, ConnectionFactory, Dial, Handshake};
use coney_client::error::Error;

/// Fluent entry point for configuring broker connections.
///
/// Field setters live in `methods`; finishing either hands back a
/// [`ConnectionFactory`] bound to concrete capabilities or establishes in
/// one call using the builder's redirect limit.
#[derive(Debug, Clone, Default)]
pub struct ConnectionBuilder {
    pub(crate) config: ConnectionConfig,
    pub(crate) max_redirects: u32,
}

impl ConnectionBuilder {
    /// Builder with the stock defaults and redirects disallowed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the configuration collected so far.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Finish into a factory bound to concrete dial/handshake capabilities.
    pub fn factory<D, H>(self, dialer: D, handshake: H) -> ConnectionFactory<D, H>
    where
        D: Dial,
        H: Handshake<D::Transport>,
    {
        ConnectionFactory::new(self.config, dialer, handshake)
    }

    /// Build a factory and establish against `addresses` in one call, using
    /// the builder's redirect limit.
    pub async fn establish<D, H>(
        self,
        dialer: D,
        handshake: H,
        addresses: &[Address],
    ) -> Result<H::Connection, Error>
    where
        D: Dial + Sync,
        H: Handshake<D::Transport> + Sync,
    {
        let max_redirects = self.max_redirects;
        self.factory(dialer, handshake)
            .establish(addresses, max_redirects)
            .await
    }
}
