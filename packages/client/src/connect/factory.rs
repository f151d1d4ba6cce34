//! Connection establishment over candidate address lists.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::debug;

use crate::config::ConnectionConfig;
use crate::error::{self, Error};
use crate::redirect::RedirectBudget;

use super::address::Address;
use super::dial::Dial;
use super::handshake::{Handshake, HandshakeOutcome};

/// Opens broker connections from ordered candidate address lists.
///
/// Candidates are tried in order. A redirect answered during the handshake
/// moves the attempt to the endpoint the peer named, up to `max_redirects`
/// hops per address across the whole call; alternate endpoints supplied
/// alongside a redirect are tried before the next original candidate. The
/// last network-level error is surfaced when nothing connects.
#[derive(Debug, Clone)]
pub struct ConnectionFactory<D, H> {
    config: ConnectionConfig,
    dialer: D,
    handshake: H,
}

impl<D, H> ConnectionFactory<D, H> {
    pub fn new(config: ConnectionConfig, dialer: D, handshake: H) -> Self {
        Self {
            config,
            dialer,
            handshake,
        }
    }

    /// The configuration every handshake is given.
    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }
}

impl<D, H> ConnectionFactory<D, H>
where
    D: Dial + Sync,
    H: Handshake<D::Transport> + Sync,
{
    /// Try `addresses` in order, following up to `max_redirects` redirect
    /// hops per address, and return the first connection that opens.
    ///
    /// Fails with a protocol-violation error the moment a peer redirects a
    /// handshake that insisted it must not; fails with the last dial error
    /// once every candidate and redirect-supplied alternate is exhausted;
    /// fails with a no-addresses error when there was nothing to try.
    pub async fn establish(
        &self,
        addresses: &[Address],
        max_redirects: u32,
    ) -> Result<H::Connection, Error> {
        let mut budget = RedirectBudget::new();
        self.establish_with_budget(addresses.to_vec(), max_redirects, &mut budget)
            .await
    }

    /// Like [`establish`](Self::establish) with redirects disallowed.
    pub async fn establish_no_redirects(
        &self,
        addresses: &[Address],
    ) -> Result<H::Connection, Error> {
        self.establish(addresses, 0).await
    }

    /// One-shot connection to `host:port`, no redirects allowed.
    pub async fn connect_to(&self, host: &str, port: u16) -> Result<H::Connection, Error> {
        self.establish(&[Address::new(host, port)], 0).await
    }

    /// One-shot connection to `host` on the protocol default port, no
    /// redirects allowed.
    pub async fn connect(&self, host: &str) -> Result<H::Connection, Error> {
        self.establish(&[Address::with_default_port(host)], 0).await
    }

    /// Recursive worker behind [`establish`](Self::establish).
    ///
    /// The budget is shared down the recursion, never cloned, so redirect
    /// hops stay bounded per address no matter how deep the fallback lists
    /// nest. Boxed because a generic async fn cannot recurse unboxed.
    fn establish_with_budget<'a>(
        &'a self,
        addresses: Vec<Address>,
        max_redirects: u32,
        budget: &'a mut RedirectBudget,
    ) -> BoxFuture<'a, Result<H::Connection, Error>> {
        async move {
            let mut last_error: Option<Error> = None;

            for candidate in addresses {
                let mut current = candidate;
                // Alternates named by the most recent redirect while on this
                // candidate; tried before the next candidate.
                let mut fallback: Vec<Address> = Vec::new();

                let attempt = loop {
                    let transport = match self.dialer.dial(&current).await {
                        Ok(transport) => transport,
                        Err(err) => break Err(error::dial(err, current)),
                    };

                    let allow_redirects = budget.hops(&current) < max_redirects;
                    match self
                        .handshake
                        .handshake(transport, &self.config, !allow_redirects)
                        .await
                    {
                        Ok(HandshakeOutcome::Open(connection)) => break Ok(connection),
                        Ok(HandshakeOutcome::Redirected(redirect)) => {
                            if !allow_redirects {
                                // A well-behaved peer never redirects an
                                // insisting handshake. Broken peer, not an
                                // unreachable one: no further candidates.
                                return Err(error::insist_ignored(current));
                            }
                            budget.record_hop(&current);
                            debug!(from = %current, to = %redirect.next, "following broker redirect");
                            fallback = redirect.known;
                            current = redirect.next;
                        }
                        Err(err) => break Err(error::dial(err, current)),
                    }
                };

                match attempt {
                    Ok(connection) => return Ok(connection),
                    Err(err) => {
                        debug!(error = %err, "candidate exhausted");
                        last_error = Some(err);
                        // An empty fallback list is not worth recursing into:
                        // the sub-attempt could only fail with a generic
                        // no-addresses error, stomping the dial error above.
                        if !fallback.is_empty() {
                            match self
                                .establish_with_budget(fallback, max_redirects, budget)
                                .await
                            {
                                Ok(connection) => return Ok(connection),
                                Err(err) if err.is_protocol_violation() => return Err(err),
                                Err(err) => last_error = Some(err),
                            }
                        }
                    }
                }
            }

            Err(last_error.unwrap_or_else(error::no_addresses))
        }
        .boxed()
    }
}
