use std::error::Error as StdError;
use std::fmt;

use crate::connect::Address;

/// A Result alias where the Err case is `coney_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents errors that can occur while establishing a broker connection.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    source: Option<Box<dyn StdError + Send + Sync>>,
    address: Option<Address>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// Network-level failure dialing an endpoint, or a transport-level
    /// failure during the handshake exchange. Retryable against the next
    /// candidate address.
    Dial,
    /// The peer redirected a handshake that asked it not to. A broken peer,
    /// not an unreachable one, so never retried elsewhere.
    ProtocolViolation,
    /// Empty candidate list, or every candidate exhausted without a dial
    /// attempt recording an error.
    NoAddresses,
    /// TLS configuration or certificate material was unusable.
    Tls,
}

impl Error {
    pub(crate) fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                source: None,
                address: None,
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub(crate) fn with<E: Into<super::BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use]
    pub(crate) fn with_address(mut self, address: Address) -> Error {
        self.inner.address = Some(address);
        self
    }

    pub fn kind(&self) -> &Kind {
        &self.inner.kind
    }

    /// Get the endpoint associated with this error, if any.
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.inner.address.as_ref()
    }

    /// True for network-level dial/transport failures.
    pub fn is_dial(&self) -> bool {
        matches!(self.inner.kind, Kind::Dial)
    }

    /// True when the peer ignored a no-redirect request.
    pub fn is_protocol_violation(&self) -> bool {
        matches!(self.inner.kind, Kind::ProtocolViolation)
    }

    /// True when there was no candidate left to report a concrete error for.
    pub fn is_no_addresses(&self) -> bool {
        matches!(self.inner.kind, Kind::NoAddresses)
    }

    /// True for TLS configuration failures.
    pub fn is_tls(&self) -> bool {
        matches!(self.inner.kind, Kind::Tls)
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("coney::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if let Some(ref address) = self.inner.address {
            f.field("address", address);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Dial => f.write_str("error dialing broker endpoint")?,
            Kind::ProtocolViolation => f.write_str("peer ignored 'insist' and redirected")?,
            Kind::NoAddresses => f.write_str("unable to connect to any broker address")?,
            Kind::Tls => f.write_str("TLS configuration error")?,
        }

        if let Some(ref address) = self.inner.address {
            write!(f, " ({address})")?;
        }

        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
