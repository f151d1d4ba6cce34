//! Candidate broker endpoints.

use std::fmt;
use std::str::FromStr;

/// Default port for plain connections.
pub const DEFAULT_PORT: u16 = 5672;

/// Default port for TLS connections.
pub const DEFAULT_TLS_PORT: u16 = 5671;

/// A candidate broker endpoint.
///
/// A `None` port means "use the protocol default"; the dialer substitutes
/// the concrete port at dial time, so an address never stores a resolved
/// port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address {
    host: String,
    port: Option<u16>,
}

impl Address {
    /// Endpoint at an explicit port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port: Some(port),
        }
    }

    /// Endpoint on the protocol default port.
    pub fn with_default_port(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: None,
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    /// Explicit port, if one was given.
    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// Port to dial, substituting `default` when none was given.
    pub fn port_or(&self, default: u16) -> u16 {
        self.port.unwrap_or(default)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.port {
            Some(port) => write!(f, "{}:{}", self.host, port),
            None => f.write_str(&self.host),
        }
    }
}

/// Error parsing an [`Address`] from text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidAddress {
    input: String,
}

impl fmt::Display for InvalidAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid broker address {:?}", self.input)
    }
}

impl std::error::Error for InvalidAddress {}

impl FromStr for Address {
    type Err = InvalidAddress;

    /// Accepts `host` or `host:port`; a bare host gets the default port at
    /// dial time.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || InvalidAddress {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(invalid());
        }

        match trimmed.rsplit_once(':') {
            Some((host, port)) => {
                if host.is_empty() {
                    return Err(invalid());
                }
                let port = port.parse::<u16>().map_err(|_| invalid())?;
                Ok(Address::new(host, port))
            }
            None => Ok(Address::with_default_port(trimmed)),
        }
    }
}
