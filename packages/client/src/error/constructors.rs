use super::BoxError;
use super::types::{Error, Kind};
use crate::connect::Address;

/// Creates an `Error` for a dial or transport-level failure at `address`.
pub fn dial<E: Into<BoxError>>(e: E, address: Address) -> Error {
    Error::new(Kind::Dial).with(e.into()).with_address(address)
}

/// Creates an `Error` for a peer that redirected despite being asked not to.
pub fn insist_ignored(address: Address) -> Error {
    Error::new(Kind::ProtocolViolation).with_address(address)
}

/// Creates an `Error` for an empty or exhausted candidate list.
pub fn no_addresses() -> Error {
    Error::new(Kind::NoAddresses)
}

/// Creates an `Error` for unusable TLS configuration or material.
pub fn tls<E: Into<BoxError>>(e: E) -> Error {
    Error::new(Kind::Tls).with(e.into())
}
