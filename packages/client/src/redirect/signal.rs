use crate::connect::Address;

/// A redirect received during the opening handshake.
///
/// The peer declines to serve the connection itself, names the endpoint the
/// client should retry against, and lists other endpoints it believes are
/// usable should that one fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
    /// Endpoint to retry against instead of the one just contacted.
    pub next: Address,
    /// Other known-good endpoints, tried before giving up on this lineage.
    pub known: Vec<Address>,
}

impl Redirect {
    pub fn new(next: Address, known: Vec<Address>) -> Self {
        Self { next, known }
    }

    /// A redirect that names a replacement endpoint and nothing else.
    pub fn to(next: Address) -> Self {
        Self::new(next, Vec::new())
    }
}
