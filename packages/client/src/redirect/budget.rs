use std::collections::HashMap;

use crate::connect::Address;

/// Per-address count of redirect hops already followed.
///
/// One budget lives for the whole of an establishment attempt, including the
/// recursive fallback attempts it spawns, so the redirect hops tolerated from
/// any address stay bounded by the caller's limit rather than multiplying
/// with recursion depth. It is never reset mid-operation. An address with no
/// entry has spent zero hops.
///
/// Not meant to be shared between concurrent top-level establishment calls;
/// each call builds its own.
#[derive(Debug, Default)]
pub struct RedirectBudget {
    hops: HashMap<Address, u32>,
}

impl RedirectBudget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirect hops already followed from `address`.
    pub fn hops(&self, address: &Address) -> u32 {
        self.hops.get(address).copied().unwrap_or(0)
    }

    /// Record one more redirect hop taken from `address`.
    pub fn record_hop(&mut self, address: &Address) {
        *self.hops.entry(address.clone()).or_insert(0) += 1;
    }
}
