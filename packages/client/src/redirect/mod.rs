//! Redirect Handling
//!
//! A broker may answer the opening handshake by pointing the client at a
//! different endpoint. [`Redirect`] carries that instruction together with
//! the other endpoints the peer knows about; [`RedirectBudget`] bounds how
//! many redirect hops are followed from any one address.

mod budget;
mod signal;

pub use budget::RedirectBudget;
pub use signal::Redirect;
