//! Common network-related structs.

mod afi;
mod nexthop;

pub use afi::*;
pub use nexthop::*;
