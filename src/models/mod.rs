/*!
models module defines the data structures used by the encoder and the decoders.
*/
pub mod advert;
pub mod bgp;
pub mod network;

pub use advert::*;
pub use bgp::*;
pub use network::*;
