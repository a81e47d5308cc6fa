//! Encoding of route health state into BGP UPDATE messages.
pub mod nlri;
mod updates_encoder;

pub use nlri::{partition_by_family, split_advertise_withdraw};
pub use updates_encoder::MAX_UPDATE_BODY_SIZE;
