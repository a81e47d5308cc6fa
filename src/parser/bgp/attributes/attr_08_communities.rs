use crate::error::EncoderError;
use crate::models::*;
use crate::parser::bgp::attributes::encode_attribute;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode the COMMUNITIES attribute, preserving the order of `communities`.
///
/// Lists longer than 63 entries no longer fit a 1-byte length and are sent with the extended
/// length flag.
pub fn encode_communities(communities: &[Community]) -> Result<Bytes, EncoderError> {
    let mut value = BytesMut::with_capacity(communities.len() * 4);
    for community in communities {
        value.put_u32(community.0);
    }
    encode_attribute(AttrType::COMMUNITIES, &value)
}
