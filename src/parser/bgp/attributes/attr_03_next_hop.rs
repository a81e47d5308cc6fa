use crate::models::*;
use crate::parser::WriteUtils;
use bytes::{BufMut, Bytes, BytesMut};
use std::net::Ipv4Addr;

/// Encode the NEXT_HOP attribute. IPv6 next hops travel inside MP_REACH_NLRI instead.
pub fn encode_next_hop(addr: &Ipv4Addr) -> Bytes {
    let mut bytes = BytesMut::with_capacity(7);
    bytes.put_attr_header(AttrFlags::WTCR, AttrType::NEXT_HOP, 4);
    bytes.put_slice(&addr.octets());
    bytes.freeze()
}
