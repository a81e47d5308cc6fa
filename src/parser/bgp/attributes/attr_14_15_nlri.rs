use crate::error::EncoderError;
use crate::models::*;
use crate::parser::bgp::attributes::encode_attribute;
use bytes::{BufMut, Bytes, BytesMut};

///
/// <https://datatracker.ietf.org/doc/html/rfc4760#section-3>
/// The attribute is encoded as shown below:
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Length of Next Hop Network Address (1 octet)            |
/// +---------------------------------------------------------+
/// | Network Address of Next Hop (variable)                  |
/// +---------------------------------------------------------+
/// | Reserved (1 octet)                                      |
/// +---------------------------------------------------------+
/// | Network Layer Reachability Information (variable)       |
/// +---------------------------------------------------------+
///
/// `nlri` is an already encoded run of IPv6 prefix records. AFI/SAFI are fixed to IPv6
/// unicast, per RFC 2545.
pub fn encode_mp_reach_nlri(next_hop: &NextHop6, nlri: &[u8]) -> Result<Bytes, EncoderError> {
    let next_hop_bytes = next_hop.octets();

    let mut value = BytesMut::with_capacity(5 + next_hop_bytes.len() + nlri.len());
    value.put_u16(Afi::Ipv6.into());
    value.put_u8(Safi::Unicast.into());
    value.put_u8(next_hop_bytes.len() as u8);
    value.put_slice(&next_hop_bytes);
    // number of SNPAs, reserved since RFC 4760
    value.put_u8(0);
    value.put_slice(nlri);

    encode_attribute(AttrType::MP_REACHABLE_NLRI, &value)
}

/// ```text
/// +---------------------------------------------------------+
/// | Address Family Identifier (2 octets)                    |
/// +---------------------------------------------------------+
/// | Subsequent Address Family Identifier (1 octet)          |
/// +---------------------------------------------------------+
/// | Withdrawn Routes (variable)                             |
/// +---------------------------------------------------------+
/// ```
pub fn encode_mp_unreach_nlri(nlri: &[u8]) -> Result<Bytes, EncoderError> {
    let mut value = BytesMut::with_capacity(3 + nlri.len());
    value.put_u16(Afi::Ipv6.into());
    value.put_u8(Safi::Unicast.into());
    value.put_slice(nlri);

    encode_attribute(AttrType::MP_UNREACHABLE_NLRI, &value)
}
