use crate::models::*;
use crate::parser::WriteUtils;
use bytes::{BufMut, Bytes, BytesMut};

const AS_PATH_AS_SEQUENCE: u8 = 2;

/// Encode the AS_PATH attribute for a locally originated route.
///
/// RFC 4271, Section 5.1.2: the originating speaker sends external peers a single AS_SEQUENCE
/// segment containing only its own AS number, and sends internal peers an empty AS_PATH (one
/// whose length field is zero).
pub fn encode_as_path(asn: u16, external: bool) -> Bytes {
    let mut bytes = BytesMut::with_capacity(7);
    if external {
        bytes.put_attr_header(AttrFlags::WTCR, AttrType::AS_PATH, 4);
        bytes.put_u8(AS_PATH_AS_SEQUENCE);
        bytes.put_u8(1); // number of ASes in the segment, not octets
        bytes.put_u16(asn);
    } else {
        bytes.put_attr_header(AttrFlags::WTCR, AttrType::AS_PATH, 0);
    }
    bytes.freeze()
}
