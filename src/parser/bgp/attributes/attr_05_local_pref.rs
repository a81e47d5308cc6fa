use crate::models::*;
use crate::parser::WriteUtils;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode the LOCAL_PREF attribute.
///
/// RFC 4271: a speaker MUST NOT send this attribute to external peers, and SHALL include it in
/// every UPDATE sent to internal peers. The caller decides which applies.
pub fn encode_local_pref(local_pref: u32) -> Bytes {
    let mut bytes = BytesMut::with_capacity(7);
    bytes.put_attr_header(AttrFlags::WTCR, AttrType::LOCAL_PREFERENCE, 4);
    bytes.put_u32(local_pref);
    bytes.freeze()
}
