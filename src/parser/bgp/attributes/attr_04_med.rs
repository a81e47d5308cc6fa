use crate::models::*;
use crate::parser::WriteUtils;
use bytes::{BufMut, Bytes, BytesMut};

pub fn encode_med(med: u32) -> Bytes {
    let mut bytes = BytesMut::with_capacity(7);
    bytes.put_attr_header(AttrFlags::ONCR, AttrType::MULTI_EXIT_DISCRIMINATOR, 4);
    bytes.put_u32(med);
    bytes.freeze()
}
