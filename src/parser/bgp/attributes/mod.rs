mod attr_01_origin;
mod attr_02_as_path;
mod attr_03_next_hop;
mod attr_04_med;
mod attr_05_local_pref;
mod attr_08_communities;
mod attr_14_15_nlri;

use bytes::{BufMut, Bytes, BytesMut};

use crate::error::EncoderError;
use crate::models::*;
use crate::parser::WriteUtils;

pub use attr_01_origin::encode_origin;
pub use attr_02_as_path::encode_as_path;
pub use attr_03_next_hop::encode_next_hop;
pub use attr_04_med::encode_med;
pub use attr_05_local_pref::encode_local_pref;
pub use attr_08_communities::encode_communities;
pub use attr_14_15_nlri::{encode_mp_reach_nlri, encode_mp_unreach_nlri};

/// Encode a complete path attribute TLV: `flags | type | length | value`.
///
/// The flags are the attribute type's defaults, with the extended length bit set iff the value
/// is longer than 255 bytes. Values that do not fit a 2-byte length are rejected.
pub fn encode_attribute(attr_type: AttrType, value: &[u8]) -> Result<Bytes, EncoderError> {
    let value_len = u16::try_from(value.len()).map_err(|_| EncoderError::AttributeTooLarge {
        attr_type,
        size: value.len(),
    })?;
    let flags = attr_type.default_flags().for_len(value.len());

    let mut bytes = BytesMut::with_capacity(value.len() + 4);
    bytes.put_attr_header(flags, attr_type, value_len);
    bytes.put_slice(value);
    Ok(bytes.freeze())
}
