use crate::models::*;
use crate::parser::WriteUtils;
use bytes::{BufMut, Bytes, BytesMut};

/// Encode the ORIGIN attribute. Locally originated host routes are always [Origin::IGP].
pub fn encode_origin(origin: Origin) -> Bytes {
    let mut bytes = BytesMut::with_capacity(4);
    bytes.put_attr_header(AttrFlags::WTCR, AttrType::ORIGIN, 1);
    bytes.put_u8(origin.into());
    bytes.freeze()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// ```text
    /// ORIGIN is a well-known mandatory attribute that defines the
    ///        origin of the path information.  The data octet can assume
    ///        the following values:
    ///
    ///           Value      Meaning
    ///
    ///           0         IGP - Network Layer Reachability Information
    ///                        is interior to the originating AS
    ///
    ///           1         EGP - Network Layer Reachability Information
    ///                        learned via the EGP protocol [RFC904]
    ///
    ///           2         INCOMPLETE - Network Layer Reachability
    ///                        Information learned by some other means
    /// ```
    #[test]
    fn test_encode_origin() {
        assert_eq!(encode_origin(Origin::IGP).as_ref(), &[0x40, 1, 1, 0]);
        assert_eq!(encode_origin(Origin::INCOMPLETE).as_ref(), &[0x40, 1, 1, 2]);
    }
}
