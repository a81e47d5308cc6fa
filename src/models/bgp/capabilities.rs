use crate::models::network::{Afi, Safi};
use crate::parser::ReadUtils;
use crate::ParserError;
use bytes::{BufMut, Bytes, BytesMut};
use num_enum::{FromPrimitive, IntoPrimitive};

/// Optional parameter type carrying capabilities in an OPEN message.
///
/// <https://datatracker.ietf.org/doc/html/rfc3392#section-4>
pub const CAPABILITIES_OPTIONAL_PARAMETER: u8 = 2;

#[allow(non_camel_case_types)]
#[derive(Debug, FromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BgpCapabilityType {
    MULTIPROTOCOL_EXTENSIONS_FOR_BGP_4 = 1,
    ROUTE_REFRESH_CAPABILITY_FOR_BGP_4 = 2,
    EXTENDED_NEXT_HOP_ENCODING = 5,
    BGP_EXTENDED_MESSAGE = 6,
    GRACEFUL_RESTART_CAPABILITY = 64,
    SUPPORT_FOR_4_OCTET_AS_NUMBER_CAPABILITY = 65,
    ADD_PATH_CAPABILITY = 69,
    ENHANCED_ROUTE_REFRESH_CAPABILITY = 70,

    /// Catch-all type for any other code
    #[num_enum(catch_all)]
    Unknown(u8),
}

/// A single capability advertised inside a capabilities optional parameter.
///
/// - RFC3392: <https://datatracker.ietf.org/doc/html/rfc3392>
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capability {
    pub capability_type: BgpCapabilityType,
    pub value: Bytes,
}

impl Capability {
    /// Interprets the value as a multiprotocol capability, if it is one.
    pub fn multiprotocol(&self) -> Option<MultiprotocolExtensionsCapability> {
        match self.capability_type {
            BgpCapabilityType::MULTIPROTOCOL_EXTENSIONS_FOR_BGP_4 => {
                MultiprotocolExtensionsCapability::parse(self.value.clone()).ok()
            }
            _ => None,
        }
    }
}

/// Multiprotocol Extensions capability - RFC 4760, Section 8
///
/// ```text
/// 0       7      15      23      31
/// +-------+-------+-------+-------+
/// |      AFI      | Res.  | SAFI  |
/// +-------+-------+-------+-------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MultiprotocolExtensionsCapability {
    pub afi: Afi,
    pub safi: Safi,
}

impl MultiprotocolExtensionsCapability {
    pub const IPV4_UNICAST: Self = Self::new(Afi::Ipv4, Safi::Unicast);
    pub const IPV6_UNICAST: Self = Self::new(Afi::Ipv6, Safi::Unicast);

    pub const fn new(afi: Afi, safi: Safi) -> Self {
        Self { afi, safi }
    }

    /// Parse the 4-byte capability value.
    pub fn parse(mut data: Bytes) -> Result<Self, ParserError> {
        let afi = data.read_afi()?;
        let _reserved = data.read_u8()?;
        let safi = data.read_safi()?;
        Ok(Self { afi, safi })
    }

    /// Encode the 4-byte capability value.
    pub fn encode(&self) -> Bytes {
        let mut bytes = BytesMut::with_capacity(4);
        bytes.put_u16(self.afi.into());
        bytes.put_u8(0);
        bytes.put_u8(self.safi.into());
        bytes.freeze()
    }

    /// Encode as a complete optional parameter:
    /// `param-type(1) | param-len(1) | cap-code(1) | cap-len(1) | value(4)`.
    pub fn encode_optional_parameter(&self) -> Bytes {
        let value = self.encode();
        let mut bytes = BytesMut::with_capacity(value.len() + 4);
        bytes.put_u8(CAPABILITIES_OPTIONAL_PARAMETER);
        bytes.put_u8(value.len() as u8 + 2);
        bytes.put_u8(BgpCapabilityType::MULTIPROTOCOL_EXTENSIONS_FOR_BGP_4.into());
        bytes.put_u8(value.len() as u8);
        bytes.put_slice(&value);
        bytes.freeze()
    }
}
