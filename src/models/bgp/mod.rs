//! BGP messages and relevant structs.

pub mod attributes;
pub mod capabilities;
pub mod community;
pub mod error;

pub use attributes::*;
pub use capabilities::*;
pub use community::*;
pub use error::*;

use bytes::Bytes;
use num_enum::{IntoPrimitive, TryFromPrimitive};
use std::net::Ipv4Addr;

/// The version number for BGP-4
pub const BGP4: u8 = 4;

#[derive(Debug, TryFromPrimitive, IntoPrimitive, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum BgpMessageType {
    OPEN = 1,
    UPDATE = 2,
    NOTIFICATION = 3,
    KEEPALIVE = 4,
}

/// A BGP message body, ready for the transport layer to frame.
///
/// The marker, length and type header is not part of any variant; [BgpMessage::msg_type] and
/// [BgpMessage::body] give the transport the two values it needs to write it.
// https://tools.ietf.org/html/rfc4271#section-4
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BgpMessage {
    Open(BgpOpenMessage),
    Update(Bytes),
    Notification(BgpNotificationMessage),
    KeepAlive,
    /// A message of a type this crate does not interpret, preserved verbatim.
    Other { msg_type: u8, body: Bytes },
}

impl BgpMessage {
    /// The message type octet.
    pub fn msg_type(&self) -> u8 {
        match self {
            BgpMessage::Open(_) => BgpMessageType::OPEN.into(),
            BgpMessage::Update(_) => BgpMessageType::UPDATE.into(),
            BgpMessage::Notification(_) => BgpMessageType::NOTIFICATION.into(),
            BgpMessage::KeepAlive => BgpMessageType::KEEPALIVE.into(),
            BgpMessage::Other { msg_type, .. } => *msg_type,
        }
    }

    /// The message body in wire format.
    ///
    /// OPEN and NOTIFICATION bodies are re-encoded from their fields. A decoded OPEN keeps its
    /// received optional parameters, so a well-formed inbound body comes back unchanged.
    pub fn body(&self) -> Bytes {
        match self {
            BgpMessage::Open(msg) => msg.encode(),
            BgpMessage::Update(body) => body.clone(),
            BgpMessage::Notification(msg) => msg.encode(),
            BgpMessage::KeepAlive => Bytes::new(),
            BgpMessage::Other { body, .. } => body.clone(),
        }
    }
}

/// BGP Open Message
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///  +-+-+-+-+-+-+-+-+
///  |    Version    |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  |     My Autonomous System      |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  |           Hold Time           |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  |                         BGP Identifier                        |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  | Opt Parm Len  |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  |                                                               |
///  |             Optional Parameters (variable)                    |
///  |                                                               |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgpOpenMessage {
    /// Protocol version. Always [BGP4] when encoding.
    pub version: u8,
    pub asn: u16,
    /// Proposed hold time in seconds.
    pub hold_time: u16,
    pub router_id: Ipv4Addr,
    /// Whether IPv6 and IPv4 unicast multiprotocol capabilities are (to be) advertised.
    pub multiprotocol: bool,
    /// Raw optional parameters block, as received. When non-empty it is written back unchanged
    /// on encode, instead of parameters generated from `multiprotocol`.
    pub opt_params: Bytes,
}

impl BgpOpenMessage {
    pub fn new(asn: u16, hold_time: u16, router_id: Ipv4Addr, multiprotocol: bool) -> Self {
        BgpOpenMessage {
            version: BGP4,
            asn,
            hold_time,
            router_id,
            multiprotocol,
            opt_params: Bytes::new(),
        }
    }
}

/// BGP Notification Message
///
/// ```text
///  0                   1                   2                   3
///  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
///  | Error code    | Error subcode |   Data (variable)             |
///  +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BgpNotificationMessage {
    pub error_code: u8,
    pub error_subcode: u8,
    pub data: Bytes,
}

impl BgpNotificationMessage {
    pub fn new(error: BgpError, data: Bytes) -> Self {
        let (error_code, error_subcode) = error.codes();
        BgpNotificationMessage {
            error_code,
            error_subcode,
            data,
        }
    }

    pub fn error_type(&self) -> BgpError {
        BgpError::new(self.error_code, self.error_subcode)
    }
}

impl From<BgpOpenMessage> for BgpMessage {
    fn from(m: BgpOpenMessage) -> BgpMessage {
        BgpMessage::Open(m)
    }
}

impl From<BgpNotificationMessage> for BgpMessage {
    fn from(m: BgpNotificationMessage) -> BgpMessage {
        BgpMessage::Notification(m)
    }
}
