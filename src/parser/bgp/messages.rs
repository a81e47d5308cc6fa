use crate::models::*;
use bytes::{Buf, BufMut, Bytes, BytesMut};

use crate::error::ParserError;
use crate::parser::ReadUtils;
use log::{debug, warn};

/// Minimum OPEN body: version(1) + AS(2) + hold time(2) + identifier(4) + opt-param-len(1).
const OPEN_MIN_LENGTH: usize = 10;

/// Minimum NOTIFICATION body: code(1) + subcode(1).
const NOTIFICATION_MIN_LENGTH: usize = 2;

impl BgpMessage {
    /// Build a message from a type octet and a body already separated by the transport.
    ///
    /// OPEN and NOTIFICATION bodies are decoded, UPDATE bodies are kept as raw bytes, and
    /// unknown types are preserved as [BgpMessage::Other].
    pub fn from_parts(msg_type: u8, body: Bytes) -> Result<BgpMessage, ParserError> {
        let msg_type = match BgpMessageType::try_from(msg_type) {
            Ok(t) => t,
            Err(_) => {
                debug!("preserving BGP message of unknown type {}", msg_type);
                return Ok(BgpMessage::Other { msg_type, body });
            }
        };
        Ok(match msg_type {
            BgpMessageType::OPEN => BgpMessage::Open(parse_bgp_open_message(body)?),
            BgpMessageType::UPDATE => BgpMessage::Update(body),
            BgpMessageType::NOTIFICATION => {
                BgpMessage::Notification(parse_bgp_notification_message(body)?)
            }
            BgpMessageType::KEEPALIVE => {
                if !body.is_empty() {
                    warn!("KEEPALIVE message carries {} unexpected bytes", body.len());
                }
                BgpMessage::KeepAlive
            }
        })
    }
}

/// Parse BGP NOTIFICATION message.
///
/// Any bytes after the code and subcode are the diagnostic data, possibly empty.
pub fn parse_bgp_notification_message(
    mut input: Bytes,
) -> Result<BgpNotificationMessage, ParserError> {
    input.has_n_remaining(NOTIFICATION_MIN_LENGTH)?;
    let error_code = input.read_u8()?;
    let error_subcode = input.read_u8()?;
    Ok(BgpNotificationMessage {
        error_code,
        error_subcode,
        data: input,
    })
}

impl BgpNotificationMessage {
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(NOTIFICATION_MIN_LENGTH + self.data.len());
        buf.put_u8(self.error_code);
        buf.put_u8(self.error_subcode);
        buf.put_slice(&self.data);
        buf.freeze()
    }
}

/// Parse BGP OPEN message.
///
/// The optional parameters block after the 10th byte is kept raw. It is only scanned, leniently,
/// for an IPv6 unicast multiprotocol capability; a malformed block never fails the decode. Use
/// [BgpOpenMessage::capabilities] for a strict parse.
pub fn parse_bgp_open_message(mut input: Bytes) -> Result<BgpOpenMessage, ParserError> {
    input.has_n_remaining(OPEN_MIN_LENGTH)?;
    let version = input.read_u8()?;
    let asn = input.read_u16()?;
    let hold_time = input.read_u16()?;
    let router_id = input.read_ipv4_address()?;
    let opt_params_len = input.read_u8()?;

    if input.remaining() != opt_params_len as usize {
        warn!(
            "BGP open message optional parameters length {} does not match the actual length {}",
            opt_params_len,
            input.remaining()
        );
    }

    let multiprotocol = match parse_capabilities(input.clone()) {
        Ok(capabilities) => capabilities.iter().any(|cap| {
            cap.multiprotocol() == Some(MultiprotocolExtensionsCapability::IPV6_UNICAST)
        }),
        Err(e) => {
            warn!("error parsing BGP open message optional parameters: {}", e);
            false
        }
    };

    Ok(BgpOpenMessage {
        version,
        asn,
        hold_time,
        router_id,
        multiprotocol,
        opt_params: input,
    })
}

/// Parse the capabilities out of an optional parameters block. Parameters of other types are
/// skipped.
///
/// <https://datatracker.ietf.org/doc/html/rfc3392#section-4>
fn parse_capabilities(mut input: Bytes) -> Result<Vec<Capability>, ParserError> {
    let mut capabilities = vec![];
    while input.remaining() > 0 {
        let param_type = input.read_u8()?;
        let param_len = input.read_u8()? as usize;
        let mut param = input.read_n_bytes(param_len)?;

        if param_type != CAPABILITIES_OPTIONAL_PARAMETER {
            debug!("skipping optional parameter type {}", param_type);
            continue;
        }

        // a single parameter may carry several capabilities
        while param.remaining() > 0 {
            let code = param.read_u8()?;
            let len = param.read_u8()? as usize;
            let value = param.read_n_bytes(len)?;
            capabilities.push(Capability {
                capability_type: BgpCapabilityType::from(code),
                value,
            });
        }
    }
    Ok(capabilities)
}

impl BgpOpenMessage {
    /// Capabilities advertised in the received optional parameters block.
    pub fn capabilities(&self) -> Result<Vec<Capability>, ParserError> {
        parse_capabilities(self.opt_params.clone())
    }

    /// Encode the OPEN body.
    ///
    /// A message that was decoded keeps its received optional parameters byte for byte. Otherwise
    /// the parameters are generated: when multiprotocol is enabled, IPv6 unicast and IPv4 unicast
    /// capabilities are advertised, in that order, each in its own optional parameter.
    pub fn encode(&self) -> Bytes {
        let mut params = BytesMut::new();
        if !self.opt_params.is_empty() && self.opt_params.len() <= u8::MAX as usize {
            params.put_slice(&self.opt_params);
        } else if self.multiprotocol {
            params.put_slice(
                &MultiprotocolExtensionsCapability::IPV6_UNICAST.encode_optional_parameter(),
            );
            params.put_slice(
                &MultiprotocolExtensionsCapability::IPV4_UNICAST.encode_optional_parameter(),
            );
        }

        let mut buf = BytesMut::with_capacity(OPEN_MIN_LENGTH + params.len());
        buf.put_u8(BGP4);
        buf.put_u16(self.asn);
        buf.put_u16(self.hold_time);
        buf.put_slice(&self.router_id.octets());
        buf.put_u8(params.len() as u8);
        buf.put_slice(&params);
        buf.freeze()
    }
}
