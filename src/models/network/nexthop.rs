use std::net::Ipv6Addr;

/// IPv6 next hop carried in MP_REACH_NLRI.
///
/// RFC 2545 allows either a single global address (16 bytes) or a global address followed by
/// the link-local address of the same interface (32 bytes).
#[derive(Debug, PartialEq, Copy, Clone, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NextHop6 {
    Global(Ipv6Addr),
    GlobalAndLinkLocal(Ipv6Addr, Ipv6Addr),
}

impl NextHop6 {
    /// Number of bytes the next hop occupies on the wire.
    pub const fn wire_len(&self) -> usize {
        match self {
            NextHop6::Global(_) => 16,
            NextHop6::GlobalAndLinkLocal(_, _) => 32,
        }
    }

    pub fn octets(&self) -> Vec<u8> {
        match self {
            NextHop6::Global(ip) => ip.octets().to_vec(),
            NextHop6::GlobalAndLinkLocal(global, link_local) => {
                let mut ip_bytes = global.octets().to_vec();
                ip_bytes.extend_from_slice(&link_local.octets());
                ip_bytes
            }
        }
    }
}

impl Default for NextHop6 {
    fn default() -> Self {
        NextHop6::Global(Ipv6Addr::UNSPECIFIED)
    }
}

impl From<Ipv6Addr> for NextHop6 {
    fn from(value: Ipv6Addr) -> Self {
        NextHop6::Global(value)
    }
}
