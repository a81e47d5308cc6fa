/*!
Provides IO utility functions for reading and writing fields in network byte order.
*/
use std::net::{IpAddr, Ipv4Addr};

use crate::error::ParserError;
use crate::models::*;
use bytes::{Buf, BufMut, Bytes, BytesMut};
use ipnet::IpNet;

impl ReadUtils for Bytes {}

/// Bounds-checked reads. Every method fails with [ParserError::NotEnoughBytes] instead of
/// panicking when the input is short.
pub trait ReadUtils: Buf {
    #[inline]
    fn has_n_remaining(&self, n: usize) -> Result<(), ParserError> {
        if self.remaining() < n {
            Err(ParserError::NotEnoughBytes {
                needed: n,
                remaining: self.remaining(),
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    fn read_u8(&mut self) -> Result<u8, ParserError> {
        self.has_n_remaining(1)?;
        Ok(self.get_u8())
    }

    #[inline]
    fn read_u16(&mut self) -> Result<u16, ParserError> {
        self.has_n_remaining(2)?;
        Ok(self.get_u16())
    }

    #[inline]
    fn read_u32(&mut self) -> Result<u32, ParserError> {
        self.has_n_remaining(4)?;
        Ok(self.get_u32())
    }

    fn read_ipv4_address(&mut self) -> Result<Ipv4Addr, ParserError> {
        let addr = self.read_u32()?;
        Ok(Ipv4Addr::from(addr))
    }

    fn read_afi(&mut self) -> Result<Afi, ParserError> {
        Afi::try_from(self.read_u16()?).map_err(ParserError::from)
    }

    fn read_safi(&mut self) -> Result<Safi, ParserError> {
        Safi::try_from(self.read_u8()?).map_err(ParserError::from)
    }

    fn read_n_bytes(&mut self, n_bytes: usize) -> Result<Bytes, ParserError> {
        self.has_n_remaining(n_bytes)?;
        Ok(self.copy_to_bytes(n_bytes))
    }
}

impl WriteUtils for BytesMut {}

/// Network-order writes shared by the attribute encoders.
pub trait WriteUtils: BufMut {
    /// Writes an attribute header: flags, type and a 1 or 2 byte length.
    ///
    /// The extended length bit in `flags` decides the width of the length field, so callers must
    /// pass flags already adjusted with [AttrFlags::for_len].
    fn put_attr_header(&mut self, flags: AttrFlags, attr_type: AttrType, value_len: u16) {
        self.put_u8(flags.bits());
        self.put_u8(attr_type.into());
        if flags.contains(AttrFlags::EXTENDED) {
            self.put_u16(value_len);
        } else {
            self.put_u8(value_len as u8);
        }
    }

    /// Writes a host route NLRI record: the full-width prefix length followed by the address.
    fn put_host_prefix(&mut self, addr: &IpAddr) {
        let prefix = IpNet::from(*addr);
        self.put_u8(prefix.prefix_len());
        match addr {
            IpAddr::V4(ip) => self.put_slice(&ip.octets()),
            IpAddr::V6(ip) => self.put_slice(&ip.octets()),
        }
    }
}
