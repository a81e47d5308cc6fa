//! BGP attribute structs
mod origin;

use bitflags::bitflags;
use num_enum::{IntoPrimitive, TryFromPrimitive};

pub use origin::*;

bitflags! {
    /// The high-order bit (bit 0) of the Attribute Flags octet is the
    /// Optional bit.  It defines whether the attribute is optional (if
    /// set to 1) or well-known (if set to 0).
    ///
    /// The second high-order bit (bit 1) of the Attribute Flags octet
    /// is the Transitive bit.  It defines whether an optional
    /// attribute is transitive (if set to 1) or non-transitive (if set
    /// to 0).
    ///
    /// For well-known attributes, the Transitive bit MUST be set to 1.
    /// (See Section 5 for a discussion of transitive attributes.)
    ///
    /// The third high-order bit (bit 2) of the Attribute Flags octet
    /// is the Partial bit.  It defines whether the information
    /// contained in the optional transitive attribute is partial (if
    /// set to 1) or complete (if set to 0).  For well-known attributes
    /// and for optional non-transitive attributes, the Partial bit
    /// MUST be set to 0.
    ///
    /// The fourth high-order bit (bit 3) of the Attribute Flags octet
    /// is the Extended Length bit.  It defines whether the Attribute
    /// Length is one octet (if set to 0) or two octets (if set to 1).
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct AttrFlags: u8 {
        const OPTIONAL   = 0b10000000;
        const TRANSITIVE = 0b01000000;
        const PARTIAL    = 0b00100000;
        const EXTENDED   = 0b00010000;
    }
}

impl AttrFlags {
    /// Well-known, Transitive, Complete, Regular length.
    pub const WTCR: AttrFlags = AttrFlags::TRANSITIVE;
    /// Optional, Transitive, Complete, Regular length.
    pub const OTCR: AttrFlags = AttrFlags::OPTIONAL.union(AttrFlags::TRANSITIVE);
    /// Optional, Transitive, Complete, Extended length.
    pub const OTCE: AttrFlags = AttrFlags::OTCR.union(AttrFlags::EXTENDED);
    /// Optional, Non-transitive, Complete, Regular length.
    pub const ONCR: AttrFlags = AttrFlags::OPTIONAL;
    /// Optional, Non-transitive, Complete, Extended length.
    pub const ONCE: AttrFlags = AttrFlags::OPTIONAL.union(AttrFlags::EXTENDED);

    /// Returns these flags with the extended length bit set or cleared to match a value of
    /// `value_len` bytes.
    pub const fn for_len(self, value_len: usize) -> AttrFlags {
        if value_len > u8::MAX as usize {
            self.union(AttrFlags::EXTENDED)
        } else {
            self.difference(AttrFlags::EXTENDED)
        }
    }
}

/// Attribute types originated by this crate.
///
/// The full list can be found at IANA:
/// <https://www.iana.org/assignments/bgp-parameters/bgp-parameters.xhtml#bgp-parameters-2>
#[allow(non_camel_case_types)]
#[derive(Debug, TryFromPrimitive, IntoPrimitive, PartialEq, Eq, Hash, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AttrType {
    ORIGIN = 1,
    AS_PATH = 2,
    NEXT_HOP = 3,
    MULTI_EXIT_DISCRIMINATOR = 4,
    LOCAL_PREFERENCE = 5,
    COMMUNITIES = 8,
    /// <https://tools.ietf.org/html/rfc4760>
    MP_REACHABLE_NLRI = 14,
    MP_UNREACHABLE_NLRI = 15,
}

impl AttrType {
    /// Flags for a regular length instance of this attribute.
    pub const fn default_flags(&self) -> AttrFlags {
        match self {
            AttrType::ORIGIN
            | AttrType::AS_PATH
            | AttrType::NEXT_HOP
            | AttrType::LOCAL_PREFERENCE => AttrFlags::WTCR,
            AttrType::COMMUNITIES => AttrFlags::OTCR,
            AttrType::MULTI_EXIT_DISCRIMINATOR
            | AttrType::MP_REACHABLE_NLRI
            | AttrType::MP_UNREACHABLE_NLRI => AttrFlags::ONCR,
        }
    }
}
