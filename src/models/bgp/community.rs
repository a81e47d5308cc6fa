use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Regular community value as defined in [RFC1997](https://datatracker.ietf.org/doc/html/rfc1997).
///
/// The value is opaque to the encoder; it is written as 4 network-order bytes. By convention the
/// high 16 bits hold an AS number and the low 16 bits a locally defined value.
///
/// ## Display
///
/// Communities are displayed as `ASN:VALUE`, e.g. `65000:100`.
#[derive(Debug, PartialEq, Copy, Clone, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Community(pub u32);

impl Community {
    pub const NO_EXPORT: Community = Community(0xFFFFFF01);
    pub const NO_ADVERTISE: Community = Community(0xFFFFFF02);
    pub const NO_EXPORT_SUBCONFED: Community = Community(0xFFFFFF03);

    pub const fn new(asn: u16, value: u16) -> Community {
        Community(((asn as u32) << 16) | value as u32)
    }

    pub const fn asn(&self) -> u16 {
        (self.0 >> 16) as u16
    }

    pub const fn value(&self) -> u16 {
        (self.0 & 0xffff) as u16
    }
}

impl From<u32> for Community {
    fn from(value: u32) -> Self {
        Community(value)
    }
}

impl From<Community> for u32 {
    fn from(value: Community) -> Self {
        value.0
    }
}

impl Display for Community {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.asn(), self.value())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid community: {0}")]
pub struct ParseCommunityError(String);

impl FromStr for Community {
    type Err = ParseCommunityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (asn, value) = s
            .split_once(':')
            .ok_or_else(|| ParseCommunityError(s.to_string()))?;
        let asn = asn
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseCommunityError(s.to_string()))?;
        let value = value
            .trim()
            .parse::<u16>()
            .map_err(|_| ParseCommunityError(s.to_string()))?;
        Ok(Community::new(asn, value))
    }
}
