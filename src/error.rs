/*!
error module defines the error types used in bgp-rhi.
*/
use crate::models::AttrType;
use num_enum::{TryFromPrimitive, TryFromPrimitiveError};
use std::net::IpAddr;
use thiserror::Error;

/// Errors raised while decoding message bodies received from a peer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParserError {
    /// The input ended before a fixed-size field could be read.
    ///
    /// ## Occurs during:
    ///  - Parsing of an OPEN message body shorter than 10 bytes
    ///  - Parsing of a NOTIFICATION message body shorter than 2 bytes
    ///  - Parsing of a truncated capability parameter
    #[error("not enough bytes to read: needed {needed}, {remaining} remaining")]
    NotEnoughBytes { needed: usize, remaining: usize },
    /// This error represents a [num_enum::TryFromPrimitiveError] error for any of a number of
    /// different types.
    #[error("unrecognized value {value} for {type_name}")]
    UnrecognizedEnumVariant { type_name: &'static str, value: u64 },
}

impl<T> From<TryFromPrimitiveError<T>> for ParserError
where
    T: TryFromPrimitive,
    T::Primitive: Into<u64>,
{
    #[inline]
    fn from(value: TryFromPrimitiveError<T>) -> Self {
        ParserError::UnrecognizedEnumVariant {
            type_name: T::NAME,
            value: value.number.into(),
        }
    }
}

/// Errors raised while rendering a route set into UPDATE message bodies.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncoderError {
    /// A single route could not be placed into an UPDATE body below the size ceiling. Splitting
    /// cannot help; the attribute set (usually the community list) is too large.
    #[error("route {prefix} renders to {size} bytes, which does not fit in one UPDATE message")]
    UnsplittableRoute { prefix: IpAddr, size: usize },
    /// An attribute value is longer than the 2-octet extended length field can describe.
    #[error("{attr_type:?} attribute value of {size} bytes exceeds the extended length limit")]
    AttributeTooLarge { attr_type: AttrType, size: usize },
    /// The withdrawn routes or path attributes section of an UPDATE body is longer than its
    /// 2-octet length field. Only reachable through [crate::models::Advert::render], since
    /// batches are split well below this.
    #[error("UPDATE {section} section of {size} bytes exceeds the 2-octet length field")]
    SectionTooLarge { section: &'static str, size: usize },
}
