//! Host route NLRI encoding.
use crate::models::{Afi, RouteSet};
use crate::parser::WriteUtils;
use bytes::{Bytes, BytesMut};
use itertools::{Either, Itertools};
use std::net::IpAddr;

/// Encodes each address as a host route into the stream of its family, returning the IPv4 and
/// the IPv6 stream.
///
/// Records keep the order of `addresses` within each family.
pub fn partition_by_family(addresses: &[IpAddr]) -> (Bytes, Bytes) {
    let v4_count = addresses
        .iter()
        .filter(|addr| Afi::from(**addr) == Afi::Ipv4)
        .count();

    let mut v4 = BytesMut::with_capacity(v4_count * 5);
    let mut v6 = BytesMut::with_capacity((addresses.len() - v4_count) * 17);
    for addr in addresses {
        match Afi::from(*addr) {
            Afi::Ipv4 => v4.put_host_prefix(addr),
            Afi::Ipv6 => v6.put_host_prefix(addr),
        }
    }
    (v4.freeze(), v6.freeze())
}

/// Splits a route set into the addresses to advertise and the addresses to withdraw.
///
/// Both lists are in ascending order, IPv4 ahead of IPv6, since a [RouteSet] iterates its keys
/// that way.
pub fn split_advertise_withdraw(routes: &RouteSet) -> (Vec<IpAddr>, Vec<IpAddr>) {
    routes.iter().partition_map(|(addr, up)| {
        if *up {
            Either::Left(*addr)
        } else {
            Either::Right(*addr)
        }
    })
}
