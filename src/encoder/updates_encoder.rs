//! Rendering of route sets into UPDATE message bodies.
use crate::encoder::nlri::{partition_by_family, split_advertise_withdraw};
use crate::error::EncoderError;
use crate::models::*;
use crate::parser::bgp::attributes::*;
use bytes::{BufMut, Bytes, BytesMut};
use log::{debug, warn};

/// UPDATE bodies must be strictly shorter than this many bytes. It leaves room for the 19 byte
/// message header under the 4096 byte BGP message limit.
pub const MAX_UPDATE_BODY_SIZE: usize = 4000;

/// ORIGIN, AS_PATH (external), NEXT_HOP and LOCAL_PREF together never exceed this.
const FIXED_ATTRIBUTES_SIZE: usize = 4 + 7 + 7 + 7;

fn section_len(section: &'static str, size: usize) -> Result<u16, EncoderError> {
    u16::try_from(size).map_err(|_| EncoderError::SectionTooLarge { section, size })
}

impl Advert {
    fn encode_attributes(
        &self,
        advertise6: &[u8],
        withdraw6: &[u8],
    ) -> Result<Bytes, EncoderError> {
        let external = self.is_external();

        let communities_size = 4 + self.communities.len() * 4;
        let mp_size = 9 + self.next_hop6.wire_len() + advertise6.len() + 7 + withdraw6.len();
        let mut attrs =
            BytesMut::with_capacity(FIXED_ATTRIBUTES_SIZE + communities_size + 7 + mp_size);
        attrs.put_slice(&encode_origin(Origin::IGP));
        attrs.put_slice(&encode_as_path(self.asn, external));
        attrs.put_slice(&encode_next_hop(&self.next_hop));
        if !external {
            attrs.put_slice(&encode_local_pref(self.effective_local_pref()));
        }
        if !self.communities.is_empty() {
            attrs.put_slice(&encode_communities(&self.communities)?);
        }
        if self.med > 0 {
            attrs.put_slice(&encode_med(self.med));
        }
        if !advertise6.is_empty() {
            attrs.put_slice(&encode_mp_reach_nlri(&self.next_hop6, advertise6)?);
        }
        if !withdraw6.is_empty() {
            attrs.put_slice(&encode_mp_unreach_nlri(withdraw6)?);
        }
        Ok(attrs.freeze())
    }

    /// Render all of `routes` into a single UPDATE body, regardless of its size.
    ///
    /// ```text
    /// +-----------------------------------------------------+
    /// |   Withdrawn Routes Length (2 octets)                |
    /// +-----------------------------------------------------+
    /// |   Withdrawn Routes (variable)                       |
    /// +-----------------------------------------------------+
    /// |   Total Path Attribute Length (2 octets)            |
    /// +-----------------------------------------------------+
    /// |   Path Attributes (variable)                        |
    /// +-----------------------------------------------------+
    /// |   Network Layer Reachability Information (variable) |
    /// +-----------------------------------------------------+
    /// ```
    ///
    /// IPv6 routes travel in MP_REACH_NLRI and MP_UNREACH_NLRI. When nothing is advertised and
    /// only IPv4 routes are withdrawn, the path attributes are left out.
    pub fn render(&self, routes: &RouteSet) -> Result<Bytes, EncoderError> {
        let (advertise, withdraw) = split_advertise_withdraw(routes);
        let (advertise4, advertise6) = partition_by_family(&advertise);
        let (withdraw4, withdraw6) = partition_by_family(&withdraw);

        let attrs = if advertise4.is_empty() && advertise6.is_empty() && withdraw6.is_empty() {
            Bytes::new()
        } else {
            self.encode_attributes(&advertise6, &withdraw6)?
        };

        let mut body =
            BytesMut::with_capacity(4 + withdraw4.len() + attrs.len() + advertise4.len());
        body.put_u16(section_len("withdrawn routes", withdraw4.len())?);
        body.put_slice(&withdraw4);
        body.put_u16(section_len("path attributes", attrs.len())?);
        body.put_slice(&attrs);
        body.put_slice(&advertise4);
        Ok(body.freeze())
    }

    /// Render `routes` into as many UPDATE messages as needed to keep every body below
    /// [MAX_UPDATE_BODY_SIZE].
    ///
    /// A set that does not fit is halved by address order and each half rendered separately.
    /// If a single route still does not fit, the whole batch fails and no messages are returned.
    pub fn render_batch(&self, routes: &RouteSet) -> Result<Vec<BgpMessage>, EncoderError> {
        let mut messages = vec![];
        if routes.is_empty() {
            return Ok(messages);
        }

        match self.render_into(routes.clone(), &mut messages) {
            Ok(()) => Ok(messages),
            Err(e) => {
                warn!("failed to render {} routes: {}", routes.len(), e);
                Err(e)
            }
        }
    }

    fn render_into(
        &self,
        mut routes: RouteSet,
        out: &mut Vec<BgpMessage>,
    ) -> Result<(), EncoderError> {
        let rendered = self.render(&routes);
        if let Ok(body) = &rendered {
            if body.len() < MAX_UPDATE_BODY_SIZE {
                out.push(BgpMessage::Update(body.clone()));
                return Ok(());
            }
        }

        let pivot = match routes.keys().nth(routes.len() / 2) {
            Some(pivot) if routes.len() > 1 => *pivot,
            _ => {
                let body = rendered?;
                return match routes.keys().next() {
                    Some(prefix) => Err(EncoderError::UnsplittableRoute {
                        prefix: *prefix,
                        size: body.len(),
                    }),
                    None => Ok(()),
                };
            }
        };

        match &rendered {
            Ok(body) => debug!(
                "UPDATE body of {} bytes for {} routes exceeds {} bytes, splitting",
                body.len(),
                routes.len(),
                MAX_UPDATE_BODY_SIZE
            ),
            Err(e) => debug!("splitting {} routes after render failure: {}", routes.len(), e),
        }
        let upper = routes.split_off(&pivot);
        self.render_into(routes, out)?;
        self.render_into(upper, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::ReadUtils;
    use bytes::Buf;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
    use std::str::FromStr;

    fn addr(s: &str) -> IpAddr {
        IpAddr::from_str(s).unwrap()
    }

    fn v4_hosts(count: u32) -> impl Iterator<Item = IpAddr> {
        (0..count).map(|i| IpAddr::V4(Ipv4Addr::from(0x0A00_0000 + i)))
    }

    fn test_advert() -> Advert {
        Advert {
            local_pref: 123456789,
            ..Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3))
        }
    }

    fn test_routes() -> RouteSet {
        RouteSet::from([
            (addr("192.168.101.0"), true),
            (addr("192.168.101.1"), false),
        ])
    }

    fn read_prefixes(input: &mut Bytes, len: u8, out: &mut Vec<(IpAddr, bool)>, up: bool) {
        while input.has_remaining() {
            assert_eq!(input.read_u8().unwrap(), len);
            let ip = match len {
                32 => IpAddr::V4(input.read_ipv4_address().unwrap()),
                _ => {
                    let octets = input.read_n_bytes(16).unwrap();
                    IpAddr::V6(Ipv6Addr::from(<[u8; 16]>::try_from(octets.as_ref()).unwrap()))
                }
            };
            out.push((ip, up));
        }
    }

    /// Decodes the routes carried by an UPDATE body produced by [Advert::render].
    fn decode_routes(mut body: Bytes) -> Vec<(IpAddr, bool)> {
        let mut routes = vec![];
        let withdrawn_len = body.read_u16().unwrap() as usize;
        let mut withdrawn = body.read_n_bytes(withdrawn_len).unwrap();
        read_prefixes(&mut withdrawn, 32, &mut routes, false);

        let attrs_len = body.read_u16().unwrap() as usize;
        let mut attrs = body.read_n_bytes(attrs_len).unwrap();
        while attrs.has_remaining() {
            let flags = AttrFlags::from_bits_retain(attrs.read_u8().unwrap());
            let attr_type = attrs.read_u8().unwrap();
            let len = if flags.contains(AttrFlags::EXTENDED) {
                attrs.read_u16().unwrap() as usize
            } else {
                attrs.read_u8().unwrap() as usize
            };
            let mut value = attrs.read_n_bytes(len).unwrap();
            match AttrType::try_from(attr_type).unwrap() {
                AttrType::MP_REACHABLE_NLRI => {
                    value.advance(3);
                    let next_hop_len = value.read_u8().unwrap() as usize;
                    value.advance(next_hop_len + 1);
                    read_prefixes(&mut value, 128, &mut routes, true);
                }
                AttrType::MP_UNREACHABLE_NLRI => {
                    value.advance(3);
                    read_prefixes(&mut value, 128, &mut routes, false);
                }
                _ => {}
            }
        }

        read_prefixes(&mut body, 32, &mut routes, true);
        routes
    }

    fn decode_batch(messages: &[BgpMessage]) -> RouteSet {
        let mut routes = RouteSet::new();
        for msg in messages {
            assert_eq!(msg.msg_type(), 2);
            for (ip, up) in decode_routes(msg.body()) {
                assert!(routes.insert(ip, up).is_none(), "{} sent twice", ip);
            }
        }
        routes
    }

    #[test]
    fn test_render_internal() {
        let body = test_advert().render(&test_routes()).unwrap();
        assert_eq!(
            body.as_ref(),
            &[
                0, 5, // withdrawn routes length
                32, 192, 168, 101, 1, // withdrawn 192.168.101.1/32
                0, 21, // path attributes length
                0x40, 1, 1, 0, // ORIGIN IGP
                0x40, 2, 0, // empty AS_PATH
                0x40, 3, 4, 10, 1, 2, 3, // NEXT_HOP 10.1.2.3
                0x40, 5, 4, 7, 91, 205, 21, // LOCAL_PREF 123456789
                32, 192, 168, 101, 0, // NLRI 192.168.101.0/32
            ]
        );
    }

    #[test]
    fn test_render_external() {
        let advert = Advert {
            peer_asn: 65001,
            ..test_advert()
        };
        let body = advert.render(&test_routes()).unwrap();
        assert_eq!(
            body.as_ref(),
            &[
                0, 5, // withdrawn routes length
                32, 192, 168, 101, 1, // withdrawn 192.168.101.1/32
                0, 18, // path attributes length
                0x40, 1, 1, 0, // ORIGIN IGP
                0x40, 2, 4, 2, 1, 253, 232, // AS_PATH 65000
                0x40, 3, 4, 10, 1, 2, 3, // NEXT_HOP 10.1.2.3
                32, 192, 168, 101, 0, // NLRI 192.168.101.0/32
            ]
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let advert = test_advert();
        let routes = test_routes();
        assert_eq!(advert.render(&routes), advert.render(&routes));
        assert_eq!(advert.render_batch(&routes), advert.render_batch(&routes));
    }

    #[test]
    fn test_render_withdraw_only() {
        let routes = RouteSet::from([(addr("192.168.101.1"), false)]);
        let body = test_advert().render(&routes).unwrap();
        assert_eq!(body.as_ref(), &[0, 5, 32, 192, 168, 101, 1, 0, 0]);
    }

    #[test]
    fn test_render_ipv6() {
        let advert = Advert {
            next_hop6: NextHop6::Global(Ipv6Addr::from_str("2001:db8::1").unwrap()),
            multiprotocol: true,
            ..test_advert()
        };
        let routes = RouteSet::from([(addr("fd0b:2b0b:a7b8::1"), true)]);
        let body = advert.render(&routes).unwrap();
        // 21 bytes of fixed attributes + MP_REACH_NLRI(3 + 38)
        assert_eq!(&body[..4], &[0, 0, 0, 62]);
        assert_eq!(&body[25..32], &[0x80, 14, 38, 0, 2, 1, 16]);
        assert_eq!(body.len(), 66);
        assert_eq!(decode_routes(body), vec![(addr("fd0b:2b0b:a7b8::1"), true)]);

        // withdrawing IPv6 alone still needs the path attributes
        let routes = RouteSet::from([(addr("fd0b:2b0b:a7b8::1"), false)]);
        let body = advert.render(&routes).unwrap();
        assert_eq!(&body[..4], &[0, 0, 0, 44]);
        assert_eq!(&body[25..31], &[0x80, 15, 20, 0, 2, 1]);
        assert_eq!(decode_routes(body), vec![(addr("fd0b:2b0b:a7b8::1"), false)]);
    }

    #[test]
    fn test_render_communities_and_med() {
        let advert = Advert {
            peer_asn: 65001,
            med: 7,
            communities: vec![Community::NO_EXPORT],
            ..test_advert()
        };
        let routes = RouteSet::from([(addr("192.168.101.0"), true)]);
        let body = advert.render(&routes).unwrap();
        assert_eq!(
            &body[4..body.len() - 5],
            &[
                0x40, 1, 1, 0, // ORIGIN IGP
                0x40, 2, 4, 2, 1, 253, 232, // AS_PATH 65000
                0x40, 3, 4, 10, 1, 2, 3, // NEXT_HOP 10.1.2.3
                0xC0, 8, 4, 0xFF, 0xFF, 0xFF, 0x01, // COMMUNITIES NoExport
                0x80, 4, 4, 0, 0, 0, 7, // MED 7
            ]
        );
    }

    #[test]
    fn test_render_batch_empty() {
        assert_eq!(test_advert().render_batch(&RouteSet::new()), Ok(vec![]));
    }

    #[test]
    fn test_render_batch_single() {
        let messages = test_advert().render_batch(&test_routes()).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body(), test_advert().render(&test_routes()).unwrap());
    }

    #[test]
    fn test_render_batch_boundary() {
        // 4 bytes of lengths + 21 bytes of attributes + 5 bytes per route
        let advert = test_advert();
        let routes: RouteSet = v4_hosts(794).map(|ip| (ip, true)).collect();
        let messages = advert.render_batch(&routes).unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].body().len(), 3995);

        let routes: RouteSet = v4_hosts(795).map(|ip| (ip, true)).collect();
        assert_eq!(advert.render(&routes).unwrap().len(), MAX_UPDATE_BODY_SIZE);
        let messages = advert.render_batch(&routes).unwrap();
        assert_eq!(messages.len(), 2);
        // the lower half holds the first 397 addresses
        assert_eq!(messages[0].body().len(), 25 + 397 * 5);
        assert_eq!(messages[1].body().len(), 25 + 398 * 5);
        assert_eq!(decode_batch(&messages), routes);
    }

    #[test]
    fn test_render_batch_split_complete() {
        let advert = Advert {
            next_hop6: NextHop6::Global(Ipv6Addr::from_str("2001:db8::1").unwrap()),
            communities: vec![Community::new(65000, 100)],
            ..test_advert()
        };
        let mut routes: RouteSet = v4_hosts(2000).map(|ip| (ip, true)).collect();
        for i in 0..1000u128 {
            let ip = IpAddr::V6(Ipv6Addr::from(0xfd0b_2b0b_a7b8_0000_0000_0000_0000_0000 + i));
            routes.insert(ip, i % 3 != 0);
        }
        for i in 0..500u32 {
            routes.insert(IpAddr::V4(Ipv4Addr::from(0x0B00_0000 + i)), i % 2 == 0);
        }

        let messages = advert.render_batch(&routes).unwrap();
        assert!(messages.len() > 1);
        for msg in &messages {
            assert!(msg.body().len() < MAX_UPDATE_BODY_SIZE);
        }
        assert_eq!(decode_batch(&messages), routes);
        assert_eq!(advert.render_batch(&routes).unwrap(), messages);
    }

    #[test]
    fn test_render_batch_unsplittable() {
        let advert = Advert {
            communities: (0..1000).map(|i| Community::new(65000, i)).collect(),
            ..test_advert()
        };

        let routes = RouteSet::from([(addr("192.168.101.0"), true)]);
        // 4 + 21 + COMMUNITIES(4 + 4000) + 5
        assert_eq!(
            advert.render_batch(&routes),
            Err(EncoderError::UnsplittableRoute {
                prefix: addr("192.168.101.0"),
                size: 4034,
            })
        );

        // one bad route fails the whole batch
        let routes = test_routes();
        assert!(matches!(
            advert.render_batch(&routes),
            Err(EncoderError::UnsplittableRoute { .. })
        ));

        // withdrawing IPv4 carries no attributes, so it always fits
        let routes = RouteSet::from([(addr("192.168.101.1"), false)]);
        assert_eq!(advert.render_batch(&routes).unwrap().len(), 1);
    }

    #[test]
    fn test_render_batch_attribute_too_large() {
        let advert = Advert {
            communities: (0..16384).map(|i| Community::new(65000, i as u16)).collect(),
            ..test_advert()
        };
        let routes = RouteSet::from([(addr("192.168.101.0"), true)]);
        assert_eq!(
            advert.render_batch(&routes),
            Err(EncoderError::AttributeTooLarge {
                attr_type: AttrType::COMMUNITIES,
                size: 65536,
            })
        );
    }
}
