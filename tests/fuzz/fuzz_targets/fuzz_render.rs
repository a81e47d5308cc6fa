#![no_main]
use arbitrary::Arbitrary;
use bgp_rhi::{Advert, Community, RouteSet, MAX_UPDATE_BODY_SIZE};
use libfuzzer_sys::fuzz_target;
use std::net::{IpAddr, Ipv4Addr};

#[derive(Arbitrary, Debug)]
struct Input {
    asn: u16,
    peer_asn: u16,
    med: u32,
    local_pref: u32,
    communities: Vec<u32>,
    routes: Vec<(IpAddr, bool)>,
}

fuzz_target!(|input: Input| {
    let advert = Advert {
        peer_asn: input.peer_asn,
        med: input.med,
        local_pref: input.local_pref,
        communities: input.communities.into_iter().map(Community::from).collect(),
        ..Advert::new(input.asn, Ipv4Addr::new(192, 0, 2, 1))
    };
    let routes: RouteSet = input.routes.into_iter().collect();
    if let Ok(messages) = advert.render_batch(&routes) {
        for msg in messages {
            assert!(msg.body().len() < MAX_UPDATE_BODY_SIZE);
        }
    }
});
