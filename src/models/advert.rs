//! Per-peer advertisement policy.
use crate::models::{BgpOpenMessage, Community, NextHop6};
use std::collections::BTreeMap;
use std::net::{IpAddr, Ipv4Addr};

/// LOCAL_PREF sent to internal peers when none is configured.
pub const DEFAULT_LOCAL_PREF: u32 = 100;

/// Snapshot of route intent: `true` to advertise a host route, `false` to withdraw it.
///
/// Keys iterate in ascending address order, IPv4 before IPv6.
pub type RouteSet = BTreeMap<IpAddr, bool>;

/// Overrides applied to an [Advert] for one batch of routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Parameters {
    pub communities: Vec<Community>,
    pub med: u32,
    /// Zero means "not set", see [Advert::effective_local_pref].
    pub local_pref: u32,
}

/// Static routing policy for one peering relationship.
///
/// An `Advert` is never modified by rendering, so a single value can be shared between sessions
/// as a read-only template and specialised with [Advert::with_parameters].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Advert {
    pub next_hop: Ipv4Addr,
    pub next_hop6: NextHop6,
    /// The speaker's own AS number.
    pub asn: u16,
    pub med: u32,
    pub communities: Vec<Community>,
    /// Zero means "not set", see [Advert::effective_local_pref].
    pub local_pref: u32,
    /// Whether the session negotiates multiprotocol (IPv6 unicast) capabilities.
    pub multiprotocol: bool,
    /// The remote peer's AS number.
    pub peer_asn: u16,
}

impl Default for Advert {
    fn default() -> Self {
        Advert {
            next_hop: Ipv4Addr::UNSPECIFIED,
            next_hop6: NextHop6::default(),
            asn: 0,
            med: 0,
            communities: vec![],
            local_pref: 0,
            multiprotocol: false,
            peer_asn: 0,
        }
    }
}

impl Advert {
    pub fn new(asn: u16, next_hop: Ipv4Addr) -> Self {
        Advert {
            asn,
            next_hop,
            peer_asn: asn,
            ..Default::default()
        }
    }

    /// Whether the peer is in a different autonomous system (eBGP).
    pub fn is_external(&self) -> bool {
        self.peer_asn != self.asn
    }

    pub fn effective_local_pref(&self) -> u32 {
        match self.local_pref {
            0 => DEFAULT_LOCAL_PREF,
            lp => lp,
        }
    }

    /// Returns a copy of this advert carrying the batch overrides and the peer's AS number.
    ///
    /// Communities, MED and local preference are replaced wholesale, so an empty community list
    /// in `params` clears the advert's defaults.
    pub fn with_parameters(&self, params: &Parameters, peer_asn: u16) -> Advert {
        Advert {
            communities: params.communities.clone(),
            med: params.med,
            local_pref: params.local_pref,
            peer_asn,
            ..self.clone()
        }
    }

    /// OPEN message for a session carrying this advert.
    pub fn open_message(&self, hold_time: u16, router_id: Ipv4Addr) -> BgpOpenMessage {
        BgpOpenMessage::new(self.asn, hold_time, router_id, self.multiprotocol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_advert() {
        let advert = Advert::default();
        assert_eq!(advert.next_hop, Ipv4Addr::UNSPECIFIED);
        assert_eq!(advert.next_hop6, NextHop6::default());
        assert!(advert.communities.is_empty());
        assert!(!advert.multiprotocol);
        assert!(!advert.is_external());
        assert_eq!(advert.effective_local_pref(), 100);

        let advert = Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(advert.peer_asn, 65000);
        assert_eq!(advert.med, 0);
    }

    #[test]
    fn test_external_is_derived() {
        let mut advert = Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3));
        assert!(!advert.is_external());
        advert.peer_asn = 65001;
        assert!(advert.is_external());
        advert.peer_asn = 65000;
        assert!(!advert.is_external());
    }

    #[test]
    fn test_effective_local_pref() {
        let mut advert = Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(advert.effective_local_pref(), 100);
        advert.local_pref = 123456789;
        assert_eq!(advert.effective_local_pref(), 123456789);
    }

    #[test]
    fn test_with_parameters_does_not_mutate() {
        let advert = Advert {
            med: 5,
            communities: vec![Community::new(65000, 1)],
            local_pref: 200,
            ..Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3))
        };
        let params = Parameters {
            communities: vec![Community::new(65000, 2), Community::NO_EXPORT],
            med: 10,
            local_pref: 0,
        };

        let derived = advert.with_parameters(&params, 65001);
        assert_eq!(derived.communities, params.communities);
        assert_eq!(derived.med, 10);
        assert_eq!(derived.effective_local_pref(), 100);
        assert_eq!(derived.peer_asn, 65001);
        assert!(derived.is_external());
        assert_eq!(derived.next_hop, advert.next_hop);

        assert_eq!(advert.communities, vec![Community::new(65000, 1)]);
        assert_eq!(advert.med, 5);
        assert_eq!(advert.peer_asn, 65000);
    }

    #[test]
    fn test_open_message() {
        let advert = Advert {
            multiprotocol: true,
            ..Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3))
        };
        let open = advert.open_message(30, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(open.version, 4);
        assert_eq!(open.asn, 65000);
        assert_eq!(open.hold_time, 30);
        assert!(open.multiprotocol);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_advert_serde() {
        let advert: Advert = serde_json::from_str(
            r#"{"next_hop": "10.1.2.3", "asn": 65000, "peer_asn": 65001, "communities": [4259840100]}"#,
        )
        .unwrap();
        assert_eq!(advert.next_hop, Ipv4Addr::new(10, 1, 2, 3));
        assert_eq!(advert.communities, vec![Community::new(65000, 100)]);
        assert!(advert.is_external());
        assert_eq!(advert.effective_local_pref(), 100);
    }
}
