/*!
bgp-rhi renders the health of a set of host routes into BGP-4 messages, for route health
injection from a load balancer or service node into its upstream routers.

# Rendering routes

A [RouteSet] maps each service address to whether it should currently be advertised (`true`) or
withdrawn (`false`). An [Advert] holds the static policy for one peering. Rendering produces the
bodies of UPDATE messages, split so that every body fits in a single BGP message:

```
use bgp_rhi::{Advert, RouteSet};
use std::net::Ipv4Addr;

let advert = Advert::new(65000, Ipv4Addr::new(10, 1, 2, 3));
let routes = RouteSet::from([
    ("192.168.101.0".parse().unwrap(), true),
    ("192.168.101.1".parse().unwrap(), false),
]);

for msg in advert.render_batch(&routes).unwrap() {
    // hand msg.msg_type() and msg.body() to the session transport
    assert_eq!(msg.msg_type(), 2);
}
```

Internal peers (same AS) receive LOCAL_PREF and an empty AS_PATH. External peers receive an
AS_PATH holding the speaker's AS. IPv6 routes are carried in MP_REACH_NLRI and MP_UNREACH_NLRI.

# Session messages

[BgpOpenMessage] and [BgpNotificationMessage] bodies can be encoded and parsed, and
[BgpMessage::from_parts] turns a type octet and body received from the transport back into a
message. Framing (marker, length and type header) is left to the transport.

# Features

- `serde`: Serialize/Deserialize for the policy types, so adverts can be loaded from configuration.
- `cli`: the `bgp-rhi` binary, which renders a JSON description of an advert and its routes.
*/

pub mod encoder;
pub mod error;
pub mod models;
pub mod parser;

pub use encoder::MAX_UPDATE_BODY_SIZE;
pub use error::{EncoderError, ParserError};
pub use models::*;
pub use parser::{parse_bgp_notification_message, parse_bgp_open_message};
