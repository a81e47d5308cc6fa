/*!
Provides encoding of BGP path attributes and parsing of OPEN and NOTIFICATION messages.
*/
pub mod attributes;
pub mod messages;

pub use messages::{parse_bgp_notification_message, parse_bgp_open_message};
