/*!
Wire-format helpers and the BGP message codecs.
*/
pub mod bgp;
pub mod utils;

pub use self::utils::*;
pub use bgp::messages::{parse_bgp_notification_message, parse_bgp_open_message};
