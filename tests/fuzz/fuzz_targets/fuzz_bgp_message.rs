#![no_main]
use bgp_rhi::BgpMessage;
use bytes::Bytes;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Some((msg_type, body)) = data.split_first() {
        if let Ok(BgpMessage::Open(open)) =
            BgpMessage::from_parts(*msg_type, Bytes::copy_from_slice(body))
        {
            let _ = open.capabilities();
        }
    }
});
