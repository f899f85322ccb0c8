#![no_main]

use libfuzzer_sys::fuzz_target;
use pipe_exit::{Relay, SliceSource, StdSink, Verdict};

fuzz_target!(|data: &[u8]| {
    let mut relay = Relay::new(SliceSource::new(data), StdSink::new(Vec::new()));
    let verdict = relay.run().unwrap();
    assert_eq!(verdict, Verdict::from_bytes_seen(data.len() as u64));
    assert_eq!(relay.bytes_seen(), data.len() as u64);
    assert_eq!(relay.sink().get_ref(), data);
});
