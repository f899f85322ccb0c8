use crate::{Sink, Source, Verdict};
use std::io;

/// Size of the scratch buffer each chunk is read into.
const CHUNK_BUFFER_SIZE: usize = 64 * 1024;

/// Forwards a [`Source`] to a [`Sink`] unchanged and classifies the run by
/// whether any bytes flowed.
///
/// The relay owns two pieces of state: the count of bytes seen so far and a
/// one-shot termination latch. Each chunk is counted and then written to the
/// sink, in arrival order, before the next chunk is read; nothing is buffered
/// beyond the chunk in flight. Termination is absorbing: once a run has ended,
/// by reaching end of input or by a stream error, the relay never touches the
/// streams again and never makes a second classification decision.
pub struct Relay<S: Source, K: Sink> {
    source: S,
    sink: K,
    bytes_seen: u64,
    terminated: bool,
    verdict: Option<Verdict>,
}

impl<S: Source, K: Sink> Relay<S, K> {
    /// Construct a new `Relay` forwarding `source` to `sink`.
    pub fn new(source: S, sink: K) -> Self {
        Self {
            source,
            sink,
            bytes_seen: 0,
            terminated: false,
            verdict: None,
        }
    }

    /// The number of bytes relayed so far.
    #[inline]
    pub fn bytes_seen(&self) -> u64 {
        self.bytes_seen
    }

    /// The recorded verdict, if the relay has terminated by reaching a
    /// normal end of input.
    #[inline]
    pub fn verdict(&self) -> Option<Verdict> {
        self.verdict
    }

    /// Gets a reference to the sink.
    #[inline]
    pub fn sink(&self) -> &K {
        &self.sink
    }

    /// Drive the relay until the input ends or a stream fails.
    ///
    /// Returns [`Verdict::Clean`] if the input ended without delivering any
    /// bytes, [`Verdict::Content`] if it delivered at least one; in either
    /// case every byte has already been written to the sink and the sink has
    /// been flushed. A source or sink error abandons the sink and propagates.
    ///
    /// Calling `run` again after termination makes no further reads or
    /// writes: it returns the recorded verdict, or an error if the first run
    /// failed.
    pub fn run(&mut self) -> io::Result<Verdict> {
        if self.terminated {
            return match self.verdict {
                Some(verdict) => Ok(verdict),
                None => Err(io::Error::new(
                    io::ErrorKind::Other,
                    "relay already terminated by a stream error",
                )),
            };
        }

        let mut buf = vec![0; CHUNK_BUFFER_SIZE];
        loop {
            let outcome = match self.source.read_chunk(&mut buf) {
                Ok(outcome) => outcome,
                Err(e) => return Err(self.fail(e)),
            };

            // Record the bytes before forwarding them, and forward them
            // before the next read.
            if outcome.size > 0 {
                self.bytes_seen += outcome.size as u64;
                if let Err(e) = self.sink.write_all(&buf[..outcome.size]) {
                    return Err(self.fail(e));
                }
            }
            if let Err(e) = self.sink.flush(outcome.status) {
                return Err(self.fail(e));
            }

            if outcome.status.is_end() {
                let verdict = Verdict::from_bytes_seen(self.bytes_seen);
                self.terminated = true;
                self.verdict = Some(verdict);
                return Ok(verdict);
            }
        }
    }

    fn fail(&mut self, e: io::Error) -> io::Error {
        self.sink.abandon();
        self.terminated = true;
        e
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ChunkOutcome, SliceSource, StdSink};
    use std::collections::VecDeque;

    /// A `Source` which delivers a fixed sequence of chunks, preserving the
    /// chunk boundaries, and panics if read again after its end.
    struct ScriptSource {
        chunks: VecDeque<Vec<u8>>,
        ended: bool,
    }

    impl ScriptSource {
        fn new(chunks: &[&[u8]]) -> Self {
            Self {
                chunks: chunks.iter().map(|c| c.to_vec()).collect(),
                ended: false,
            }
        }
    }

    impl Source for ScriptSource {
        fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome> {
            assert!(!self.ended, "read past end of script");
            match self.chunks.pop_front() {
                Some(chunk) => {
                    assert!(chunk.len() <= buf.len());
                    buf[..chunk.len()].copy_from_slice(&chunk);
                    Ok(ChunkOutcome::open(chunk.len()))
                }
                None => {
                    self.ended = true;
                    Ok(ChunkOutcome::end(0))
                }
            }
        }
    }

    /// A `Source` which delivers one chunk and then fails.
    struct FailingSource {
        chunk: Vec<u8>,
        delivered: bool,
    }

    impl Source for FailingSource {
        fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome> {
            if !self.delivered {
                self.delivered = true;
                buf[..self.chunk.len()].copy_from_slice(&self.chunk);
                return Ok(ChunkOutcome::open(self.chunk.len()));
            }
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken pipe"))
        }
    }

    #[test]
    fn empty_input_is_clean() {
        let mut relay = Relay::new(SliceSource::new(b""), StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Clean);
        assert_eq!(relay.bytes_seen(), 0);
        assert_eq!(relay.sink().get_ref(), b"");
    }

    #[test]
    fn content_is_mirrored() {
        let input = b"Error message here\n";
        let mut relay = Relay::new(SliceSource::new(input), StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        assert_eq!(relay.bytes_seen(), input.len() as u64);
        assert_eq!(relay.sink().get_ref(), input);
    }

    #[test]
    fn chunk_order_is_preserved() {
        let source = ScriptSource::new(&[b"foo", b"bar"]);
        let mut relay = Relay::new(source, StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        assert_eq!(relay.sink().get_ref(), b"foobar");
    }

    #[test]
    fn classification_ignores_byte_values() {
        let mut relay = Relay::new(SliceSource::new(&[0x00]), StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        assert_eq!(relay.sink().get_ref(), &[0x00]);
    }

    #[test]
    fn zero_size_open_reads_do_not_end_the_run() {
        // An interrupted read surfaces as a zero-size open outcome; the
        // relay keeps going and the classification is unaffected.
        struct Interrupted(ScriptSource, bool);
        impl Source for Interrupted {
            fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome> {
                if !self.1 {
                    self.1 = true;
                    return Ok(ChunkOutcome::open(0));
                }
                self.0.read_chunk(buf)
            }
        }
        let source = Interrupted(ScriptSource::new(&[b"data"]), false);
        let mut relay = Relay::new(source, StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        assert_eq!(relay.sink().get_ref(), b"data");
    }

    #[test]
    fn source_error_abandons_the_sink() {
        let source = FailingSource {
            chunk: b"partial".to_vec(),
            delivered: false,
        };
        let mut relay = Relay::new(source, StdSink::new(Vec::new()));
        let err = relay.run().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // Bytes relayed before the error were forwarded.
        assert_eq!(relay.sink().get_ref(), b"partial");
        assert_eq!(relay.verdict(), None);
    }

    #[test]
    fn termination_happens_once() {
        let source = ScriptSource::new(&[b"foo"]);
        let mut relay = Relay::new(source, StdSink::new(Vec::new()));
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        // A second run returns the recorded verdict without touching the
        // streams; the script source would panic if read past its end.
        assert_eq!(relay.run().unwrap(), Verdict::Content);
        assert_eq!(relay.sink().get_ref(), b"foo");
        assert_eq!(relay.bytes_seen(), 3);
    }

    #[test]
    fn termination_after_error_is_absorbing() {
        let source = FailingSource {
            chunk: Vec::new(),
            delivered: true,
        };
        let mut relay = Relay::new(source, StdSink::new(Vec::new()));
        assert!(relay.run().is_err());
        // No verdict is ever produced for a failed run.
        assert!(relay.run().is_err());
        assert_eq!(relay.verdict(), None);
    }
}
