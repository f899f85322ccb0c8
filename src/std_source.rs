use crate::{ChunkOutcome, Source};
use std::io;

/// Adapts an [`std::io::Read`] to implement [`Source`].
///
/// End of input is sticky: once the inner reader first reports it, every
/// future `read_chunk` returns an end outcome without touching the inner
/// reader again. This guarantees exactly one end observation even for an
/// input which is closed before delivering any bytes.
pub struct StdSource<Inner: io::Read> {
    inner: Inner,
    ended: bool,
}

impl<Inner: io::Read> StdSource<Inner> {
    /// Construct a new `StdSource` which wraps `inner`.
    pub fn new(inner: Inner) -> Self {
        Self {
            inner,
            ended: false,
        }
    }
}

impl<Inner: io::Read> Source for StdSource<Inner> {
    #[inline]
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome> {
        if self.ended {
            return Ok(ChunkOutcome::end(0));
        }
        match self.inner.read(buf) {
            Ok(0) if !buf.is_empty() => {
                self.ended = true;
                Ok(ChunkOutcome::end(0))
            }
            Ok(size) => Ok(ChunkOutcome::open(size)),
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => Ok(ChunkOutcome::open(0)),
            Err(e) => Err(e),
        }
    }
}

#[test]
fn test_std_source() {
    let mut input = io::Cursor::new(b"hello world");
    let mut source = StdSource::new(&mut input);
    let mut buf = [0; 32];
    let outcome = source.read_chunk(&mut buf).unwrap();
    assert_eq!(outcome.size, 11);
    assert_eq!(&buf[..outcome.size], b"hello world");
    assert!(!outcome.status.is_end());
    assert!(source.read_chunk(&mut buf).unwrap().status.is_end());
    // End is sticky.
    assert!(source.read_chunk(&mut buf).unwrap().status.is_end());
}

#[test]
fn test_std_source_empty() {
    let mut input = io::Cursor::new(b"");
    let mut source = StdSource::new(&mut input);
    let mut buf = [0; 32];
    let outcome = source.read_chunk(&mut buf).unwrap();
    assert_eq!(outcome.size, 0);
    assert!(outcome.status.is_end());
}
