use crate::{ChunkOutcome, Source};
use std::io;

/// Adapts an `&[u8]` to implement [`Source`]. The stream reports its end
/// exactly when the slice is exhausted.
pub struct SliceSource<'slice> {
    slice: &'slice [u8],
}

impl<'slice> SliceSource<'slice> {
    /// Construct a new `SliceSource` which wraps `slice`.
    pub fn new(slice: &'slice [u8]) -> Self {
        Self { slice }
    }
}

impl<'slice> Source for SliceSource<'slice> {
    #[inline]
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome> {
        let size = io::Read::read(&mut self.slice, buf)?;
        Ok(ChunkOutcome::open_or_end(
            size,
            buf.is_empty() || !self.slice.is_empty(),
        ))
    }
}

#[test]
fn test_slice_source() {
    let mut source = SliceSource::new(b"abcdef");
    let mut buf = [0; 4];
    let outcome = source.read_chunk(&mut buf).unwrap();
    assert_eq!(outcome.size, 4);
    assert_eq!(&buf[..4], b"abcd");
    assert!(!outcome.status.is_end());
    let outcome = source.read_chunk(&mut buf).unwrap();
    assert_eq!(outcome.size, 2);
    assert_eq!(&buf[..2], b"ef");
    assert!(outcome.status.is_end());
    assert!(source.read_chunk(&mut buf).unwrap().status.is_end());
}
