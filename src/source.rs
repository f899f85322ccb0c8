use crate::Status;
use std::io;

/// A stream of byte chunks. Like [`std::io::Read`], but `read_chunk` reports
/// the stream's status alongside the size, and zero is not special-cased: a
/// zero-size outcome on an open stream means "nothing this time", not end of
/// input.
pub trait Source {
    /// Read the next chunk into `buf`, returning how many bytes arrived and
    /// what to expect from future reads.
    fn read_chunk(&mut self, buf: &mut [u8]) -> io::Result<ChunkOutcome>;
}

/// Information returned after a successful read.
#[derive(Clone, Debug)]
pub struct ChunkOutcome {
    /// The number of bytes read.
    pub size: usize,

    /// What to expect from future reads from the stream.
    pub status: Status,
}

impl ChunkOutcome {
    /// Data was read on a stream which remains open.
    #[inline]
    pub fn open(size: usize) -> Self {
        Self {
            size,
            status: Status::Open,
        }
    }

    /// Data was read on a stream which may or may not remain open.
    #[inline]
    pub fn open_or_end(size: usize, open: bool) -> Self {
        Self {
            size,
            status: Status::open_or_end(open),
        }
    }

    /// Data was read on a stream which is now closed.
    #[inline]
    pub fn end(size: usize) -> Self {
        Self {
            size,
            status: Status::End,
        }
    }
}
