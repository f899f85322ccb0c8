use crate::{Sink, Status};
use std::io;

/// Adapts a [`std::io::Write`] to implement [`Sink`].
pub struct StdSink<Inner: io::Write> {
    inner: Inner,
    ended: bool,
}

impl<Inner: io::Write> StdSink<Inner> {
    /// Construct a new instance of `StdSink` wrapping `inner`.
    pub fn new(inner: Inner) -> Self {
        Self {
            inner,
            ended: false,
        }
    }

    /// Gets a reference to the underlying writer.
    pub fn get_ref(&self) -> &Inner {
        &self.inner
    }
}

impl<Inner: io::Write> Sink for StdSink<Inner> {
    #[inline]
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write(buf)
    }

    #[inline]
    fn flush(&mut self, status: Status) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        if status.is_end() {
            self.ended = true;
        }
        self.inner.flush()
    }

    #[inline]
    fn abandon(&mut self) {
        self.ended = true;
    }

    #[inline]
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        if self.ended {
            return Err(stream_already_ended());
        }
        self.inner.write_all(buf)
    }
}

fn stream_already_ended() -> io::Error {
    io::Error::new(io::ErrorKind::Other, "stream has already ended")
}

#[test]
fn test_std_sink() {
    let mut sink = StdSink::new(Vec::new());
    sink.write_all(b"hello").unwrap();
    sink.flush(Status::Open).unwrap();
    sink.write_all(b" world").unwrap();
    sink.flush(Status::End).unwrap();
    assert_eq!(sink.get_ref(), b"hello world");

    // The end declaration latches; later writes fail.
    assert!(sink.write_all(b"more").is_err());
    assert!(sink.flush(Status::Open).is_err());
}

#[test]
fn test_std_sink_abandon() {
    let mut sink = StdSink::new(Vec::new());
    sink.write_all(b"partial").unwrap();
    sink.abandon();
    assert!(sink.write_all(b"more").is_err());
    assert_eq!(sink.get_ref(), b"partial");
}
