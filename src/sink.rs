use crate::Status;
use std::io;

/// A byte stream accepting forwarded chunks. Like [`std::io::Write`], but
/// `flush` has a status parameter declaring the future of the stream, and
/// there is an explicit way to abandon the stream after an unrecoverable
/// error.
pub trait Sink {
    /// Like [`std::io::Write::write`].
    fn write(&mut self, buf: &[u8]) -> io::Result<usize>;

    /// Like [`std::io::Write::flush`], but has a status parameter describing
    /// the future of the stream:
    ///  - `Status::Open`: flush the underlying stream
    ///  - `Status::End`: flush the underlying stream and declare the end
    fn flush(&mut self, status: Status) -> io::Result<()>;

    /// Discard any buffered bytes and declare an intention to cease using
    /// this stream. Use after an unrecoverable error.
    fn abandon(&mut self);

    /// Like [`std::io::Write::write_all`].
    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        default_write_all(self, buf)
    }
}

/// Default implementation of `Sink::write_all`.
pub fn default_write_all<Inner: Sink + ?Sized>(
    inner: &mut Inner,
    mut buf: &[u8],
) -> io::Result<()> {
    while !buf.is_empty() {
        match inner.write(buf) {
            Ok(0) => {
                return Err(io::Error::new(
                    io::ErrorKind::WriteZero,
                    "failed to write whole buffer",
                ));
            }
            Ok(n) => buf = &buf[n..],
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(())
}
