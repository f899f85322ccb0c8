/// What is known about a stream in the future.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Status {
    /// The stream remains open. More bytes may be transmitted.
    Open,

    /// The stream has ended. No more bytes will be transmitted.
    End,
}

impl Status {
    /// Return either `Status::Open` or `Status::End`.
    #[inline]
    pub fn open_or_end(open: bool) -> Self {
        if open {
            Self::Open
        } else {
            Self::End
        }
    }

    /// Shorthand for testing equality with `Status::End`.
    #[inline]
    pub fn is_end(&self) -> bool {
        *self == Self::End
    }
}
