/// Classification of a relay run which reached a normal end of input.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Verdict {
    /// The input ended without delivering any bytes.
    Clean,

    /// The input delivered at least one byte. The bytes have already been
    /// forwarded to the output stream.
    Content,
}

impl Verdict {
    /// Classify a run by its final byte count. Only emptiness matters; byte
    /// values do not.
    #[inline]
    pub fn from_bytes_seen(bytes_seen: u64) -> Self {
        if bytes_seen > 0 {
            Self::Content
        } else {
            Self::Clean
        }
    }

    /// The process exit code for this verdict: 0 for `Clean`, 1 for
    /// `Content`. Code 2 is reserved for stream errors and is never produced
    /// by a verdict.
    #[inline]
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Clean => 0,
            Self::Content => 1,
        }
    }
}

#[test]
fn test_classification() {
    assert_eq!(Verdict::from_bytes_seen(0), Verdict::Clean);
    assert_eq!(Verdict::from_bytes_seen(1), Verdict::Content);
    assert_eq!(Verdict::from_bytes_seen(u64::MAX), Verdict::Content);
    assert_eq!(Verdict::Clean.exit_code(), 0);
    assert_eq!(Verdict::Content.exit_code(), 1);
}
