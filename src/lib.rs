//! Streams relayed from input to output, classified by emptiness.
//!
//! The [`Relay`] forwards every byte it reads from a [`Source`] to a
//! [`Sink`], unchanged and in order, and remembers whether it saw any bytes
//! at all. When the input ends it produces a [`Verdict`]: [`Verdict::Clean`]
//! if the stream delivered nothing, [`Verdict::Content`] otherwise. The
//! `pipe-exit` binary wires stdin and stdout into a relay and turns the
//! verdict into its process exit code, so a shell pipeline can test a
//! command's combined output for emptiness while still seeing that output.

#![deny(missing_docs)]

mod relay;
mod sink;
mod slice_source;
mod source;
mod status;
mod std_sink;
mod std_source;
mod verdict;

pub use relay::Relay;
pub use sink::{default_write_all, Sink};
pub use slice_source::SliceSource;
pub use source::{ChunkOutcome, Source};
pub use status::Status;
pub use std_sink::StdSink;
pub use std_source::StdSource;
pub use verdict::Verdict;
