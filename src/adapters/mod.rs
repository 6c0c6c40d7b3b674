// Adapters layer: concrete input sources and report sinks.

pub mod sinks;
pub mod sources;

pub use sinks::{AnySink, FileSink, StdoutSink};
pub use sources::{AnySource, FileSource, MemorySource, StdinSource};
