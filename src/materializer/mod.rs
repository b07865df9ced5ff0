mod materializer;
mod report;

pub use materializer::{FilesystemError, Summary, materialize};
pub use report::{Reporter, StdoutReporter};
