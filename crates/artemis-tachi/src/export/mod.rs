//! Tachi batch-manual document model and file output.

mod document;
mod writer;

pub use document::*;
pub use writer::*;
