//! End-to-end conversion from the two dumps to a graph document

mod config;
mod engine;
mod error;

pub use config::{ConvertConfig, DEFAULT_MAX_NODES};
pub use engine::{assemble, write_document, ConvertSummary, Converter};
pub use error::{ConvertError, ConvertResult};
