//! Process-level support: trace logging

mod lazy_file_writer;
mod tracing;

pub use self::tracing::TracingLevel;
