//! Infrastructure layer - external concerns

pub mod entry_file;

pub use entry_file::{load_entries, parse_entries};
