//! Utility modules

pub mod file_store;

pub use file_store::{read_lines, swap_path, write_lines_atomic, SWAP_SUFFIX};
