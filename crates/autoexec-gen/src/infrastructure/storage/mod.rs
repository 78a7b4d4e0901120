//! Storage infrastructure: reading catalog files from disk.
//!
//! Parsing and consistency checks live in `autoexec_core`; this module only
//! adds file I/O and the path to error messages.

pub mod catalog;
