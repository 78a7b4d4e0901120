//! Domain entities for the autoexec generator.
//!
//! Everything here is plain data plus pure functions, so it can be unit
//! tested without a terminal, a Steam install, or a writable directory.

pub mod answers;
pub mod catalog;
pub mod platform;
pub mod render;
pub mod validation;
