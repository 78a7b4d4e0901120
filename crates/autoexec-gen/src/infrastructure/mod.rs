//! Infrastructure layer for the generator.
//!
//! Contains OS-facing adapters: the terminal prompt, the Steam install
//! locator, the config file writer, and catalog file loading.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `autoexec_core`, but MUST NOT be imported by the `application` layer
//! outside of its tests.

pub mod locator;
pub mod prompt;
pub mod storage;
pub mod writer;
