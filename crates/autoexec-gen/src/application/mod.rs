//! Application layer: the use cases behind one generator run.
//!
//! - [`collect_answers`] walks the catalog and asks the user for each value.
//! - [`generate`] strings together locate → collect → render → write.
//!
//! Both talk to the outside world only through the traits they define
//! ([`collect_answers::Prompt`], [`generate::InstallLocator`],
//! [`generate::ConfigWriter`]).  Implementations live in `infrastructure`.

pub mod collect_answers;
pub mod generate;
