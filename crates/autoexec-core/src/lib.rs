//! # autoexec-core
//!
//! Pure domain code for the Dota 2 autoexec generator: the setting catalog,
//! the answer set collected from the user, validation rules, the
//! `autoexec.cfg` renderer, and the per-platform list of install locations.
//!
//! Nothing in this crate touches the terminal or the filesystem.  The
//! `autoexec-gen` crate wires these pieces to stdin/stdout and to disk.
//!
//! # Architecture overview
//!
//! - **`domain::catalog`** – Which settings exist, grouped into ordered
//!   categories.  The order here is the prompt order and the output order.
//!
//! - **`domain::validation`** – The accept/reject predicate applied to every
//!   answer before it is stored.
//!
//! - **`domain::answers`** – The ordered key → value map built during a run.
//!
//! - **`domain::render`** – Turns an answer set plus keybinds into the final
//!   text document.
//!
//! - **`domain::platform`** – Maps an OS family to the directories where a
//!   Steam install of Dota 2 usually keeps its `cfg` folder.

pub mod domain;

pub use domain::answers::{Answer, AnswerSet};
pub use domain::catalog::{Catalog, CatalogError, Category, CategoryGate, SettingDefinition, ValueRange};
pub use domain::platform::{candidate_dirs, OsFamily, PlatformEnv};
pub use domain::render::{render_config, RenderedConfig, PROJECT_URL, TOOL_NAME};
pub use domain::validation::{validate_boolean, validate_numeric, ValidationError};
