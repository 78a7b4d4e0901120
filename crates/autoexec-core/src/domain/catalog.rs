//! The setting catalog: every console variable the generator asks about.
//!
//! A [`Catalog`] is an ordered list of [`Category`] values, each holding an
//! ordered list of [`SettingDefinition`]s, plus the keybind lines appended
//! verbatim to every generated file.  Order matters: it is both the order in
//! which the user is prompted and the order of lines in `autoexec.cfg`.
//!
//! The built-in table is returned by [`Catalog::builtin`].  A catalog may also
//! be parsed from TOML with [`Catalog::from_toml_str`]:
//!
//! ```toml
//! binds = ['bind "f7" disconnect']
//!
//! [[categories]]
//! name = "essentials"
//!
//! [[categories.settings]]
//! key = "con_enable"
//! name = "Enable Console"
//! default = "1"
//! range = ["0", "1"]
//! ```
//!
//! # Gated categories
//!
//! At most one category may carry a [`CategoryGate`].  The collector asks the
//! gate question first; answering `"1"` sets every setting in that category
//! to [`CategoryGate::forced_value`] without prompting.

use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use super::validation::{parse_number, validate_boolean, validate_numeric};

/// Error type for catalog parsing and consistency checks.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The TOML content could not be parsed into a catalog.
    #[error("failed to parse catalog TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// A range bound is not a number, or `min > max`.
    #[error("setting `{key}` has an invalid range {min}-{max}")]
    InvalidRange { key: String, min: String, max: String },

    /// A default value does not satisfy its own range.
    #[error("default `{default}` of `{key}` is outside its valid range")]
    DefaultOutOfRange { key: String, default: String },

    /// A gate's forced value does not fit a setting it would overwrite.
    #[error("forced value `{forced}` of gate `{gate}` is outside the range of `{key}`")]
    ForcedValueOutOfRange {
        gate: String,
        key: String,
        forced: String,
    },

    /// The same key appears twice (settings and gates share one namespace).
    #[error("duplicate setting key `{0}`")]
    DuplicateKey(String),

    /// More than one category declares a gate.
    #[error("only one category may be gated, found gates on `{first}` and `{second}`")]
    MultipleGates { first: String, second: String },
}

// ── Catalog schema types ──────────────────────────────────────────────────────

/// Inclusive numeric range, kept as the strings shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct ValueRange {
    pub min: String,
    pub max: String,
}

impl ValueRange {
    pub fn new(min: impl Into<String>, max: impl Into<String>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }

    /// Parsed `(min, max)`, or `None` when either bound is not a finite number.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        Some((parse_number(&self.min)?, parse_number(&self.max)?))
    }
}

impl From<(String, String)> for ValueRange {
    fn from((min, max): (String, String)) -> Self {
        Self { min, max }
    }
}

impl std::fmt::Display for ValueRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// One console variable the user is asked about.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SettingDefinition {
    /// Console variable name written to the file, e.g. `con_enable`.
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "default")]
    pub default_value: String,
    #[serde(rename = "range")]
    pub valid_range: ValueRange,
}

/// Upfront yes/no question that controls a whole category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryGate {
    /// Synthetic answer key; recorded but never rendered.
    pub key: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(default)]
    pub description: String,
    /// `"0"` or `"1"`.
    #[serde(rename = "default")]
    pub default_value: String,
    /// Value assigned to every setting in the category when the gate is `"1"`.
    #[serde(rename = "forced")]
    pub forced_value: String,
}

/// A named, ordered group of settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub name: String,
    #[serde(default)]
    pub gate: Option<CategoryGate>,
    #[serde(default)]
    pub settings: Vec<SettingDefinition>,
}

/// The complete, ordered table of settings plus the fixed keybind lines.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub binds: Vec<String>,
}

fn setting(key: &str, name: &str, desc: &str, default: &str, min: &str, max: &str) -> SettingDefinition {
    SettingDefinition {
        key: key.to_string(),
        display_name: name.to_string(),
        description: desc.to_string(),
        default_value: default.to_string(),
        valid_range: ValueRange::new(min, max),
    }
}

impl Catalog {
    /// The catalog shipped with the tool.
    pub fn builtin() -> Self {
        let essentials = Category {
            name: "essentials".to_string(),
            gate: None,
            settings: vec![
                setting("con_enable", "Enable Console", "", "1", "0", "1"),
                setting(
                    "dota_minimap_misclick_time",
                    "Minimap Misclick Threshold",
                    "Enable to ensure 100% minimap responsiveness.",
                    "0",
                    "0",
                    "1",
                ),
                setting(
                    "engine_no_focus_sleep",
                    "No Sleep When Out of Focus",
                    "Run full FPS while tabbed out. Essential for streaming.",
                    "1",
                    "0",
                    "1",
                ),
                setting(
                    "dota_camera_disable_zoom",
                    "Disable Camera Zoom",
                    "Prevents accidental zoom during crucial moments such as teamfights or laning.",
                    "1",
                    "0",
                    "1",
                ),
            ],
        };

        let subjective = Category {
            name: "subjective".to_string(),
            gate: None,
            settings: vec![
                setting(
                    "dota_minimap_creep_scale",
                    "Minimap Creep Scale",
                    "Increase for easier creepwave tracking (optional). Creep waves are crucial and having more awareness of them can be beneficial.",
                    "1",
                    "1",
                    "2",
                ),
                setting(
                    "dota_minimap_hero_size",
                    "Minimap Hero Icon Size",
                    "Adjusts hero icon size on minimap. Larger values are suggested in order to see icons easier. This setting is also adjustable in-game",
                    "1200",
                    "0",
                    "1200",
                ),
                setting(
                    "dota_minimap_ping_duration",
                    "Minimap Ping Duration",
                    "Suggested higher number for newer players, and lower number for players used to checking the minimap.",
                    "3",
                    "1",
                    "5",
                ),
                setting(
                    "dota_hud_healthbar_number",
                    "Show HP Number above health bar",
                    "Useful for calculating damage and survivability.",
                    "1",
                    "0",
                    "1",
                ),
                setting(
                    "dota_health_marker_major_alpha",
                    "Major HP Divider Opacity",
                    "Opacity for major health dividers.",
                    "255",
                    "0",
                    "255",
                ),
                setting(
                    "dota_health_marker_minor_alpha",
                    "Minor HP Divider Opacity",
                    "Opacity for minor health dividers.",
                    "128",
                    "0",
                    "255",
                ),
                setting(
                    "dota_health_per_vertical_marker",
                    "Health Segment Spacing",
                    "Spacing between vertical HP markers.",
                    "200",
                    "50",
                    "500",
                ),
            ],
        };

        let healthbar = Category {
            name: "healthbar".to_string(),
            gate: Some(CategoryGate {
                key: "instant_hp_update".to_string(),
                display_name: "Instantly Show HP Loss".to_string(),
                description: "If set to 1, all HP bar delays/animations will be disabled."
                    .to_string(),
                default_value: "1".to_string(),
                forced_value: "0".to_string(),
            }),
            settings: vec![
                setting(
                    "dota_health_hurt_decay_time_max",
                    "HP Bar Change Delay Max",
                    "Maximum delay for HP bar change animations.",
                    "0",
                    "0",
                    "10",
                ),
                setting(
                    "dota_health_hurt_decay_time_min",
                    "HP Bar Change Delay Min",
                    "Minimum delay for HP bar change animations.",
                    "0",
                    "0",
                    "10",
                ),
                setting(
                    "dota_health_hurt_delay",
                    "HP Bar Delay",
                    "General HP bar update delay.",
                    "0",
                    "0",
                    "5",
                ),
                setting(
                    "dota_pain_decay",
                    "HP Pain Decay",
                    "Decay rate for HP loss indicators.",
                    "0",
                    "0",
                    "1",
                ),
                setting(
                    "dota_pain_factor",
                    "HP Pain Factor",
                    "Factor influencing HP loss animation speed.",
                    "0",
                    "0",
                    "1",
                ),
                setting(
                    "dota_pain_multiplier",
                    "HP Pain Multiplier",
                    "Multiplier for HP damage flash effect.",
                    "0",
                    "0",
                    "1",
                ),
            ],
        };

        Self {
            categories: vec![essentials, subjective, healthbar],
            binds: vec![
                r#"bind "ctrl" "+dota_unit_movetodirection""#.to_string(),
                r#"bind "f7" disconnect"#.to_string(),
            ],
        }
    }

    /// Parses and validates a catalog from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for malformed TOML, or any consistency
    /// error reported by [`Catalog::validate`].
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        debug!(
            categories = catalog.categories.len(),
            settings = catalog.settings().count(),
            "parsed catalog"
        );
        Ok(catalog)
    }

    /// Checks ranges, defaults, key uniqueness, and the single-gate rule.
    ///
    /// # Errors
    ///
    /// Returns the first [`CatalogError`] found, in catalog order.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        let mut gated: Option<&str> = None;

        for category in &self.categories {
            if let Some(gate) = &category.gate {
                if let Some(first) = gated {
                    return Err(CatalogError::MultipleGates {
                        first: first.to_string(),
                        second: category.name.clone(),
                    });
                }
                gated = Some(category.name.as_str());

                if !seen.insert(gate.key.as_str()) {
                    return Err(CatalogError::DuplicateKey(gate.key.clone()));
                }
                if validate_boolean(&gate.default_value).is_err() {
                    return Err(CatalogError::DefaultOutOfRange {
                        key: gate.key.clone(),
                        default: gate.default_value.clone(),
                    });
                }
                for def in &category.settings {
                    if validate_numeric(&gate.forced_value, &def.valid_range).is_err() {
                        return Err(CatalogError::ForcedValueOutOfRange {
                            gate: gate.key.clone(),
                            key: def.key.clone(),
                            forced: gate.forced_value.clone(),
                        });
                    }
                }
            }

            for def in &category.settings {
                if !seen.insert(def.key.as_str()) {
                    return Err(CatalogError::DuplicateKey(def.key.clone()));
                }
                match def.valid_range.bounds() {
                    Some((min, max)) if min <= max => {}
                    _ => {
                        return Err(CatalogError::InvalidRange {
                            key: def.key.clone(),
                            min: def.valid_range.min.clone(),
                            max: def.valid_range.max.clone(),
                        })
                    }
                }
                if validate_numeric(&def.default_value, &def.valid_range).is_err() {
                    return Err(CatalogError::DefaultOutOfRange {
                        key: def.key.clone(),
                        default: def.default_value.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// All settings in prompt order, gates excluded.
    pub fn settings(&self) -> impl Iterator<Item = &SettingDefinition> {
        self.categories.iter().flat_map(|c| c.settings.iter())
    }

    /// Looks up a setting by key.
    pub fn setting(&self, key: &str) -> Option<&SettingDefinition> {
        self.settings().find(|s| s.key == key)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
