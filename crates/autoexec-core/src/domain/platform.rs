//! Where a Steam install of Dota 2 keeps its `cfg` directory, per platform.
//!
//! [`candidate_dirs`] is a pure function of an [`OsFamily`] and a
//! [`PlatformEnv`] snapshot, so every platform's list can be tested on any
//! host.  Probing the filesystem is left to the caller.
//!
//! Every candidate ends in `steamapps/common/dota 2 beta/game/dota/cfg`.

use std::path::{Path, PathBuf};

/// Path below a Steam root that leads to the Dota 2 `cfg` directory.
const DOTA_CFG_SUFFIX: [&str; 6] = ["steamapps", "common", "dota 2 beta", "game", "dota", "cfg"];

const DEFAULT_PROGRAM_FILES_X86: &str = r"C:\Program Files (x86)";
const DEFAULT_PROGRAM_FILES: &str = r"C:\Program Files";

/// Steam roots tried on Windows after the `%ProgramFiles%` based ones.
const WINDOWS_FIXED_STEAM_ROOTS: [&str; 3] =
    [r"C:\Program Files\Steam", r"D:\Steam", r"E:\Steam"];

/// Operating system families with a known install layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    /// Program Files based Steam roots plus a few fixed drive letters.
    Windows,
    /// `~/Library/Application Support/Steam`.
    MacOs,
    /// `~/.steam/steam` and `~/.local/share/Steam`.
    Linux,
    /// Anything else; no candidates.
    Other,
}

impl OsFamily {
    /// Maps a [`std::env::consts::OS`] value to a family.
    pub fn from_os_name(name: &str) -> Self {
        match name {
            "windows" => Self::Windows,
            "macos" => Self::MacOs,
            "linux" => Self::Linux,
            _ => Self::Other,
        }
    }

    /// The family this binary was compiled for.
    pub fn current() -> Self {
        Self::from_os_name(std::env::consts::OS)
    }
}

/// Environment values the candidate list depends on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformEnv {
    /// User home directory (`HOME` / `USERPROFILE`).
    pub home: Option<PathBuf>,
    /// `%ProgramFiles%`.
    pub program_files: Option<PathBuf>,
    /// `%ProgramFiles(x86)%`.
    pub program_files_x86: Option<PathBuf>,
}

fn dota_cfg_under(steam_root: &Path) -> PathBuf {
    DOTA_CFG_SUFFIX
        .iter()
        .fold(steam_root.to_path_buf(), |path, part| path.join(part))
}

/// Ordered list of likely `cfg` directories for `family`.
///
/// Home-relative candidates are omitted when `env.home` is `None`.
/// [`OsFamily::Other`] always yields an empty list.
pub fn candidate_dirs(family: OsFamily, env: &PlatformEnv) -> Vec<PathBuf> {
    match family {
        OsFamily::Windows => {
            let pf86 = env
                .program_files_x86
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_FILES_X86));
            let pf = env
                .program_files
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROGRAM_FILES));

            [pf86.join("Steam"), pf.join("Steam")]
                .into_iter()
                .chain(WINDOWS_FIXED_STEAM_ROOTS.into_iter().map(PathBuf::from))
                .map(|root| dota_cfg_under(&root))
                .collect()
        }
        OsFamily::MacOs => env
            .home
            .iter()
            .map(|home| {
                dota_cfg_under(
                    &home
                        .join("Library")
                        .join("Application Support")
                        .join("Steam"),
                )
            })
            .collect(),
        OsFamily::Linux => env
            .home
            .iter()
            .flat_map(|home| {
                [
                    home.join(".steam").join("steam"),
                    home.join(".local").join("share").join("Steam"),
                ]
            })
            .map(|root| dota_cfg_under(&root))
            .collect(),
        OsFamily::Other => Vec::new(),
    }
}
