//! Steam install detection.
//!
//! Candidates come from [`autoexec_core::candidate_dirs`].  A candidate
//! counts as found when its parent game directory (`.../game/dota`) exists;
//! the `cfg` directory itself may be missing on a fresh install and is
//! created later by the writer.

use std::path::PathBuf;

use autoexec_core::{candidate_dirs, OsFamily, PlatformEnv};
use tracing::{debug, info};

use crate::application::generate::InstallLocator;

/// Reads the environment variables [`candidate_dirs`] depends on.
pub fn platform_env_from_process() -> PlatformEnv {
    let home = std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .or_else(|| std::env::var_os("USERPROFILE").filter(|h| !h.is_empty()))
        .map(PathBuf::from);

    PlatformEnv {
        home,
        program_files: std::env::var_os("ProgramFiles").map(PathBuf::from),
        program_files_x86: std::env::var_os("ProgramFiles(x86)").map(PathBuf::from),
    }
}

/// Probes an ordered list of `cfg` directories; first hit wins.
#[derive(Debug, Clone)]
pub struct SteamLocator {
    candidates: Vec<PathBuf>,
}

impl SteamLocator {
    pub fn new(candidates: Vec<PathBuf>) -> Self {
        Self { candidates }
    }

    /// Candidates for the running OS and the current environment.
    pub fn for_current_platform() -> Self {
        Self::new(candidate_dirs(OsFamily::current(), &platform_env_from_process()))
    }

    pub fn candidates(&self) -> &[PathBuf] {
        &self.candidates
    }
}

impl InstallLocator for SteamLocator {
    fn locate(&self) -> Option<PathBuf> {
        for cfg_dir in &self.candidates {
            let Some(game_dir) = cfg_dir.parent() else {
                continue;
            };
            if game_dir.is_dir() {
                info!(path = %game_dir.display(), "found Dota 2 installation");
                return Some(cfg_dir.clone());
            }
            debug!(path = %game_dir.display(), "no installation at candidate");
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use uuid::Uuid;

    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("autoexec_locator_{}", Uuid::new_v4()))
    }

    fn cfg_under(root: &Path) -> PathBuf {
        root.join("game").join("dota").join("cfg")
    }

    #[test]
    fn test_locate_returns_none_when_no_candidate_exists() {
        let root = scratch_dir();
        let locator = SteamLocator::new(vec![cfg_under(&root.join("a")), cfg_under(&root.join("b"))]);
        assert_eq!(locator.locate(), None);
    }

    #[test]
    fn test_locate_returns_none_for_empty_candidate_list() {
        assert_eq!(SteamLocator::new(Vec::new()).locate(), None);
    }

    #[test]
    fn test_locate_accepts_existing_game_dir_without_cfg() {
        // Arrange: only game/dota exists, cfg does not
        let root = scratch_dir();
        let cfg = cfg_under(&root);
        std::fs::create_dir_all(cfg.parent().unwrap()).unwrap();

        // Act
        let found = SteamLocator::new(vec![cfg.clone()]).locate();

        // Assert
        assert_eq!(found, Some(cfg));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_locate_first_existing_candidate_wins() {
        let root = scratch_dir();
        let missing = cfg_under(&root.join("missing"));
        let second = cfg_under(&root.join("second"));
        let third = cfg_under(&root.join("third"));
        std::fs::create_dir_all(second.parent().unwrap()).unwrap();
        std::fs::create_dir_all(third.parent().unwrap()).unwrap();

        let found = SteamLocator::new(vec![missing, second.clone(), third]).locate();

        assert_eq!(found, Some(second));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_locate_ignores_game_path_that_is_a_file() {
        let root = scratch_dir();
        let cfg = cfg_under(&root);
        let game_dir = cfg.parent().unwrap();
        std::fs::create_dir_all(game_dir.parent().unwrap()).unwrap();
        std::fs::write(game_dir, b"not a directory").unwrap();

        assert_eq!(SteamLocator::new(vec![cfg]).locate(), None);

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_for_current_platform_candidates_end_in_cfg() {
        let locator = SteamLocator::for_current_platform();
        for candidate in locator.candidates() {
            assert!(candidate.ends_with("cfg"), "{candidate:?}");
        }
    }
}
