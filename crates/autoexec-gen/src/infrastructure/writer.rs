//! Writes `autoexec.cfg`, keeping one backup of the previous file.
//!
//! Steps, in order:
//!
//! 1. Create the output directory and its parents.  Failure is fatal.
//! 2. If `autoexec.cfg` already exists, rename it to `old-autoexec.cfg`,
//!    replacing any older backup.  If the existence check itself fails
//!    (e.g. permissions) the file is treated as absent.  A failed rename is
//!    logged and the write goes ahead.
//! 3. Write the new document over `autoexec.cfg`.
//!
//! There is no temp-file-and-rename step; a crash mid-write can leave a
//! truncated file.

use std::path::Path;

use tracing::{debug, info, warn};

use crate::application::generate::{
    ConfigWriter, WriteError, WriteReport, BACKUP_FILE_NAME, CONFIG_FILE_NAME,
};

/// [`ConfigWriter`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct FsConfigWriter;

impl FsConfigWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigWriter for FsConfigWriter {
    fn write(&self, dir: &Path, content: &str) -> Result<WriteReport, WriteError> {
        std::fs::create_dir_all(dir).map_err(|source| WriteError::CreateDir {
            path: dir.to_path_buf(),
            source,
        })?;

        let path = dir.join(CONFIG_FILE_NAME);
        let backup_path = dir.join(BACKUP_FILE_NAME);

        let backup = match std::fs::metadata(&path) {
            Ok(_) => match std::fs::rename(&path, &backup_path) {
                Ok(()) => {
                    info!(from = %path.display(), to = %backup_path.display(), "backed up existing config");
                    Some(backup_path)
                }
                Err(e) => {
                    warn!(path = %path.display(), "could not back up existing config: {e}");
                    None
                }
            },
            Err(e) => {
                debug!(path = %path.display(), "no existing config to back up: {e}");
                None
            }
        };

        std::fs::write(&path, content).map_err(|source| WriteError::Write {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), bytes = content.len(), "wrote config");

        Ok(WriteReport {
            path,
            bytes: content.len(),
            backup,
        })
    }
}
