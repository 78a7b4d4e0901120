//! TOML catalog files (`--catalog <FILE>`).
//!
//! The file format is documented on [`autoexec_core::Catalog`].

use std::path::{Path, PathBuf};

use autoexec_core::{Catalog, CatalogError};
use thiserror::Error;
use tracing::info;

/// Error type for loading a catalog file.
#[derive(Debug, Error)]
pub enum CatalogLoadError {
    /// The file could not be read.
    #[error("I/O error reading catalog at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not a valid catalog.
    #[error("invalid catalog at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: CatalogError,
    },
}

/// Reads and validates the catalog at `path`.
///
/// # Errors
///
/// Returns [`CatalogLoadError::Io`] if the file cannot be read and
/// [`CatalogLoadError::Invalid`] if it fails to parse or validate.
pub fn load_catalog(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| CatalogLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let catalog = Catalog::from_toml_str(&content).map_err(|source| CatalogLoadError::Invalid {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "loaded catalog");
    Ok(catalog)
}
