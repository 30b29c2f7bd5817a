//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use expresso_core::{
    application::ports::{DirState, Filesystem},
    domain::FileMode,
    error::ExpressoResult,
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExpressoResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str, mode: FileMode) -> ExpressoResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))?;

        #[cfg(unix)]
        {
            use std::fs::Permissions;
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(path, Permissions::from_mode(mode.unix_mode()))
                .map_err(|e| map_io_error(path, e, "set permissions"))?;
        }
        #[cfg(not(unix))]
        {
            // No mode bits to set; the write above is all there is.
            let _ = mode;
        }

        Ok(())
    }

    fn probe_dir(&self, path: &Path) -> ExpressoResult<DirState> {
        if !path.exists() {
            return Ok(DirState::Missing);
        }
        // A file occupying the destination counts as non-empty content.
        if !path.is_dir() {
            return Ok(DirState::NonEmpty);
        }
        let mut entries =
            std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
        Ok(if entries.next().is_some() {
            DirState::NonEmpty
        } else {
            DirState::Empty
        })
    }

    fn remove_dir_all(&self, path: &Path) -> ExpressoResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> expresso_core::error::ExpressoError {
    use expresso_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
