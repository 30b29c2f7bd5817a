//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use expresso_core::{
    application::ports::{DirState, Filesystem},
    domain::FileMode,
    error::{ExpressoError, ExpressoResult},
};

/// In-memory filesystem for testing.
///
/// Cloning shares the underlying state, so a test can hold a handle while
/// a service owns a boxed clone.
#[derive(Debug, Clone)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    modes: HashMap<PathBuf, FileMode>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(MemoryFilesystemInner::default())),
        }
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// Mode of a written file (testing helper).
    pub fn mode_of(&self, path: &Path) -> Option<FileMode> {
        let inner = self.inner.read().ok()?;
        inner.modes.get(path).copied()
    }

    /// List all files, sorted (testing helper).
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<PathBuf> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }
}

impl Default for MemoryFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

fn lock_poisoned() -> ExpressoError {
    ExpressoError::Internal {
        message: "memory filesystem lock poisoned".into(),
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> ExpressoResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }

        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str, mode: FileMode) -> ExpressoResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        // Ensure parent exists, like the real filesystem would.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(expresso_core::application::ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "Parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        inner.modes.insert(path.to_path_buf(), mode);
        Ok(())
    }

    fn probe_dir(&self, path: &Path) -> ExpressoResult<DirState> {
        let inner = self.inner.read().map_err(|_| lock_poisoned())?;

        let occupied = inner
            .files
            .keys()
            .any(|p| p.starts_with(path) && p != path)
            || inner
                .directories
                .iter()
                .any(|d| d.starts_with(path) && d != path);

        if occupied {
            Ok(DirState::NonEmpty)
        } else if inner.directories.contains(path) {
            Ok(DirState::Empty)
        } else {
            Ok(DirState::Missing)
        }
    }

    fn remove_dir_all(&self, path: &Path) -> ExpressoResult<()> {
        let mut inner = self.inner.write().map_err(|_| lock_poisoned())?;

        inner.directories.retain(|d| !d.starts_with(path));
        inner.files.retain(|p, _| !p.starts_with(path));
        inner.modes.retain(|p, _| !p.starts_with(path));

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn probe_reports_all_three_states() {
        let fs = MemoryFilesystem::new();
        let dir = Path::new("out/app");

        assert_eq!(fs.probe_dir(dir).unwrap(), DirState::Missing);

        fs.create_dir_all(dir).unwrap();
        assert_eq!(fs.probe_dir(dir).unwrap(), DirState::Empty);

        fs.write_file(&dir.join("f"), "x", FileMode::Regular).unwrap();
        assert_eq!(fs.probe_dir(dir).unwrap(), DirState::NonEmpty);
    }

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs
            .write_file(Path::new("no/parent/file"), "x", FileMode::Regular)
            .is_err());
    }

    #[test]
    fn remove_dir_all_clears_subtree_only() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("a/b")).unwrap();
        fs.create_dir_all(Path::new("c")).unwrap();
        fs.write_file(Path::new("a/b/f"), "x", FileMode::Regular).unwrap();
        fs.write_file(Path::new("c/g"), "y", FileMode::Regular).unwrap();

        fs.remove_dir_all(Path::new("a")).unwrap();
        assert_eq!(fs.probe_dir(Path::new("a")).unwrap(), DirState::Missing);
        assert!(fs.read_file(Path::new("c/g")).is_some());
    }
}
