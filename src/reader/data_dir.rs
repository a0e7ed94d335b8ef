//! The data directory that all file-backed tools read from.

use std::path::{Component, Path, PathBuf};

use super::ReaderError;

/// Base directory under which tool filenames are resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Create a data directory rooted at `root`. The directory is not touched.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The directory filenames are resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fail unless the root exists and is a directory.
    pub fn ensure_exists(&self) -> Result<(), ReaderError> {
        let metadata = std::fs::metadata(&self.root)?;
        if !metadata.is_dir() {
            return Err(ReaderError::Io(std::io::Error::new(
                std::io::ErrorKind::NotADirectory,
                format!("{} is not a directory", self.root.display()),
            )));
        }
        Ok(())
    }

    /// Resolve a caller-supplied filename to a path inside the data directory.
    ///
    /// Only relative names without `..` are accepted. The file itself is not
    /// required to exist; readers report missing files in their own terms.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf, ReaderError> {
        let relative = Path::new(filename);
        if filename.is_empty() || filename.contains('\0') {
            return Err(ReaderError::InvalidPath(filename.to_string()));
        }

        for component in relative.components() {
            match component {
                Component::Normal(_) | Component::CurDir => {}
                Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                    return Err(ReaderError::InvalidPath(filename.to_string()));
                }
            }
        }

        Ok(self.root.join(relative))
    }
}
