//! Filesystem-based provider for a folder of symbol images.
//!
//! # Security
//!
//! Every resolved path must stay inside the image folder, so a symbol file
//! name can never reach `../../etc/passwd` or an absolute path.

use dobble_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Loads symbol images from an image folder on disk.
#[derive(Debug)]
pub struct FilesystemResourceProvider {
    root: PathBuf,
    /// `None` when the folder did not exist at construction time
    canonical_root: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref().to_path_buf();
        let canonical_root = root.canonicalize().ok();
        if canonical_root.is_none() {
            log::warn!("Image folder '{}' does not exist (yet)", root.display());
        }
        Self {
            root,
            canonical_root,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Joins `name` onto the image folder, refusing anything that escapes it.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute() {
            return None;
        }

        let joined = self.root.join(relative);
        match (joined.canonicalize(), &self.canonical_root) {
            (Ok(canonical), Some(root)) => canonical.starts_with(root).then_some(canonical),
            _ => {
                // Nothing on disk to compare against; reject `..` outright.
                let escapes = relative
                    .components()
                    .any(|c| matches!(c, Component::ParentDir));
                (!escapes).then_some(joined)
            }
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{path} (outside image folder)")))?;

        match std::fs::read(&full_path) {
            Ok(bytes) => Ok(Arc::new(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(ResourceError::NotFound(path.to_string()))
            }
            Err(e) => Err(ResourceError::LoadFailed {
                path: full_path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).is_some_and(|p| p.is_file())
    }

    fn locate(&self, path: &str) -> Option<PathBuf> {
        self.resolve(path)
            .filter(|p| p.is_file())
            .map(|p| p.canonicalize().unwrap_or(p))
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}
