//! Directory-backed resource provider.
//!
//! Resource names are resolved relative to a base directory (`static/` by
//! default in the CLI). Absolute names and names that climb out of the base
//! directory are refused.

use rackmark_traits::{ResourceError, ResourceProvider, SharedResourceData};
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

#[derive(Debug)]
pub struct FilesystemResourceProvider {
    base_path: PathBuf,
    /// Canonical base, when the directory exists at construction time.
    canonical_base: Option<PathBuf>,
}

impl FilesystemResourceProvider {
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        let canonical_base = base_path.canonicalize().ok();
        if canonical_base.is_none() {
            log::debug!(
                "Resource directory '{}' does not exist; every lookup will miss",
                base_path.display()
            );
        }
        Self { base_path, canonical_base }
    }

    pub fn base(&self) -> &Path {
        &self.base_path
    }

    /// Returns `None` when `name` would escape the base directory.
    fn resolve(&self, name: &str) -> Option<PathBuf> {
        let relative = Path::new(name);
        if relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            return None;
        }

        let full_path = self.base_path.join(relative);
        match (full_path.canonicalize(), &self.canonical_base) {
            (Ok(canonical), Some(base)) if canonical.starts_with(base) => Some(canonical),
            // Symlink pointing outside the base.
            (Ok(_), Some(_)) => None,
            _ => Some(full_path),
        }
    }
}

impl ResourceProvider for FilesystemResourceProvider {
    fn load(&self, path: &str) -> Result<SharedResourceData, ResourceError> {
        let full_path = self
            .resolve(path)
            .ok_or_else(|| ResourceError::NotFound(format!("{} (outside resource directory)", path)))?;

        std::fs::read(&full_path).map(Arc::new).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ResourceError::NotFound(path.to_string())
            } else {
                ResourceError::LoadFailed {
                    path: path.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }

    fn exists(&self, path: &str) -> bool {
        self.resolve(path).map(|p| p.is_file()).unwrap_or(false)
    }

    fn name(&self) -> &'static str {
        "FilesystemResourceProvider"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_filesystem_provider_loads_font_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("arial-black.ttf"), b"\x00\x01\x00\x00").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        let data = provider.load("arial-black.ttf").unwrap();
        assert_eq!(&*data, b"\x00\x01\x00\x00");
        assert!(provider.exists("arial-black.ttf"));
    }

    #[test]
    fn test_filesystem_provider_not_found() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(matches!(
            provider.load("arial-black.ttf"),
            Err(ResourceError::NotFound(_))
        ));
        assert!(!provider.exists("arial-black.ttf"));
    }

    #[test]
    fn test_filesystem_provider_missing_base_directory() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path().join("static"));
        assert!(matches!(
            provider.load("arial-black.ttf"),
            Err(ResourceError::NotFound(_))
        ));
    }

    #[test]
    fn test_filesystem_provider_refuses_escaping_paths() {
        let dir = tempdir().unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());

        assert!(provider.load("../../../etc/passwd").is_err());
        assert!(provider.load("/etc/passwd").is_err());
        assert!(!provider.exists("fonts/../../secret"));
    }

    #[test]
    fn test_filesystem_provider_nested_paths() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        fs::write(dir.path().join("fonts").join("bold.ttf"), b"bold").unwrap();

        let provider = FilesystemResourceProvider::new(dir.path());
        assert_eq!(&*provider.load("fonts/bold.ttf").unwrap(), b"bold");
    }

    #[test]
    fn test_directory_is_not_a_resource() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("fonts")).unwrap();
        let provider = FilesystemResourceProvider::new(dir.path());
        assert!(!provider.exists("fonts"));
    }
}
