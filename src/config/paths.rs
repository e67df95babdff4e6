//! Path resolution for tomatui data files.
//!
//! All tomatui data is stored in `~/.tomatui/`:
//! - `settings` - Plain-text settings and statistics record

use std::path::PathBuf;

use crate::error::TomatuiError;

/// Paths to tomatui data files.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root directory: `~/.tomatui/`
    pub root: PathBuf,
    /// Settings record: `~/.tomatui/settings`
    pub settings_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, TomatuiError> {
        let home = std::env::var("HOME").map_err(|_| {
            TomatuiError::Config("Could not determine home directory".to_string())
        })?;

        let root = PathBuf::from(home).join(".tomatui");

        Ok(Self {
            settings_file: root.join("settings"),
            root,
        })
    }

    /// Create paths with a custom root directory (useful for testing).
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            settings_file: root.join("settings"),
            root,
        }
    }

    /// Ensure the root directory exists, creating it if necessary.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), TomatuiError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                TomatuiError::Config(format!(
                    "Failed to create directory {:?}: {}",
                    self.root, e
                ))
            })?;
        }

        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".tomatui"))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_paths_with_root() {
        let root = PathBuf::from("/tmp/test-tomatui");
        let paths = Paths::with_root(root.clone());

        assert_eq!(paths.root, root);
        assert_eq!(paths.settings_file, root.join("settings"));
    }

    #[test]
    fn test_ensure_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let paths = Paths::with_root(temp_dir.path().join("nested"));

        paths.ensure_dirs().unwrap();

        assert!(paths.root.exists());
    }
}
