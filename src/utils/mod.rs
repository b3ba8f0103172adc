//! Utility functions for stylescan

use anyhow::{anyhow, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Ensure a directory exists, creating it if necessary
pub fn ensure_directory(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    } else if !path.is_dir() {
        return Err(anyhow!("Path exists but is not a directory: {:?}", path));
    }
    Ok(())
}

/// Get the XDG config directory for stylescan
pub fn get_config_dir() -> Result<PathBuf> {
    let config_dir = dirs::config_dir()
        .ok_or_else(|| anyhow!("Could not determine config directory"))?
        .join("stylescan");

    Ok(config_dir)
}

/// Directories searched for plugin manifests when none are given
pub fn default_plugin_directories() -> Vec<PathBuf> {
    let mut dirs = vec![PathBuf::from("./plugins")];
    if let Ok(config_dir) = get_config_dir() {
        dirs.push(config_dir.join("plugins"));
    }
    dirs
}

/// Expand `~` and environment variables in a path
pub fn expand_path(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_string_lossy();
    let expanded = shellexpand::full(&path_str)
        .map_err(|e| anyhow!("Failed to expand {:?}: {}", path, e))?;
    Ok(PathBuf::from(expanded.as_ref()))
}

/// Calculate SHA256 hash of a string
pub fn calculate_string_hash(content: &str) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_ensure_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a/b");
        ensure_directory(&nested).unwrap();
        assert!(nested.is_dir());

        let file = temp_dir.path().join("file");
        fs::write(&file, "").unwrap();
        assert!(ensure_directory(&file).is_err());
    }

    #[test]
    fn test_calculate_string_hash() {
        assert_eq!(
            calculate_string_hash("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn test_expand_path_leaves_plain_paths() {
        assert_eq!(
            expand_path(Path::new("./plugins")).unwrap(),
            PathBuf::from("./plugins")
        );
    }

    #[test]
    fn test_default_plugin_directories_start_local() {
        assert_eq!(
            default_plugin_directories()[0],
            PathBuf::from("./plugins")
        );
    }
}
