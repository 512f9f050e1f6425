use crate::error::{Result, StoreError};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = "phonebook";
const SNAPSHOT_FILENAME: &str = "contacts.json";

pub fn data_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("XDG_DATA_HOME") {
        let path = PathBuf::from(dir);
        if path.as_os_str().is_empty() {
            return Err(StoreError::InvalidDataPath(path));
        }
        return Ok(path.join(APP_DIR));
    }

    let home = dirs::home_dir().ok_or(StoreError::MissingHomeDir)?;
    Ok(home.join(".local").join("share").join(APP_DIR))
}

pub fn ensure_data_dir() -> Result<PathBuf> {
    let dir = data_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)?;
    }
    restrict_dir_permissions(&dir)?;
    Ok(dir)
}

pub fn snapshot_path() -> Result<PathBuf> {
    Ok(ensure_data_dir()?.join(SNAPSHOT_FILENAME))
}

/// An explicit path wins over the default data directory.
pub fn resolve_snapshot_path(custom: Option<PathBuf>) -> Result<PathBuf> {
    match custom {
        Some(path) if path.as_os_str().is_empty() => Err(StoreError::InvalidDataPath(path)),
        Some(path) => Ok(path),
        None => snapshot_path(),
    }
}

pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

#[cfg(unix)]
fn restrict_dir_permissions(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o700);
    fs::set_permissions(dir, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_dir_permissions(_dir: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{ensure_parent_dir, resolve_snapshot_path, SNAPSHOT_FILENAME};
    use crate::error::StoreError;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn resolve_snapshot_path_prefers_custom() {
        let custom = PathBuf::from("/tmp/phonebook/custom.json");
        assert_eq!(resolve_snapshot_path(Some(custom.clone())).unwrap(), custom);
    }

    #[test]
    fn resolve_snapshot_path_rejects_empty_custom() {
        let err = resolve_snapshot_path(Some(PathBuf::new())).unwrap_err();
        assert!(matches!(err, StoreError::InvalidDataPath(_)));
    }

    #[test]
    fn ensure_parent_dir_creates_missing_dirs() {
        let temp = TempDir::new().expect("temp dir");
        let path = temp.path().join("a").join("b").join(SNAPSHOT_FILENAME);
        ensure_parent_dir(&path).expect("parent");
        assert!(temp.path().join("a").join("b").is_dir());
    }
}
