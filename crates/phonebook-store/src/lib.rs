pub mod error;
pub mod paths;
pub mod snapshot;

use crate::error::Result;
use phonebook_core::{ContactDirectory, DuplicatePolicy};
use std::ffi::OsString;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

/// Full-snapshot persistence for a [`ContactDirectory`].
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn open(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Reads the snapshot. A missing file is an empty directory.
    pub fn load(&self, policy: DuplicatePolicy) -> Result<ContactDirectory> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(ContactDirectory::new()),
            Err(err) => return Err(err.into()),
        };
        snapshot::decode(&bytes, policy)
    }

    /// Writes the snapshot next to the target and renames it into place, so
    /// the previous snapshot survives a failed write.
    pub fn save(&self, directory: &ContactDirectory) -> Result<()> {
        paths::ensure_parent_dir(&self.path)?;
        let bytes = snapshot::encode(directory)?;
        let tmp_path = self.tmp_path();

        let written = write_file(&tmp_path, &bytes);
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(err);
        }
        if let Err(err) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(err.into());
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("contacts.json"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    let mut file = fs::File::create(path)?;
    restrict_file_permissions(path)?;
    file.write_all(bytes)?;
    file.sync_all()?;
    Ok(())
}

#[cfg(unix)]
fn restrict_file_permissions(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let perms = fs::Permissions::from_mode(0o600);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn restrict_file_permissions(_path: &Path) -> Result<()> {
    Ok(())
}
