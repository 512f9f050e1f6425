use crate::error::{Result, StoreError};
use phonebook_core::{ContactDirectory, ContactDto, ContactRecord, DuplicatePolicy};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

/// On-disk shape of a whole directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    #[serde(default)]
    pub contacts: Vec<ContactDto>,
}

impl Snapshot {
    pub fn from_directory(directory: &ContactDirectory) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            contacts: directory.all().map(ContactRecord::to_dto).collect(),
        }
    }

    pub fn into_directory(self, policy: DuplicatePolicy) -> Result<ContactDirectory> {
        if self.version != SNAPSHOT_VERSION {
            return Err(StoreError::UnsupportedVersion(self.version));
        }
        let mut directory = ContactDirectory::new();
        for dto in self.contacts {
            let record = ContactRecord::try_from(dto)?;
            directory.insert_with(record, policy)?;
        }
        Ok(directory)
    }
}

pub fn encode(directory: &ContactDirectory) -> Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(&Snapshot::from_directory(directory))?;
    bytes.push(b'\n');
    Ok(bytes)
}

pub fn decode(bytes: &[u8], policy: DuplicatePolicy) -> Result<ContactDirectory> {
    let snapshot: Snapshot = serde_json::from_slice(bytes)?;
    snapshot.into_directory(policy)
}
