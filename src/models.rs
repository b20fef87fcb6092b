use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A discovered file, ready to be handed to the upload layer.
///
/// `path` is the logical path reported to the build API and is unique
/// within one collection result.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ArtifactDescriptor {
    pub path: String,
    pub absolute_path: String,
    pub glob_path: String,
    pub file_size: u64,
    pub sha1sum: String,
    pub sha256sum: String,
}

/// A match that survived deduplication but has not been checksummed yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingArtifact {
    pub path: String,
    pub absolute_path: PathBuf,
    pub glob_path: String,
}

/// Size and digests of one file, computed from a single read pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileChecksum {
    pub size: u64,
    pub sha1: String,
    pub sha256: String,
}

impl PendingArtifact {
    /// Attach checksums and produce the final descriptor
    pub fn into_descriptor(self, checksum: FileChecksum) -> ArtifactDescriptor {
        ArtifactDescriptor {
            path: self.path,
            absolute_path: self.absolute_path.to_string_lossy().into_owned(),
            glob_path: self.glob_path,
            file_size: checksum.size,
            sha1sum: checksum.sha1,
            sha256sum: checksum.sha256,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_descriptor_keeps_paths() {
        let pending = PendingArtifact {
            path: "logs/build.log".to_string(),
            absolute_path: PathBuf::from("/work/logs/build.log"),
            glob_path: "logs/*.log".to_string(),
        };
        let descriptor = pending.into_descriptor(FileChecksum {
            size: 3,
            sha1: "a9993e364706816aba3e25717850c26c9cd0d89d".to_string(),
            sha256: "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad".to_string(),
        });

        assert_eq!(descriptor.path, "logs/build.log");
        assert_eq!(descriptor.absolute_path, "/work/logs/build.log");
        assert_eq!(descriptor.glob_path, "logs/*.log");
        assert_eq!(descriptor.file_size, 3);
    }

    #[test]
    fn test_descriptor_json_field_names() {
        let descriptor = ArtifactDescriptor {
            path: "a.txt".to_string(),
            absolute_path: "/w/a.txt".to_string(),
            glob_path: "*.txt".to_string(),
            file_size: 0,
            sha1sum: String::new(),
            sha256sum: String::new(),
        };
        let json = serde_json::to_string(&descriptor).unwrap();
        assert!(json.contains("\"absolute_path\""));
        assert!(json.contains("\"glob_path\""));
        assert!(json.contains("\"sha1sum\""));
        assert!(json.contains("\"sha256sum\""));
    }
}
