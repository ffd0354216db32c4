use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum file size for security (100 MB)
const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// FileSystemReader adapter for reading input files from the file system
///
/// Used for license data snapshots and batch request files.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Safely read a file with security checks:
    /// - Reject symbolic links
    /// - Check file size limits
    /// - Validate file is a regular file
    pub fn read_to_string(&self, path: &Path, file_type: &str) -> Result<String> {
        // Get file metadata without following symlinks
        let metadata = fs::symlink_metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_type, e))?;

        if metadata.is_symlink() {
            anyhow::bail!(
                "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
                path.display()
            );
        }

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        let file_size = metadata.len();
        if file_size > MAX_FILE_SIZE {
            anyhow::bail!(
                "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
                path.display(),
                file_size,
                MAX_FILE_SIZE
            );
        }

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_type, e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("batch.json");
        fs::write(&path, r#"{"components": []}"#).unwrap();

        let content = FileSystemReader::new()
            .read_to_string(&path, "batch file")
            .unwrap();
        assert_eq!(content, r#"{"components": []}"#);
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new()
            .read_to_string(&temp_dir.path().join("missing.json"), "snapshot");

        let err = result.unwrap_err().to_string();
        assert!(err.contains("Failed to read snapshot metadata"));
    }

    #[test]
    fn test_read_directory_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = FileSystemReader::new().read_to_string(temp_dir.path(), "snapshot");
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_symlink_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemReader::new().read_to_string(&link, "snapshot");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }
}
