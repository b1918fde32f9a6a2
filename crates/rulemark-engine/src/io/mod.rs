use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown document from disk
pub fn read_document(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    log::debug!("read {} bytes from {}", content.len(), path.display());
    Ok(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("rules.md");
        fs::write(&path, "# Team Rules\n- be kind").unwrap();

        let content = read_document(&path).unwrap();
        assert_eq!(content, "# Team Rules\n- be kind");
    }

    #[test]
    fn test_read_missing_document() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.md");

        let result = read_document(&path);
        assert!(matches!(result, Err(IoError::NotFound(p)) if p == path));
    }

    #[test]
    fn test_read_directory_is_io_error() {
        let temp_dir = TempDir::new().unwrap();

        let result = read_document(temp_dir.path());
        assert!(matches!(result, Err(IoError::Io(_))));
    }
}
