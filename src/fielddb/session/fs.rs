use super::Session;
use crate::error::{FieldError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Token persisted in a single plain text file.
#[derive(Debug, Clone)]
pub struct FileSession {
    path: PathBuf,
}

impl FileSession {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(FieldError::Io)?;
            }
        }
        Ok(())
    }
}

impl Session for FileSession {
    fn token(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(token) if token.is_empty() => Ok(None),
            Ok(token) => Ok(Some(token)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FieldError::Io(e)),
        }
    }

    fn store_token(&self, token: &str) -> Result<()> {
        self.ensure_parent()?;

        // Write to a sibling temp file and rename so readers never see a partial token.
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, token).map_err(FieldError::Io)?;
        fs::rename(&tmp, &self.path).map_err(FieldError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_means_no_token() {
        let dir = TempDir::new().unwrap();
        let session = FileSession::new(dir.path().join("token.dat"));
        assert_eq!(session.token().unwrap(), None);
    }

    #[test]
    fn store_overwrites_and_reads_back_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("token.dat");
        let session = FileSession::new(&path);

        session.store_token("first").unwrap();
        session.store_token("login|a|password|b|projectId|c").unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "login|a|password|b|projectId|c"
        );
        assert_eq!(
            session.token().unwrap().as_deref(),
            Some("login|a|password|b|projectId|c")
        );
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn external_edits_are_seen_on_next_read() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("token.dat");
        let session = FileSession::new(&path);

        session.store_token("old").unwrap();
        fs::write(&path, "new").unwrap();
        assert_eq!(session.token().unwrap().as_deref(), Some("new"));

        fs::write(&path, "").unwrap();
        assert_eq!(session.token().unwrap(), None);
    }
}
