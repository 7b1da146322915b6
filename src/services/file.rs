use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

use crate::error::{AppError, AppResult};

#[derive(Clone)]
pub struct FileService {
    input_path: PathBuf,
    output_path: PathBuf,
}

impl FileService {
    pub fn new(input_path: PathBuf, output_path: PathBuf) -> Self {
        Self {
            input_path,
            output_path,
        }
    }

    pub fn get_input_path(&self) -> &PathBuf {
        &self.input_path
    }

    pub fn get_output_path(&self) -> &PathBuf {
        &self.output_path
    }

    pub fn read_input(&self) -> AppResult<Vec<u8>> {
        debug!("Reading input file: {:?}", self.input_path);
        let bytes = fs::read(&self.input_path).map_err(|source| AppError::InputRead {
            path: self.input_path.clone(),
            source,
        })?;
        info!("Read {} bytes from {:?}", bytes.len(), self.input_path);
        Ok(bytes)
    }

    /// Replaces the output file with `text`. The contents are staged in a
    /// temporary file next to the destination and renamed over it, so the
    /// destination holds either the old or the new contents.
    pub fn write_output(&self, text: &str) -> AppResult<()> {
        let to_err = |source| AppError::OutputWrite {
            path: self.output_path.clone(),
            source,
        };

        let parent = match self.output_path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(parent).map_err(to_err)?;
        debug!("Staging output in {:?}", staged.path());
        staged.write_all(text.as_bytes()).map_err(to_err)?;
        staged.as_file().sync_all().map_err(to_err)?;
        copy_permissions(&self.output_path, staged.as_file()).map_err(to_err)?;

        staged
            .persist(&self.output_path)
            .map_err(|e| to_err(e.error))?;
        info!("Wrote {} bytes to {:?}", text.len(), self.output_path);
        Ok(())
    }
}

// Temporary files are created owner-only; keep what the destination had, or
// fall back to the usual mode for a fresh file.
fn copy_permissions(dest: &Path, staged: &fs::File) -> std::io::Result<()> {
    match fs::metadata(dest) {
        Ok(meta) => staged.set_permissions(meta.permissions()),
        Err(_) => default_permissions(staged),
    }
}

#[cfg(unix)]
fn default_permissions(staged: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    staged.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn default_permissions(_staged: &fs::File) -> std::io::Result<()> {
    Ok(())
}
