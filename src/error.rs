use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum AppError {
    InputRead { path: PathBuf, source: io::Error },
    OutputWrite { path: PathBuf, source: io::Error },
}

impl AppError {
    pub fn is_not_found(&self) -> bool {
        self.io_error().kind() == io::ErrorKind::NotFound
    }

    pub fn io_error(&self) -> &io::Error {
        match self {
            AppError::InputRead { source, .. } | AppError::OutputWrite { source, .. } => source,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::InputRead { path, source } => {
                write!(f, "Failed to read input {}: {}", path.display(), source)
            }
            AppError::OutputWrite { path, source } => {
                write!(f, "Failed to write output {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.io_error())
    }
}

pub type AppResult<T> = Result<T, AppError>;
