use std::path::{Path, PathBuf};

use crate::constants;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub const_name: String,
    pub mime_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(constants::INPUT_PATH),
            output_path: PathBuf::from(constants::OUTPUT_PATH),
            const_name: constants::CONST_NAME.to_string(),
            mime_type: constants::MIME_TYPE.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves the fixed relative paths against `root` instead of the
    /// working directory.
    pub fn rooted_at(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        let base = Self::default();
        Self {
            input_path: root.join(&base.input_path),
            output_path: root.join(&base.output_path),
            ..base
        }
    }
}
