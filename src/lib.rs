pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::*;

use log::debug;

use crate::services::encoder;

/// Reads the logo, encodes it and replaces the generated module.
///
/// The input is read in full before the output is touched, so a failed read
/// leaves the output untouched.
pub fn run(config: &Config) -> AppResult<()> {
    let file_service = FileService::new(config.input_path.clone(), config.output_path.clone());

    let bytes = file_service.read_input()?;
    let url = encoder::data_url(&config.mime_type, &bytes);
    debug!("Encoded data URL is {} characters", url.len());

    file_service.write_output(&encoder::render_module(&config.const_name, &url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site_with_logo(bytes: &[u8]) -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::rooted_at(dir.path());
        fs::create_dir_all(config.input_path.parent().unwrap()).unwrap();
        fs::create_dir_all(config.output_path.parent().unwrap()).unwrap();
        fs::write(&config.input_path, bytes).unwrap();
        (dir, config)
    }

    #[test]
    fn test_run_abc() {
        let (_dir, config) = site_with_logo(b"ABC");
        run(&config).unwrap();
        assert_eq!(
            fs::read_to_string(&config.output_path).unwrap(),
            "export const VISION_AI_LOGO_BASE64 = \"data:image/png;base64,QUJD\";\n"
        );
    }

    #[test]
    fn test_run_round_trip() {
        let png: Vec<u8> = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a]
            .into_iter()
            .chain((0..1000u32).map(|i| (i * 7 % 256) as u8))
            .collect();
        let (_dir, config) = site_with_logo(&png);
        run(&config).unwrap();

        let text = fs::read_to_string(&config.output_path).unwrap();
        assert_eq!(text.lines().count(), 1);
        assert_eq!(encoder::decode_module(&text), Some(png));
    }

    #[test]
    fn test_run_is_idempotent() {
        let (_dir, config) = site_with_logo(b"some logo bytes");
        run(&config).unwrap();
        let first = fs::read(&config.output_path).unwrap();
        run(&config).unwrap();
        assert_eq!(fs::read(&config.output_path).unwrap(), first);
    }

    #[test]
    fn test_run_overwrites_previous_output() {
        let (_dir, config) = site_with_logo(b"A");
        fs::write(&config.output_path, "stale\nstale\nstale\n").unwrap();
        run(&config).unwrap();
        assert_eq!(
            fs::read_to_string(&config.output_path).unwrap(),
            "export const VISION_AI_LOGO_BASE64 = \"data:image/png;base64,QQ==\";\n"
        );
    }

    #[test]
    fn test_missing_input_leaves_output_alone() {
        let (_dir, config) = site_with_logo(b"");
        fs::remove_file(&config.input_path).unwrap();

        let err = run(&config).unwrap_err();
        assert!(err.is_not_found());
        assert!(!config.output_path.exists());

        fs::write(&config.output_path, "previous\n").unwrap();
        assert!(run(&config).is_err());
        assert_eq!(fs::read_to_string(&config.output_path).unwrap(), "previous\n");
    }
}
