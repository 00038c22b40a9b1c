//! Platform directory resolution.

use kiosk_common::PlatformError;
use std::path::PathBuf;

/// Config directory: `<os config dir>/kiosk`.
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    dirs::config_dir()
        .map(|d| d.join("kiosk"))
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))
}

/// Data directory: `<os data dir>/kiosk`.
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    dirs::data_dir()
        .map(|d| d.join("kiosk"))
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))
}

/// File holding the persisted window frame record.
pub fn window_frame_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("window-frame"))
}

/// Create the config and data directories if they do not exist.
pub fn ensure_dirs() -> Result<(), PlatformError> {
    for dir in [config_dir()?, data_dir()?] {
        std::fs::create_dir_all(&dir).map_err(|e| {
            PlatformError::PathError(format!("failed to create {}: {e}", dir.display()))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dirs_end_with_kiosk() {
        assert!(config_dir().unwrap().ends_with("kiosk"));
        assert!(data_dir().unwrap().ends_with("kiosk"));
    }

    #[test]
    fn frame_file_lives_in_data_dir() {
        let file = window_frame_file().unwrap();
        assert!(file.ends_with("kiosk/window-frame"));
    }
}
