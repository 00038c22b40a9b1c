use kiosk_common::PlatformError;
use tracing::info;

/// Hands a URL to the OS default browser.
///
/// Fire-and-forget from the caller's perspective: the spawned process is not
/// waited on and nothing about the external load is observed.
pub fn open_external(url: &str) -> Result<(), PlatformError> {
    platform_open(url)?;
    info!(%url, "opened in system browser");
    Ok(())
}

#[cfg(target_os = "macos")]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    std::process::Command::new("open")
        .arg(url)
        .spawn()
        .map(|_| ())
        .map_err(|e| PlatformError::OpenerError(format!("failed to run open: {e}")))
}

#[cfg(target_os = "linux")]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    std::process::Command::new("xdg-open")
        .arg(url)
        .spawn()
        .map(|_| ())
        .map_err(|e| PlatformError::OpenerError(format!("failed to run xdg-open: {e}")))
}

#[cfg(target_os = "windows")]
fn platform_open(url: &str) -> Result<(), PlatformError> {
    std::process::Command::new("cmd")
        .args(["/c", "start", "", url])
        .spawn()
        .map(|_| ())
        .map_err(|e| PlatformError::OpenerError(format!("failed to run start: {e}")))
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_open(_url: &str) -> Result<(), PlatformError> {
    Err(PlatformError::NotSupported(
        "no external URL opener for this platform".into(),
    ))
}
