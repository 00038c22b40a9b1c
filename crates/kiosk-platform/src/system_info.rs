//! Host environment snapshot.

/// Human-readable OS version string, e.g. `"macOS 14.5"` or a `uname`
/// release. Falls back to the bare OS name when the probe fails.
pub fn os_version() -> String {
    platform_os_version().unwrap_or_else(|| std::env::consts::OS.to_string())
}

#[cfg(target_os = "macos")]
fn platform_os_version() -> Option<String> {
    let output = std::process::Command::new("sw_vers")
        .arg("-productVersion")
        .output()
        .ok()?;
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(format!("macOS {version}"))
    }
}

#[cfg(target_os = "linux")]
fn platform_os_version() -> Option<String> {
    let output = std::process::Command::new("uname").arg("-sr").output().ok()?;
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

#[cfg(target_os = "windows")]
fn platform_os_version() -> Option<String> {
    let output = std::process::Command::new("cmd")
        .args(["/c", "ver"])
        .output()
        .ok()?;
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

#[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
fn platform_os_version() -> Option<String> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_version_is_never_empty() {
        assert!(!os_version().is_empty());
    }
}
