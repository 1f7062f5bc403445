//! Resolve the path of the history database to read.
//!
//! An explicit path from the command line always wins, verbatim. Otherwise
//! the default Chrome profile location for the running platform is used,
//! and must exist.

use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateError {
    #[error("your system (\"{0}\") is not recognized; please specify the input file manually")]
    UnsupportedPlatform(String),
    #[error("could not determine the home directory; please specify the input file manually")]
    MissingHome,
    #[error("the LOCALAPPDATA environment variable is not set; please specify the input file manually")]
    MissingLocalAppData,
    #[error(
        "the history file could not be found in its default location ({}); please specify the input file manually",
        .0.display()
    )]
    MissingDefault(PathBuf),
}

/// Operating systems with a known Chrome profile location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    MacOs,
    Linux,
    Windows,
}

impl Platform {
    pub fn current() -> Option<Self> {
        match env::consts::OS {
            "macos" => Some(Platform::MacOs),
            "linux" => Some(Platform::Linux),
            "windows" => Some(Platform::Windows),
            _ => None,
        }
    }
}

/// Path of the default profile's history database, relative to the
/// platform base directory.
fn profile_segments(platform: Platform) -> &'static [&'static str] {
    match platform {
        Platform::MacOs => &[
            "Library",
            "Application Support",
            "Google",
            "Chrome",
            "Default",
            "History",
        ],
        Platform::Linux => &[".config", "google-chrome", "Default", "History"],
        Platform::Windows => &["Google", "Chrome", "User Data", "Default", "History"],
    }
}

fn base_dir(platform: Platform) -> Result<PathBuf, LocateError> {
    match platform {
        Platform::MacOs | Platform::Linux => dirs::home_dir().ok_or(LocateError::MissingHome),
        Platform::Windows => env::var_os("LOCALAPPDATA")
            .map(PathBuf::from)
            .ok_or(LocateError::MissingLocalAppData),
    }
}

pub fn default_history_path(platform: Platform) -> Result<PathBuf, LocateError> {
    let mut path = base_dir(platform)?;
    for segment in profile_segments(platform) {
        path.push(segment);
    }
    Ok(path)
}

/// Resolve the database to read.
///
/// Only the computed default is existence-checked here; an unreadable
/// explicit path surfaces when the snapshot copy is attempted.
pub fn resolve_input(explicit: Option<PathBuf>) -> Result<PathBuf, LocateError> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let platform = Platform::current()
        .ok_or_else(|| LocateError::UnsupportedPlatform(env::consts::OS.to_string()))?;
    let path = default_history_path(platform)?;
    if !path.exists() {
        return Err(LocateError::MissingDefault(path));
    }
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn explicit_path_wins_without_existence_check() {
        let path = PathBuf::from("/no/such/History");
        let resolved = resolve_input(Some(path.clone())).expect("resolve");
        assert_eq!(resolved, path);
    }

    #[test]
    fn macos_profile_location() {
        let segments = profile_segments(Platform::MacOs);
        assert_eq!(segments.first(), Some(&"Library"));
        assert_eq!(segments.last(), Some(&"History"));
    }

    #[test]
    fn linux_profile_location() {
        assert_eq!(
            profile_segments(Platform::Linux).join("/"),
            ".config/google-chrome/Default/History"
        );
    }

    #[test]
    fn windows_profile_uses_localappdata() {
        let segments = profile_segments(Platform::Windows);
        assert_eq!(segments.first(), Some(&"Google"));
        assert_eq!(segments.last(), Some(&"History"));
    }

    #[test]
    fn missing_default_error_names_path() {
        let err = LocateError::MissingDefault(PathBuf::from("/tmp/History"));
        let message = err.to_string();
        assert!(message.contains(Path::new("/tmp/History").to_str().unwrap()));
        assert!(message.contains("specify the input file manually"));
    }
}
