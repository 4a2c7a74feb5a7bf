use std::env;
use std::path::{Path, PathBuf};

/// Resolve an XDG base directory from environment or default to `$HOME` + segments.
///
/// Inputs:
/// - `var`: Environment variable to check (e.g., `XDG_CONFIG_HOME`).
/// - `home_default`: Fallback path segments relative to `$HOME` if `var` is unset/empty.
///
/// Output: Resolved base directory path.
fn xdg_base_dir(var: &str, home_default: &[&str]) -> PathBuf {
    if let Ok(p) = env::var(var)
        && !p.trim().is_empty()
    {
        return PathBuf::from(p);
    }
    let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
    home_default
        .iter()
        .fold(PathBuf::from(home), |base, seg| base.join(seg))
}

/// Return `$HOME/.config/pacmux` when HOME is set, without creating it.
fn home_config_dir() -> Option<PathBuf> {
    env::var("HOME")
        .ok()
        .filter(|h| !h.trim().is_empty())
        .map(|home| Path::new(&home).join(".config").join("pacmux"))
}

/// Config directory for pacmux: `$HOME/.config/pacmux`, else `$XDG_CONFIG_HOME/pacmux`.
///
/// Only read from; nothing is created here.
#[must_use]
pub fn config_dir() -> PathBuf {
    home_config_dir()
        .unwrap_or_else(|| xdg_base_dir("XDG_CONFIG_HOME", &[".config"]).join("pacmux"))
}

/// Logs directory under config: `<config_dir>/logs` (ensured to exist).
///
/// # Errors
/// - Returns `Err` when the directory cannot be created.
pub fn logs_dir() -> std::io::Result<PathBuf> {
    let dir = config_dir().join("logs");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
