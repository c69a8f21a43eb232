use std::path::PathBuf;

/// Overrides the directory the GitHub CLI keeps its configuration in.
const GH_CONFIG_DIR: &str = "GH_CONFIG_DIR";

/// Returns the user's home directory from the HOME environment variable.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Returns the XDG config directory (~/.config or $XDG_CONFIG_HOME).
/// Empty values are treated as unset per XDG Base Directory Specification.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(xdg) = non_empty_env("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    home_dir().map(|home| home.join(".config"))
}

/// Returns the GitHub CLI's config directory ($GH_CONFIG_DIR or <config dir>/gh).
pub fn gh_config_dir() -> Option<PathBuf> {
    if let Some(dir) = non_empty_env(GH_CONFIG_DIR) {
        return Some(PathBuf::from(dir));
    }
    config_dir().map(|dir| dir.join("gh"))
}

/// Returns the value of an environment variable, treating empty strings as unset.
fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}
