//! Path utilities: expand ~ in user supplied paths.

use std::env;
use std::path::PathBuf;

pub fn expand_tilde(path: &str) -> PathBuf {
    if path.starts_with("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path.trim_start_matches("~/"));
    }
    PathBuf::from(path)
}

/// Database path given with `--db`: `~` expanded, relative paths taken
/// from the working directory.
pub fn resolve_db_path(path: &str) -> PathBuf {
    let p = expand_tilde(path);
    if p.is_absolute() {
        return p;
    }
    match env::current_dir() {
        Ok(cwd) => cwd.join(p),
        Err(_) => p,
    }
}
