use std::fs;
use std::path::{Path, PathBuf};

pub const DOWNLOAD_FILE_NAME: &str = "hammerspoon-config.lua";
pub const DOWNLOAD_MIME_TYPE: &str = "text/plain";

/// Writes the script to `<dir>/hammerspoon-config.lua`, replacing any previous file.
pub fn download(dir: &Path, script: &str) -> std::io::Result<PathBuf> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    let path = dir.join(DOWNLOAD_FILE_NAME);
    fs::write(&path, script)?;
    Ok(path)
}
