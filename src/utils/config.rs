use std::path::PathBuf;

const ENV_DATA_DIR: &str = "FITTRACK_DATA_DIR";

pub fn load_dotenv() {
    let _ = dotenvy::dotenv();
}

/// Development override for where fittrack.db lives.
pub fn data_dir_override() -> Option<PathBuf> {
    std::env::var(ENV_DATA_DIR)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
