use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "fnship.toml not found in {dir} — create one with [project], [dev], and [prod] sections"
    )]
    ConfigMissing { dir: PathBuf },

    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid environment choice '{input}' — expected 1 (dev), 2 (prod), or 3 (both)")]
    InvalidChoice { input: String },
}
