use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardioError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("profile file not found: {0}")]
    ProfileNotFound(String),

    #[error("unsupported profile format: {0} (expected .toml or .json)")]
    UnsupportedProfileFormat(String),

    #[error("profile parse error: {0}")]
    ProfileParse(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid remote prediction response: {0}")]
    RemoteResponse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CardioError>;
