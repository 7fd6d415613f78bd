use thiserror::Error;

#[derive(Error, Debug)]
pub enum UtilityError {
    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid probability for {name}: {value} (expected a value between 0.0 and 1.0)")]
    InvalidProbability { name: String, value: String },

    #[error("unrecognized {field} tag '{tag}' (expected one of: {expected})")]
    UnknownTag {
        field: &'static str,
        tag: String,
        expected: String,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UtilityError {
    /// Errors caused by what the user typed rather than by the environment.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::PathNotFound(_)
                | Self::InvalidProbability { .. }
                | Self::UnknownTag { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UtilityError>;
