use std::{error::Error, fmt};

/// The configuration module's result type.
pub type Result<T> = std::result::Result<T, ConfigErr>;

/// Error returned whenever a run setting can't be parsed.
///
/// Each variant carries the offending text. These never escape a run: the
/// caller logs them and falls back to the default for that setting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigErr {
    InvalidWorkers(String),
    InvalidLength(String),
    InvalidCombine(String),
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::InvalidWorkers(raw) => write!(f, "invalid worker count: {raw:?}"),
            ConfigErr::InvalidLength(raw) => write!(f, "invalid sequence length: {raw:?}"),
            ConfigErr::InvalidCombine(raw) => {
                write!(f, "invalid combine mode: {raw:?}, expected atomic, critical or fold")
            }
        }
    }
}

impl Error for ConfigErr {}
