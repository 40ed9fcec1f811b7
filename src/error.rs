use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum TopLangsError {
    #[error("{0} is not set")]
    MissingSetting(&'static str),

    #[error("{key} must be a positive integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("no language data available")]
    NoLanguageData,
}
