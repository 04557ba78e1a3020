pub type TickupResult<T> = Result<T, TickupError>;

/// Why a piece of source text could not be turned into a counter target.
///
/// Both variants are non-fatal at registration time: the offending target is
/// skipped with a warning and all other targets proceed normally.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("source text is empty")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),
}

#[derive(thiserror::Error, Debug)]
pub enum TickupError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TickupError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
