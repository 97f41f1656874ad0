use thiserror::Error;

#[derive(Error, Debug)]
pub enum AlumnetError {
    #[error("Feed fetch error: {0}")]
    Fetch(String),

    #[error("CSV parse error: {0}")]
    Csv(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
