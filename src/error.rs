use crate::config::ConfigError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SamplerError {
    #[error("Duplicate page url '{0}' in corpus")]
    DuplicateUrl(String),
    #[error("IO Error")]
    IO(#[from] std::io::Error),
    #[error("Config Error")]
    Config(#[from] ConfigError),
    #[error("Url Error")]
    Url(#[from] url::ParseError),
}
