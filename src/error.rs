use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error("unknown section: {0}")]
    UnknownSection(String),
    #[error("no experience entry with id {0}")]
    UnknownExperience(u32),
}

#[cfg(feature = "ssr")]
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("couldn't load leptos configuration: {0}")]
    Config(String),
    #[error("server i/o failed: {0}")]
    Io(#[from] std::io::Error),
}
