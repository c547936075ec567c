use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, KeywordStatsError>;

#[derive(Error, Debug)]
pub enum KeywordStatsError {
    #[error("Directory {} does not exist", .0.display())]
    InvalidPath(PathBuf),
    #[error("History query for keyword '{keyword}' failed: {message}")]
    Query { keyword: String, message: String },
    #[error("Failed to launch git: {0}")]
    Spawn(#[source] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Git discover error: {0}")]
    GitDiscover(#[from] Box<gix::discover::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Head peel error: {0}")]
    HeadPeel(#[from] Box<gix::head::peel::to_commit::Error>),
    #[error("Object find with conversion error: {0}")]
    ObjectFindConv(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
}

impl KeywordStatsError {
    pub fn query(keyword: &str, message: impl Into<String>) -> Self {
        KeywordStatsError::Query {
            keyword: keyword.to_string(),
            message: message.into(),
        }
    }
}

// gix errors are large; keep them boxed inside the enum
impl From<gix::discover::Error> for KeywordStatsError {
    fn from(err: gix::discover::Error) -> Self {
        KeywordStatsError::GitDiscover(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for KeywordStatsError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        KeywordStatsError::RefFind(Box::new(err))
    }
}

impl From<gix::head::peel::to_commit::Error> for KeywordStatsError {
    fn from(err: gix::head::peel::to_commit::Error) -> Self {
        KeywordStatsError::HeadPeel(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for KeywordStatsError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        KeywordStatsError::ObjectFindConv(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for KeywordStatsError {
    fn from(err: gix::objs::decode::Error) -> Self {
        KeywordStatsError::ObjectDecode(Box::new(err))
    }
}
