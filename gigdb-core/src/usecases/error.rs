use crate::repositories;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The name is invalid")]
    Name,
    #[error("The start time is invalid")]
    StartTime,
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<gigdb_entities::time::TimestampParseError> for Error {
    fn from(_: gigdb_entities::time::TimestampParseError) -> Self {
        Self::StartTime
    }
}
