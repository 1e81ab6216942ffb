use gigdb_application::error::{AppError, BError};
pub use gigdb_core::{repositories::Error as RepoError, usecases::Error as ParameterError};
use rocket::{
    self,
    http::Status,
    response::{self, Responder},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    App(#[from] AppError),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepoError> for Error {
    fn from(err: RepoError) -> Self {
        AppError::from(err).into()
    }
}

impl From<BError> for Error {
    fn from(err: BError) -> Self {
        AppError::from(err).into()
    }
}

impl From<ParameterError> for Error {
    fn from(err: ParameterError) -> Self {
        Self::App(err.into())
    }
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::App(AppError::Business(
                BError::Repo(RepoError::NotFound)
                    | BError::Parameter(ParameterError::Repo(RepoError::NotFound))
            ))
        )
    }
}

// Failures surface as plain HTTP statuses and are rendered
// by the registered catchers.
impl<'r, 'o: 'r> Responder<'r, 'o> for Error {
    fn respond_to(self, _req: &rocket::Request) -> response::Result<'o> {
        if self.is_not_found() {
            return Err(Status::NotFound);
        }
        match self {
            Error::App(AppError::Business(BError::Parameter(err))) => {
                debug!("Invalid request parameters: {err}");
                Err(Status::BadRequest)
            }
            err => {
                error!("Error: {err}");
                Err(Status::InternalServerError)
            }
        }
    }
}
