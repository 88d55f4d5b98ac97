use hyper::StatusCode;
use thiserror::Error;

use crate::client::ClientError;

/// Terminal outcome of a failed weather lookup
#[derive(Error, Debug)]
pub enum LookupError {
    #[error("invalid zipcode")]
    InvalidPostalCode,

    #[error("can not find zipcode")]
    PostalCodeNotFound,

    /// Upstream transport or decode failure, message surfaced as-is
    #[error(transparent)]
    Upstream(#[from] ClientError),
}

impl LookupError {
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidPostalCode => StatusCode::UNPROCESSABLE_ENTITY,
            Self::PostalCodeNotFound => StatusCode::NOT_FOUND,
            Self::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
