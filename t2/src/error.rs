use crate::schema::Uom;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Response error:\nStatusCode: {0}\nText: {1}")]
    Response(reqwest::StatusCode, String),

    #[error("Invalid header: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Couldn't convert query to string: {0}")]
    HttpQuery(#[from] serde_qs::Error),

    #[error("Failed to format timestamp: {0}")]
    TimeFormat(#[from] time::error::Format),

    #[error("No unit price configured for {0}")]
    UnsupportedUnit(Uom),
}
