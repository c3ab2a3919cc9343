use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("service reported failure: {0}")]
    Api(String),

    #[error("malformed payload")]
    MalformedPayload,
}
