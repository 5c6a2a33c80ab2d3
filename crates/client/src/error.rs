use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed: `{0}`")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status code {0}")]
    Status(u16),

    #[error("malformed response body: `{0}`")]
    Decode(reqwest::Error),
}
