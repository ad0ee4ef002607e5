#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("transport error: {message}")]
    Transport { message: String },

    #[error("HTTP {status} {status_text}: {body}")]
    UnexpectedStatus {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
