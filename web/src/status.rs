use gloo::net::http::Request;
use splitflap_core::BoardSnapshot;
use thiserror::Error;

#[derive(Error, Debug)]
pub(crate) enum FetchError {
    #[error("status request failed: {0}")]
    Request(#[from] gloo::net::Error),
    #[error("status endpoint answered {status} {status_text}")]
    Status { status: u16, status_text: String },
}

/// Fetches one board snapshot from the status endpoint.
pub(crate) async fn fetch_snapshot(url: &str) -> Result<BoardSnapshot, FetchError> {
    let response = Request::get(url).send().await?;
    if !response.ok() {
        return Err(FetchError::Status {
            status: response.status(),
            status_text: response.status_text(),
        });
    }
    Ok(response.json().await?)
}
