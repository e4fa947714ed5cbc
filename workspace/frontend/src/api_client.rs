pub mod actual;
pub mod evaluation;
pub mod forecast;
pub mod summary;

use common::{ErrorResponse, FetchError, FetchResult};
use gloo_net::http::Request;
use serde::Deserialize;
use crate::settings;

/// Common GET request handler
///
/// The backend answers with bare JSON bodies; failures carry an
/// `{"error": ...}` object which is surfaced in [`FetchError::Status`].
pub async fn get<T>(endpoint: &str) -> FetchResult<T>
where
    T: for<'de> Deserialize<'de>,
{
    let url = settings::get_settings().api_url(endpoint);
    log::debug!("GET request to: {}", url);

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| {
            let error = FetchError::Transport(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    if !response.ok() {
        log::warn!("GET {} - Non-OK response: {}", endpoint, response.status());
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.error,
            Err(_) => response.status_text(),
        };
        let error = FetchError::Status {
            status: response.status(),
            message,
        };
        log::error!("GET {} - {}", endpoint, error);
        return Err(error);
    }

    log::trace!("GET {} - Response received, parsing JSON", endpoint);
    let data = response
        .json::<T>()
        .await
        .map_err(|e| {
            let error = FetchError::Parse(e.to_string());
            log::error!("GET {} - {}", endpoint, error);
            error
        })?;

    log::info!("GET {} - Success", endpoint);
    Ok(data)
}
