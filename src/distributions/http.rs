// Shared HTTP plumbing for catalog fetchers

use crate::error::FetchError;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// User-Agent string for all catalog requests
const USER_AGENT: &str = concat!("jdkget/", env!("CARGO_PKG_VERSION"));

/// Build the client a fetcher owns. Handed around explicitly rather than
/// living in a global, so concurrent resolutions share no ambient state.
pub fn client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .expect("failed to build HTTP client")
}

/// Fetch JSON from a URL and deserialize it. A timeout surfaces as a
/// transport error like any other failure; nothing is retried here.
pub async fn fetch_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, FetchError> {
    let response: Response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    Ok(response.json().await?)
}
