use std::{collections::HashMap, time::Duration};

use log::debug;
use reqwest::{Method, StatusCode};
use url::Url;

use crate::error::{SsError, SsResult};

pub async fn http_get(
    url: &str,
    headers: &HashMap<String, String>,
    timeout_secs: u64,
) -> SsResult<Vec<u8>> {
    let client = reqwest::Client::new();

    let mut request_builder = client
        .request(Method::GET, url)
        .timeout(Duration::from_secs(timeout_secs));

    for (k, v) in headers {
        request_builder = request_builder.header(k, v);
    }

    let response = request_builder.send().await?;

    if response.status() == StatusCode::OK {
        Ok(response.bytes().await?.to_vec())
    } else {
        debug!("[HTTP Status Error] {response:?}");

        Err(SsError::HttpStatusError {
            status: response.status().to_string(),
            request: format!("GET {url}"),
        })
    }
}

pub fn validate_url(url: &str) -> SsResult<Url> {
    let parsed = Url::parse(url)?;

    match parsed.scheme() {
        "http" | "https" => Ok(parsed),
        scheme => Err(SsError::Invalid {
            code: "INVALID_URL",
            message: format!("Unsupported scheme '{scheme}' in '{url}'"),
        }),
    }
}
