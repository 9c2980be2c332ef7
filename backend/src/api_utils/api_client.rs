use std::time::Duration;

use anyhow::Context;
use serde_json::Value;

pub fn get_api_client(timeout: Duration) -> anyhow::Result<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .context("Failed to build Study Space API client")
}

/// Sends `request`, turning timeouts and non-2xx statuses into errors naming `what`.
pub async fn send_checked(request: reqwest::RequestBuilder, what: &str, timeout: Duration) -> anyhow::Result<reqwest::Response> {
    let response = match request.send().await {
        Ok(response) => response,
        Err(e) if e.is_timeout() => {
            return Err(anyhow::Error::new(e).context(format!("{what}: timed out after {}s", timeout.as_secs_f32())));
        }
        Err(e) => return Err(anyhow::Error::new(e).context(format!("{what}: request failed"))),
    };
    tracing::info!("{what}: {}", response.status());
    response.error_for_status().with_context(|| format!("{what}: upstream error"))
}

pub async fn read_json<T: serde::de::DeserializeOwned>(response: reqwest::Response, what: &str) -> anyhow::Result<T> {
    let body = response.text().await.with_context(|| format!("{what}: failed to read body"))?;
    let value: Value = serde_json::from_str(&body).with_context(|| format!("{what}: response is not JSON"))?;
    if let Some(Value::Bool(false)) = value.get("success") {
        let message = value.get("error").and_then(Value::as_str).unwrap_or("unknown error");
        anyhow::bail!("{what}: {message}");
    }
    serde_json::from_value(value).with_context(|| format!("{what}: unexpected response shape"))
}

/// HTTP status of the upstream response, if the error chain carries one.
pub fn upstream_status(error: &anyhow::Error) -> Option<u16> {
    error
        .chain()
        .find_map(|cause| cause.downcast_ref::<reqwest::Error>())
        .and_then(|e| e.status())
        .map(|status| status.as_u16())
}
