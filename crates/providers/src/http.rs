//! HTTP plumbing shared by the remote backends.

use std::time::Duration;

use ingen_core::BackendError;
use tracing::warn;

/// Upper bound on a single generation request.
pub(crate) const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Map a transport failure onto the backend error taxonomy.
pub(crate) fn transport_error(e: reqwest::Error) -> BackendError {
    if e.is_timeout() {
        BackendError::Timeout(e.to_string())
    } else {
        BackendError::Network(e.to_string())
    }
}

/// Turn non-success statuses into errors, passing successful responses through.
pub(crate) async fn check_status(
    backend: &str,
    response: reqwest::Response,
) -> Result<reqwest::Response, BackendError> {
    let status = response.status().as_u16();

    if status == 429 {
        return Err(BackendError::RateLimited);
    }

    if status == 401 || status == 403 {
        return Err(BackendError::AuthenticationFailed(
            "Invalid API key or insufficient permissions".into(),
        ));
    }

    if !response.status().is_success() {
        let error_body = response.text().await.unwrap_or_default();
        warn!(backend, status, body = %error_body, "Backend returned error");
        return Err(BackendError::Api {
            status_code: status,
            message: error_body,
        });
    }

    Ok(response)
}

/// Trim a trailing slash so paths can be appended with `format!`.
pub(crate) fn normalize_base(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}
