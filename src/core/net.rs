// src/core/net.rs
// Blocking HTTP GET with a small retry budget.

use std::thread;

use reqwest::{StatusCode, blocking::Client};
use tracing::{debug, warn};

use crate::config::options::FetchOptions;
use crate::error::FetchError;

pub fn client(opts: &FetchOptions) -> Result<Client, FetchError> {
    let client = Client::builder()
        .user_agent(opts.user_agent.as_str())
        .timeout(opts.timeout())
        .build()?;
    Ok(client)
}

/// GET `url` and return the body.
///
/// Transport errors, 5xx and 429 are retried up to `opts.retries` times with
/// linear backoff. Any other non-2xx status fails at once.
pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    let client = client(opts)?;
    let attempts = opts.retries + 1;
    let mut last = s!();

    for attempt in 1..=attempts {
        match client.get(url).send() {
            Ok(resp) => {
                let status = resp.status();
                if status.is_success() {
                    let body = resp.text()?;
                    debug!(url, bytes = body.len(), attempt, "Fetched page");
                    return Ok(body);
                }
                if !is_retryable(status) {
                    return Err(FetchError::Status { status: status.as_u16(), url: s!(url) });
                }
                last = format!("HTTP {}", status.as_u16());
            }
            Err(e) => last = e.to_string(),
        }

        if attempt < attempts {
            let wait = opts.backoff(attempt);
            warn!(url, attempt, wait_ms = wait.as_millis() as u64, "Fetch failed ({last}), retrying");
            thread::sleep(wait);
        }
    }

    Err(FetchError::Exhausted { attempts, url: s!(url), last })
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retry_only_server_errors_and_rate_limits() {
        assert!(is_retryable(StatusCode::BAD_GATEWAY));
        assert!(is_retryable(StatusCode::TOO_MANY_REQUESTS));
        assert!(!is_retryable(StatusCode::NOT_FOUND));
        assert!(!is_retryable(StatusCode::FORBIDDEN));
    }

    #[test]
    fn connection_refused_exhausts_budget() {
        let opts = FetchOptions { retries: 1, backoff_ms: 0, timeout_secs: 2, ..FetchOptions::default() };
        // Port 9 (discard) on loopback is closed on test machines.
        let err = http_get("http://127.0.0.1:9/odds", &opts).unwrap_err();
        match err {
            FetchError::Exhausted { attempts, url, .. } => {
                assert_eq!(attempts, 2);
                assert_eq!(url, "http://127.0.0.1:9/odds");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
