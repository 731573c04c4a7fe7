//! Feed retrieval.

use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use calsieve_core::ics::parse_calendar;
use icalendar::Calendar;

/// Upper bound on the whole feed request.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Fetch the remote feed and parse it into a calendar.
pub async fn fetch_calendar(url: &str) -> Result<Calendar> {
    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .danger_accept_invalid_certs(running_in_ci())
        .build()
        .context("Failed to build HTTP client")?;

    let response = client
        .get(url)
        .send()
        .await
        .with_context(|| format!("Failed to fetch calendar feed from {}", url))?
        .error_for_status()
        .with_context(|| format!("Calendar feed at {} returned an error status", url))?;

    let body = response
        .text()
        .await
        .context("Failed to read calendar feed body")?;

    Ok(parse_calendar(&body)?)
}

/// CI images often ship stale CA bundles, so certificate verification is
/// relaxed there and nowhere else.
fn running_in_ci() -> bool {
    let truthy = |var: &str| env::var(var).is_ok_and(|value| value == "true");

    truthy("CI") || truthy("GITHUB_ACTIONS")
}
