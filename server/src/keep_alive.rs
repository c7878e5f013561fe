//! Periodic self-ping.
//!
//! Free hosting tiers put idle services to sleep. When `KEEPALIVE_URL` is set
//! the server fetches it on a fixed interval. Results are only logged.

use crate::config::KeepAliveConfig;
use reqwest::{Client, StatusCode};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Fetch `url` once and return the response status.
///
/// # Errors
///
/// Returns the transport error if no response arrives.
pub async fn ping(client: &Client, url: &str) -> Result<StatusCode, reqwest::Error> {
    let response = client.get(url).send().await?;
    Ok(response.status())
}

/// Spawn the ping loop. The first ping happens one interval after start.
///
/// The task runs until the runtime shuts down or the handle is aborted.
#[must_use]
pub fn spawn(client: Client, config: KeepAliveConfig) -> JoinHandle<()> {
    tracing::info!(
        url = %config.url,
        interval_secs = config.interval_secs,
        "Keep-alive ping enabled"
    );

    tokio::spawn(async move {
        let period = config.interval();
        let mut ticker = time::interval_at(Instant::now() + period, period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            match ping(&client, &config.url).await {
                Ok(status) => {
                    tracing::info!(status = status.as_u16(), "Server pinged");
                }
                Err(error) => {
                    tracing::warn!(%error, "Error pinging server");
                }
            }
        }
    })
}
