// Declare how readings are fetched and how polling is paced in the browser

use std::time::Duration;

use async_trait::async_trait;
use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use yew::platform;

pub use climate_monitor_model::{
    poll::{task, Polled, ReadingSource, Ticker},
    reading::{snapshot_from_body, FetchError, Outcome},
};

// Fetch the reading list with a plain GET against the configured endpoint

pub struct HttpSource {
    endpoint: String,
}

impl HttpSource {
    pub fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

#[async_trait(?Send)]
impl ReadingSource for HttpSource {
    async fn fetch(&self) -> Outcome {
        let response = Request::get(&self.endpoint)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let body = response
            .binary()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        snapshot_from_body(&body)
    }
}

// A ticker over the platform timer. The pending sleep is kept between calls
// so that a tick abandoned by the poller still fires on time.

pub struct Interval {
    period: Duration,
    pending: Option<LocalBoxFuture<'static, ()>>,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            pending: None,
        }
    }
}

#[async_trait(?Send)]
impl Ticker for Interval {
    async fn tick(&mut self) {
        let period = self.period;
        let pending = self
            .pending
            .get_or_insert_with(|| platform::time::sleep(period).boxed_local());
        pending.await;
        self.pending = None;
    }
}
