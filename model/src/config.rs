// Declare what the dashboard polls, how often, and what it says

use std::time::Duration;

use crate::dashboard::Labels;

pub const DEFAULT_ENDPOINT: &str = "/data";
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(1000);

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Path or URL answering a GET with the list of readings.
    pub endpoint: String,
    /// Time between the starts of two polling cycles.
    pub interval: Duration,
    pub labels: Labels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            interval: DEFAULT_INTERVAL,
            labels: Labels::default(),
        }
    }
}
