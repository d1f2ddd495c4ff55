// Issue polling cycles against a reading source

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};
use tokio::{sync::mpsc, time};

use crate::reading::{Outcome, Snapshot};

/// Something that can be asked for the latest readings.
#[async_trait(?Send)]
pub trait ReadingSource {
    async fn fetch(&self) -> Outcome;
}

/// Paces polling cycles. `tick` is raced against in-flight fetches and so
/// must be cancel safe: dropping a pending tick must not push the next one
/// further out.
#[async_trait(?Send)]
pub trait Ticker {
    async fn tick(&mut self);
}

#[async_trait(?Send)]
impl Ticker for time::Interval {
    async fn tick(&mut self) {
        time::Interval::tick(self).await;
    }
}

/// The outcome of one polling cycle along with the order in which the cycle
/// was issued.
#[derive(Clone, Debug, PartialEq)]
pub struct Polled {
    pub seq: u64,
    pub outcome: Outcome,
}

async fn cycle<S>(source: &S, seq: u64) -> Polled
where
    S: ReadingSource,
{
    let outcome = source.fetch().await;
    match &outcome {
        Ok(Snapshot::Latest(reading)) => debug!("Polling cycle {seq} read {reading:?}"),
        Ok(Snapshot::Empty) => debug!("Polling cycle {seq} found no readings"),
        Err(e) => warn!("Polling cycle {seq} failed: {e}"),
    }
    Polled { seq, outcome }
}

// Poll immediately and then on every tick, forever. A cycle is issued on
// each tick whether or not earlier cycles have completed, and outcomes are
// forwarded in completion order. Returns once the receiver has gone.

pub async fn task<S, T>(source: S, mut ticker: T, outcomes: mpsc::Sender<Polled>)
where
    S: ReadingSource,
    T: Ticker,
{
    let mut in_flight = FuturesUnordered::new();
    let mut next_seq = 0;

    in_flight.push(cycle(&source, next_seq));

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                next_seq += 1;
                in_flight.push(cycle(&source, next_seq));
            }

            Some(polled) = in_flight.next() => {
                if outcomes.send(polled).await.is_err() {
                    debug!("Outcome receiver dropped - stopping polling");
                    break;
                }
            }
        }
    }
}
