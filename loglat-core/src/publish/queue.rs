use super::circuit::{CircuitBreaker, CircuitBreakerParams};
use super::client::{IndexClient, PublishError};
use super::reading::{LatencyReading, PublishStats, ReadingSink};
use crossbeam_channel::{Receiver, Sender, TrySendError, bounded};
use std::sync::atomic::{AtomicU64, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{debug, error, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    pub endpoint: String,
    pub timeout: Duration,
    pub queue_capacity: usize,
    pub max_retries: u32,
    pub retry_backoff: Duration,
    pub circuit: CircuitBreakerParams,
}

#[derive(Debug, Default)]
struct WorkerTotals {
    published: u64,
    failed: u64,
    dropped: u64,
}

/// Fire-and-forget publisher.
///
/// `submit` never waits on the network: readings go into a bounded queue
/// drained by one background thread, and a full queue drops the reading.
pub struct PublishQueue {
    tx: Sender<LatencyReading>,
    worker: JoinHandle<WorkerTotals>,
    submitted: AtomicU64,
    dropped: AtomicU64,
}

impl PublishQueue {
    pub fn start(settings: PublishSettings) -> Result<Self, PublishError> {
        let client = IndexClient::new(settings.endpoint.clone(), settings.timeout)?;
        let (tx, rx) = bounded(settings.queue_capacity);

        let worker = thread::Builder::new()
            .name("loglat-publisher".to_string())
            .spawn(move || run_worker(rx, client, settings))
            .map_err(PublishError::Spawn)?;

        Ok(Self {
            tx,
            worker,
            submitted: AtomicU64::new(0),
            dropped: AtomicU64::new(0),
        })
    }
}

impl ReadingSink for PublishQueue {
    fn submit(&self, reading: LatencyReading) {
        self.submitted.fetch_add(1, Ordering::Relaxed);

        match self.tx.try_send(reading) {
            Ok(()) => {}
            Err(TrySendError::Full(reading)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                debug!(verb = %reading.verb, "publish queue full; dropping reading");
            }
            Err(TrySendError::Disconnected(_)) => {
                self.dropped.fetch_add(1, Ordering::Relaxed);
                warn!("publisher thread is gone; dropping reading");
            }
        }
    }

    fn finish(self: Box<Self>) -> PublishStats {
        let Self {
            tx,
            worker,
            submitted,
            dropped,
        } = *self;

        // Closing the queue lets the worker drain and exit.
        drop(tx);

        let totals = match worker.join() {
            Ok(totals) => totals,
            Err(_) => {
                error!("publisher thread panicked");
                WorkerTotals::default()
            }
        };

        PublishStats {
            submitted: submitted.into_inner(),
            published: totals.published,
            failed: totals.failed,
            dropped: dropped.into_inner() + totals.dropped,
        }
    }
}

fn run_worker(
    rx: Receiver<LatencyReading>,
    client: IndexClient,
    settings: PublishSettings,
) -> WorkerTotals {
    let mut breaker = CircuitBreaker::new(client.endpoint(), settings.circuit.clone());
    let mut totals = WorkerTotals::default();
    let endpoint = client.endpoint().to_string();

    for reading in rx.iter() {
        if !breaker.allow_request() {
            totals.dropped += 1;
            debug!(endpoint = %endpoint, "circuit open; dropping reading");
            continue;
        }

        match post_with_retry(&client, &reading, &settings) {
            Ok(()) => {
                totals.published += 1;
                breaker.record(true);
            }
            Err(e) => {
                totals.failed += 1;
                warn!(
                    error = %e,
                    latency = reading.latency,
                    verb = %reading.verb,
                    date_time = %reading.date_time_str,
                    "failed to publish reading"
                );
                breaker.record(false);
            }
        }
    }

    totals
}

fn post_with_retry(
    client: &IndexClient,
    reading: &LatencyReading,
    settings: &PublishSettings,
) -> Result<(), PublishError> {
    let mut attempt = 0;
    loop {
        match client.post(reading) {
            Ok(()) => return Ok(()),
            Err(e) if attempt < settings.max_retries => {
                attempt += 1;
                debug!(error = %e, attempt, "retrying publish");
                thread::sleep(settings.retry_backoff * attempt);
            }
            Err(e) => return Err(e),
        }
    }
}
