use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use futures_channel::mpsc;
use futures_util::StreamExt;
use tokio::{
    sync::watch,
    task::JoinHandle,
    time::{self, MissedTickBehavior},
};

use crate::{
    components::{
        geo::{CartesianPoint, GeoCoordinate},
        tracker::TrackerState,
    },
    config::TrackerConfig,
    error::LocationFetchError,
};

use super::{
    geospatial::coordinates::CoordinatesSystem, location::LocationFetcher, transport::Transport,
};

/// Whatever draws the tracked object. Called only with the projection of a
/// successfully fetched coordinate.
pub trait PositionSink: Send + 'static {
    fn set_position(&mut self, point: CartesianPoint);
}

/// Where fetch failures are surfaced. Must not block the polling loop.
pub trait ErrorReporter: Send + 'static {
    fn report_error(&mut self, message: &str);
}

impl<S: PositionSink> PositionSink for Arc<Mutex<S>> {
    fn set_position(&mut self, point: CartesianPoint) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .set_position(point);
    }
}

/// Reports failures to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report_error(&mut self, message: &str) {
        tracing::error!("{}", message);
    }
}

struct FetchOutcome {
    tick: u64,
    result: Result<GeoCoordinate, LocationFetchError>,
}

/// Handle to a running polling loop.
///
/// Dropping the handle stops the loop the same way [`PollingSession::stop`]
/// does.
pub struct PollingSession {
    stop_tx: watch::Sender<bool>,
    state_rx: watch::Receiver<TrackerState>,
    handle: JoinHandle<()>,
}

impl PollingSession {
    /// Cancels the timer. Fetches still in flight are abandoned and never
    /// touch the state or the sink.
    pub fn stop(&self) {
        let _ = self.stop_tx.send(true);
    }

    pub fn state(&self) -> TrackerState {
        self.state_rx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<TrackerState> {
        self.state_rx.clone()
    }

    /// Waits for the loop task to exit. Only returns after [`stop`](Self::stop).
    pub async fn join(self) {
        let PollingSession {
            stop_tx, handle, ..
        } = self;
        if let Err(e) = handle.await {
            tracing::error!("polling loop ended abnormally: {}", e);
        }
        drop(stop_tx);
    }
}

pub struct PollingSystem {}

impl PollingSystem {
    /// Spawns the polling loop on the current tokio runtime.
    ///
    /// The first fetch is issued immediately, then one per
    /// `config.poll_interval`. Ticks never wait for earlier fetches, so
    /// several can be in flight; their results are applied in completion
    /// order and the last successful one to complete is what stays
    /// displayed.
    pub fn start<T, S, R>(
        fetcher: Arc<LocationFetcher<T>>,
        sink: S,
        reporter: R,
        config: &TrackerConfig,
    ) -> PollingSession
    where
        T: Transport,
        S: PositionSink,
        R: ErrorReporter,
    {
        let (stop_tx, stop_rx) = watch::channel(false);
        let (state_tx, state_rx) = watch::channel(TrackerState::default());

        let handle = tokio::spawn(PollingSystem::poll(
            fetcher,
            sink,
            reporter,
            config.poll_interval,
            config.marker_radius,
            stop_rx,
            state_tx,
        ));

        PollingSession {
            stop_tx,
            state_rx,
            handle,
        }
    }

    async fn poll<T, S, R>(
        fetcher: Arc<LocationFetcher<T>>,
        mut sink: S,
        mut reporter: R,
        period: Duration,
        radius: f64,
        mut stop_rx: watch::Receiver<bool>,
        state_tx: watch::Sender<TrackerState>,
    ) where
        T: Transport,
        S: PositionSink,
        R: ErrorReporter,
    {
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded::<FetchOutcome>();
        let mut ticker = time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut tick: u64 = 0;

        tracing::info!(url = fetcher.url(), ?period, "polling started");

        loop {
            tokio::select! {
                biased;

                // also fires when the session handle is dropped
                _ = stop_rx.changed() => break,

                Some(outcome) = outcome_rx.next() => {
                    PollingSystem::apply(outcome, radius, &mut sink, &mut reporter, &state_tx);
                }

                _ = ticker.tick() => {
                    tick += 1;
                    tracing::debug!(tick, "polling tick");

                    let fetcher = Arc::clone(&fetcher);
                    let outcome_tx = outcome_tx.clone();
                    tokio::spawn(async move {
                        let result = fetcher.fetch_location().await;
                        // the receiver is gone once the loop has stopped
                        let _ = outcome_tx.unbounded_send(FetchOutcome { tick, result });
                    });
                }
            }
        }

        tracing::info!(ticks = tick, "polling stopped");
    }

    fn apply<S, R>(
        outcome: FetchOutcome,
        radius: f64,
        sink: &mut S,
        reporter: &mut R,
        state_tx: &watch::Sender<TrackerState>,
    ) where
        S: PositionSink,
        R: ErrorReporter,
    {
        match outcome.result {
            Ok(coordinate) => {
                let point = CoordinatesSystem::project(coordinate, radius);
                tracing::info!(
                    tick = outcome.tick,
                    latitude = coordinate.latitude,
                    longitude = coordinate.longitude,
                    "position updated"
                );
                // the sink moves first so subscribers never see a state ahead of the scene
                sink.set_position(point);
                state_tx.send_modify(|state| state.record_success(coordinate, point));
            }
            Err(error) => {
                tracing::warn!(tick = outcome.tick, "location fetch failed: {}", error);
                state_tx.send_modify(TrackerState::record_failure);
                reporter.report_error(&error.to_string());
            }
        }
    }
}
