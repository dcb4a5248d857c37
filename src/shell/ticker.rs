use std::time::Duration;
use tokio::time::{self, Instant, Interval, MissedTickBehavior};

/// A periodic timer with an explicit start/stop lifecycle.
///
/// A stopped ticker holds no timer and its `tick` never resolves, so it can
/// sit in a `select!` next to running ones.
#[derive(Debug)]
pub struct Ticker {
    name: &'static str,
    period: Duration,
    interval: Option<Interval>,
}

impl Ticker {
    pub fn new(name: &'static str, period: Duration) -> Self {
        Self {
            name,
            period,
            interval: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    /// First tick fires one period from now. Starting a running ticker is a no-op.
    pub fn start(&mut self) {
        if self.interval.is_some() {
            return;
        }
        let mut interval = time::interval_at(Instant::now() + self.period, self.period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
        self.interval = Some(interval);
        tracing::debug!(
            ticker = self.name,
            period_ms = self.period.as_millis() as u64,
            "ticker started"
        );
    }

    pub fn stop(&mut self) {
        if self.interval.take().is_some() {
            tracing::debug!(ticker = self.name, "ticker stopped");
        }
    }

    pub async fn tick(&mut self) -> Instant {
        match self.interval.as_mut() {
            Some(interval) => interval.tick().await,
            None => std::future::pending().await,
        }
    }
}
