// src/scheduler.rs
//! Periodic re-evaluation of the renter's rent reminders.

use std::io;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{info, warn};

use crate::app::{lock, Clock, SharedState};
use crate::errors::ServerError;

pub struct ReminderScheduler {
    state: SharedState,
    clock: Arc<dyn Clock>,
    interval: Duration,
}

impl ReminderScheduler {
    pub fn new(state: SharedState, clock: Arc<dyn Clock>, interval: Duration) -> Self {
        Self {
            state,
            clock,
            interval,
        }
    }

    /// One pass of the check. Returns how many reminders were created.
    pub fn run_once(&self) -> Result<usize, ServerError> {
        let now = self.clock.now();
        let mut ws = lock(&self.state)?;
        Ok(ws.renter.check_reminders(now).len())
    }

    /// Runs a check immediately, then once per interval, on its own thread.
    pub fn spawn(self) -> io::Result<JoinHandle<()>> {
        info!(interval_secs = self.interval.as_secs(), "reminder scheduler started");
        thread::Builder::new()
            .name("reminder-scheduler".into())
            .spawn(move || loop {
                match self.run_once() {
                    Ok(0) => {}
                    Ok(created) => info!(created, "scheduled reminder check"),
                    Err(e) => warn!(error = %e, "scheduled reminder check failed"),
                }
                thread::sleep(self.interval);
            })
    }
}
