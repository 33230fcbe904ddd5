//! Background ticker driving the dashboard's timer display.
//!
//! The ticker thread never touches session state; it only signals that the
//! displayed clock should be refreshed. Ticks coalesce when the consumer
//! falls behind. Dropping the [`Ticker`] stops and joins the thread.

use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender, TryRecvError, TrySendError, bounded, select, tick};
use tracing::{debug, trace};

use crate::error::Result;

pub struct Ticker {
    ticks: Receiver<Instant>,
    shutdown: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(period: Duration) -> Result<Self> {
        let (tick_tx, tick_rx) = bounded::<Instant>(1);
        let (shutdown_tx, shutdown_rx) = bounded::<()>(0);

        let handle = thread::Builder::new()
            .name("tenk-ticker".to_string())
            .spawn(move || {
                let clock = tick(period);
                loop {
                    select! {
                        recv(shutdown_rx) -> _ => break,
                        recv(clock) -> msg => {
                            let Ok(at) = msg else { break };
                            match tick_tx.try_send(at) {
                                Ok(()) | Err(TrySendError::Full(_)) => {}
                                Err(TrySendError::Disconnected(_)) => break,
                            }
                        }
                    }
                }
                trace!("ticker thread exiting");
            })?;

        debug!(period_ms = period.as_millis(), "ticker started");
        Ok(Self {
            ticks: tick_rx,
            shutdown: Some(shutdown_tx),
            handle: Some(handle),
        })
    }

    /// Drain pending ticks. `true` if at least one arrived.
    #[must_use]
    pub fn try_tick(&self) -> bool {
        let mut ticked = false;
        loop {
            match self.ticks.try_recv() {
                Ok(_) => ticked = true,
                Err(TryRecvError::Empty | TryRecvError::Disconnected) => return ticked,
            }
        }
    }

    /// Stop the thread and wait for it to exit.
    pub fn cancel(mut self) {
        self.shutdown_and_join();
    }

    fn shutdown_and_join(&mut self) {
        // Dropping the sender wakes the thread's shutdown arm.
        self.shutdown.take();
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                debug!("ticker thread panicked");
            }
            debug!("ticker stopped");
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown_and_join();
    }
}
