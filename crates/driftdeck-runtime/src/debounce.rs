//! Trailing-edge debouncer for best-effort persistence.
//!
//! Each `poke` restarts the quiescence window; the task runs once the
//! window elapses with no further pokes. Dropping the debouncer shuts the
//! worker down without firing a pending window - a write scheduled after
//! teardown is simply skipped.

use std::sync::mpsc::{channel, RecvTimeoutError, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;

enum Signal {
    Poke,
    Shutdown,
}

pub struct Debouncer {
    tx: Sender<Signal>,
    worker: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new<F>(delay: Duration, mut task: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        let (tx, rx) = channel::<Signal>();

        let worker = std::thread::spawn(move || loop {
            match rx.recv() {
                Ok(Signal::Poke) => {
                    // Wait out the quiescence window, restarting it on
                    // every further poke.
                    loop {
                        match rx.recv_timeout(delay) {
                            Ok(Signal::Poke) => continue,
                            Ok(Signal::Shutdown) => return,
                            Err(RecvTimeoutError::Timeout) => {
                                task();
                                break;
                            }
                            Err(RecvTimeoutError::Disconnected) => return,
                        }
                    }
                }
                Ok(Signal::Shutdown) | Err(_) => return,
            }
        });

        Self {
            tx,
            worker: Some(worker),
        }
    }

    /// Schedule (or reschedule) the task after the quiescence window
    pub fn poke(&self) {
        let _ = self.tx.send(Signal::Poke);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        debug!("shutting down debouncer");
        let _ = self.tx.send(Signal::Shutdown);
        if let Some(worker) = self.worker.take() {
            let _ = worker.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn rapid_pokes_coalesce_into_one_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::new(Duration::from_millis(30), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        for _ in 0..10 {
            debouncer.poke();
            std::thread::sleep(Duration::from_millis(2));
        }

        std::thread::sleep(Duration::from_millis(100));
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn quiet_periods_allow_multiple_runs() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::new(Duration::from_millis(10), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.poke();
        std::thread::sleep(Duration::from_millis(50));
        debouncer.poke();
        std::thread::sleep(Duration::from_millis(50));

        assert_eq!(runs.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn shutdown_skips_the_pending_run() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = runs.clone();
        let debouncer = Debouncer::new(Duration::from_millis(200), move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        debouncer.poke();
        drop(debouncer);

        std::thread::sleep(Duration::from_millis(50));
        assert_eq!(runs.load(Ordering::SeqCst), 0);
    }
}
