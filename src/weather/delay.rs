use std::{thread, time::Duration};

/// Stand-in for the latency of a real weather lookup.
pub trait Delay {
    fn wait(&mut self, d: Duration);
}

/// Blocks the calling thread for the full duration.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Delay for ThreadSleep {
    fn wait(&mut self, d: Duration) {
        if !d.is_zero() {
            thread::sleep(d);
        }
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    #[inline]
    fn wait(&mut self, _d: Duration) {}
}

impl<F: FnMut(Duration)> Delay for F {
    fn wait(&mut self, d: Duration) {
        self(d);
    }
}
