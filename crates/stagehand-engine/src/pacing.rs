//! Inter-poll delay, injectable so tests run on virtual time.

use std::time::Duration;

pub trait Pacer {
    fn sleep(&mut self, duration: Duration);
}

/// Blocks the calling thread.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadPacer;

impl Pacer for ThreadPacer {
    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
