use std::time::{SystemTime, UNIX_EPOCH};

/// Source of record timestamps, in Unix epoch milliseconds.
pub trait Clock {
    fn now_epoch_ms(&self) -> u64;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_epoch_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis() as u64)
            .unwrap_or_default()
    }
}
